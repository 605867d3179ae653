use egui::{RichText, ScrollArea, Ui};
use lendboard_business::{LayoutState, Route};
use lendboard_states::StateCtx;

const GROUPS: [(&str, &[&str]); 3] = [
    (
        "CUSTOMERS",
        &[
            "Users",
            "Guarantors",
            "Loans",
            "Decision Models",
            "Savings",
            "Loan Requests",
            "Whitelist",
            "Karma",
        ],
    ),
    ("BUSINESSES", &["Organization", "Loan Products"]),
    (
        "SETTINGS",
        &[
            "Prefrences",
            "Fees and Pricing",
            "Audit Logs",
            "System Messages",
        ],
    ),
];

/// Navigation rail listing the console sections.
///
/// Only `Users` is wired up in the current release; the other entries are
/// inert. `Logout` drops back to the sign-in screen.
pub fn sidebar(state_ctx: &StateCtx, ui: &mut Ui) {
    ScrollArea::vertical().show(ui, |ui| {
        ui.add_space(8.0);
        entry(ui, "💼 Switch Organization ▼", false);
        ui.add_space(8.0);
        entry(ui, "🏠 Dashboard", false);

        for (title, entries) in GROUPS {
            ui.add_space(12.0);
            ui.label(RichText::new(title).small().weak());
            for name in entries {
                entry(ui, name, *name == "Users");
            }
        }

        ui.add_space(12.0);
        ui.separator();
        if entry(ui, "Logout", false) {
            logout(state_ctx);
        }
        ui.label(RichText::new("v1.2.0").small().weak());
        ui.add_space(8.0);
    });
}

fn entry(ui: &mut Ui, name: &str, active: bool) -> bool {
    ui.selectable_label(active, name).clicked()
}

/// Drops every session-scoped bit of chrome state and returns to sign-in.
fn logout(state_ctx: &StateCtx) {
    state_ctx.update::<LayoutState>(|layout| {
        layout.search_text.clear();
        layout.dashboard_entered_at = None;
    });
    state_ctx.update::<Route>(|route| *route = Route::Login);
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui_kittest::Harness;
    use kittest::Queryable;
    use lendboard_states::StateCtx;

    fn nav_ctx() -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.add_state(LayoutState::default());
        ctx.add_state(Route::Dashboard);
        ctx
    }

    #[test]
    fn lists_every_section_entry() {
        let mut harness = Harness::new_ui_state(
            |ui, state_ctx| {
                sidebar(state_ctx, ui);
            },
            nav_ctx(),
        );
        harness.run();

        for (title, entries) in GROUPS {
            assert!(harness.query_by_label(title).is_some(), "missing {title}");
            for name in entries {
                assert!(harness.query_by_label(name).is_some(), "missing {name}");
            }
        }
        assert!(harness.query_by_label("v1.2.0").is_some());
    }

    #[test]
    fn logout_returns_to_sign_in() {
        let mut harness = Harness::new_ui_state(
            |ui, state_ctx| {
                sidebar(state_ctx, ui);
            },
            nav_ctx(),
        );
        harness.run();

        harness.get_by_label("Logout").click();
        harness.run();
        assert_eq!(*harness.state().state::<Route>(), Route::Login);
    }
}
