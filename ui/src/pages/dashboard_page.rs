//! The main dashboard: headline cards, search and the users table.

use chrono::Duration;
use egui::{Direction, Layout, RichText, ScrollArea, TextEdit, Ui};
use lendboard_business::{AppConfig, LayoutState};
use lendboard_states::{StateCtx, Time};

use crate::widgets;
use crate::widgets::colors::{COLOR_NAVY, COLOR_TEAL};

/// Renders the dashboard, or the landing splash while the configured delay
/// since entering the route has not elapsed yet.
pub fn dashboard_page(state_ctx: &StateCtx, ui: &mut Ui) {
    let now = *state_ctx.state::<Time>().as_ref();
    let delay_ms = state_ctx.state::<AppConfig>().landing_delay_ms;
    let entered_at = state_ctx.state::<LayoutState>().dashboard_entered_at;
    let entered_at = match entered_at {
        Some(at) => at,
        None => {
            state_ctx.update::<LayoutState>(|layout| layout.dashboard_entered_at = Some(now));
            now
        }
    };
    if now.signed_duration_since(entered_at) < Duration::milliseconds(delay_ms as i64) {
        landing_splash(ui);
        ui.ctx()
            .request_repaint_after(std::time::Duration::from_millis(50));
        return;
    }

    ScrollArea::vertical().show(ui, |ui| {
        ui.label(RichText::new("Users").size(24.0).strong().color(COLOR_NAVY));
        ui.add_space(16.0);
        widgets::stat_cards(ui);
        ui.add_space(20.0);

        // Second search box; writes through to the same term as the header's.
        let mut search = state_ctx.state::<LayoutState>().search_text.clone();
        let response = ui.add(
            TextEdit::singleline(&mut search)
                .hint_text("Search for anything")
                .desired_width(320.0),
        );
        if response.changed() {
            state_ctx.update::<LayoutState>(|layout| layout.search_text = search);
        }

        ui.add_space(16.0);
        widgets::users_table_panel(state_ctx, ui);
    });
}

fn landing_splash(ui: &mut Ui) {
    ui.with_layout(Layout::centered_and_justified(Direction::TopDown), |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("lendboard")
                    .size(32.0)
                    .strong()
                    .color(COLOR_TEAL),
            );
            ui.add_space(12.0);
            ui.spinner();
        });
    });
}
