use egui::{Align2, ComboBox, TextEdit, Ui, Window, vec2};
use egui_extras::DatePickerButton;
use lendboard_business::{
    ActiveFilters, FilterSet, LoadUsersCommand, TableSource, UserStatus, UsersTableState,
};
use lendboard_states::{StateCtx, Time};

/// Column filter popover.
///
/// Edits accumulate in a draft owned by [`UsersTableState`] and only land in
/// [`ActiveFilters`] when `Filter` is pressed. `Reset` commits a blank set
/// but keeps the popover open for further edits.
pub fn filter_popover(state_ctx: &StateCtx, ui: &mut Ui) {
    let (mut open, mut draft) = {
        let table = state_ctx.state::<UsersTableState>();
        (table.filter_open, table.filter_draft.clone())
    };
    if !open {
        return;
    }

    let organizations = distinct_organizations(state_ctx);
    let today = state_ctx.state::<Time>().as_ref().date_naive();

    let mut commit = false;
    let mut reset = false;

    Window::new("Filters")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(270.0)
        .anchor(Align2::CENTER_TOP, vec2(0.0, 80.0))
        .show(ui.ctx(), |ui| {
            ui.label("Organization");
            let selected = if draft.organization.is_empty() {
                "Select"
            } else {
                draft.organization.as_str()
            };
            ComboBox::from_id_salt("filter_organization")
                .selected_text(selected)
                .width(250.0)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut draft.organization, String::new(), "Select");
                    for organization in &organizations {
                        ui.selectable_value(
                            &mut draft.organization,
                            organization.clone(),
                            organization,
                        );
                    }
                });

            ui.add_space(8.0);
            ui.label("Username");
            ui.add(TextEdit::singleline(&mut draft.username).hint_text("User"));

            ui.add_space(8.0);
            ui.label("Email");
            ui.add(TextEdit::singleline(&mut draft.email).hint_text("Email"));

            ui.add_space(8.0);
            ui.label("Date Joined");
            ui.horizontal(|ui| {
                let mut date = draft.date_joined.unwrap_or(today);
                if ui
                    .add(DatePickerButton::new(&mut date).id_salt("filter_date_joined"))
                    .changed()
                {
                    draft.date_joined = Some(date);
                }
                if draft.date_joined.is_some() && ui.small_button("✕").clicked() {
                    draft.date_joined = None;
                }
            });

            ui.add_space(8.0);
            ui.label("Phone Number");
            ui.add(TextEdit::singleline(&mut draft.phone_number).hint_text("Phone Number"));

            ui.add_space(8.0);
            ui.label("Status");
            let status_text = draft.status.map_or("Select", UserStatus::as_str);
            ComboBox::from_id_salt("filter_status")
                .selected_text(status_text)
                .width(250.0)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut draft.status, None, "Select");
                    for status in UserStatus::ALL {
                        ui.selectable_value(&mut draft.status, Some(status), status.as_str());
                    }
                });

            ui.add_space(16.0);
            ui.horizontal(|ui| {
                if ui.button("Reset").clicked() {
                    reset = true;
                }
                if ui.button("Filter").clicked() {
                    commit = true;
                }
            });
        });

    if reset {
        draft = FilterSet::default();
        state_ctx.update::<ActiveFilters>(|filters| filters.set = FilterSet::default());
        state_ctx.enqueue_command::<LoadUsersCommand>();
    }
    if commit {
        state_ctx.update::<ActiveFilters>(|filters| filters.set = draft.clone());
        state_ctx.enqueue_command::<LoadUsersCommand>();
    }
    state_ctx.update::<UsersTableState>(|table| {
        table.filter_draft = draft;
        table.filter_open = open && !commit;
    });
}

/// Organization options come from the whole resolved dataset, not the
/// currently visible rows.
fn distinct_organizations(state_ctx: &StateCtx) -> Vec<String> {
    let mut organizations: Vec<String> = state_ctx
        .cached::<TableSource>()
        .map(|source| {
            source
                .records()
                .iter()
                .map(|record| record.organization.clone())
                .collect()
        })
        .unwrap_or_default();
    organizations.sort();
    organizations.dedup();
    organizations
}
