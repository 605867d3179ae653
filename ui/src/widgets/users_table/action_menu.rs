//! Per-row action menu.

use egui::Ui;
use lendboard_business::{ActionFamily, UserStatus, activate_label, blacklist_label};

/// What the user picked from a row's action menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    ViewDetails,
    Toggle(ActionFamily),
}

/// Renders the "…" menu for one row.
///
/// The two toggle entries flip their labels off the record's current status,
/// so a blacklisted row offers "Unblacklist User" and an inactive row offers
/// "Activate User".
pub fn action_menu(ui: &mut Ui, status: UserStatus) -> Option<RowAction> {
    let mut action = None;
    ui.menu_button("…", |ui| {
        if ui.button("View Details").clicked() {
            action = Some(RowAction::ViewDetails);
            ui.close();
        }
        if ui.button(blacklist_label(status)).clicked() {
            action = Some(RowAction::Toggle(ActionFamily::Blacklist));
            ui.close();
        }
        if ui.button(activate_label(status)).clicked() {
            action = Some(RowAction::Toggle(ActionFamily::Activate));
            ui.close();
        }
    });
    action
}
