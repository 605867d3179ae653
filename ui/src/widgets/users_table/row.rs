//! Row rendering for the users table.

use egui_extras::TableRow;
use lendboard_business::UserRecord;

use super::action_menu::{RowAction, action_menu};
use crate::widgets::status_chip;

/// Result of rendering a user row.
pub struct UserRowResult {
    /// The row background was clicked (navigates to the detail view).
    pub clicked: bool,
    /// A pick from the row's action menu, if any.
    pub action: Option<RowAction>,
}

/// Renders a single user row with all cells.
#[inline]
pub fn render_user_row(row: &mut TableRow<'_, '_>, record: &UserRecord) -> UserRowResult {
    let mut action = None;

    row.col(|ui| {
        ui.label(&record.organization);
    });
    row.col(|ui| {
        ui.label(record.full_name());
    });
    row.col(|ui| {
        ui.label(&record.email);
    });
    row.col(|ui| {
        ui.label(record.formatted_phone());
    });
    row.col(|ui| {
        ui.label(record.joined_display());
    });
    row.col(|ui| {
        status_chip(ui, record.status);
    });
    row.col(|ui| {
        if let Some(picked) = action_menu(ui, record.status) {
            action = Some(picked);
        }
    });

    UserRowResult {
        clicked: row.response().clicked(),
        action,
    }
}
