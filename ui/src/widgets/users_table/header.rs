//! Table header rendering for the users table.

use egui::{Button, RichText, Ui};
use egui_extras::TableRow;

/// Header column labels. Each one doubles as the filter popover trigger.
const HEADERS: [&str; 6] = [
    "ORGANIZATION",
    "USERNAME",
    "EMAIL",
    "PHONE NUMBER",
    "DATE JOINED",
    "STATUS",
];

/// Renders the header row; returns true when any label was clicked to open
/// the filter popover.
#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>) -> bool {
    let mut open_filters = false;
    for label in HEADERS {
        header.col(|ui| {
            if render_header_cell(ui, label) {
                open_filters = true;
            }
        });
    }
    // The actions column has no header.
    header.col(|_ui| {});
    open_filters
}

#[inline]
fn render_header_cell(ui: &mut Ui, label: &str) -> bool {
    ui.add(Button::new(RichText::new(format!("{label} ▼")).small().strong()).frame(false))
        .clicked()
}
