//! Column definitions for the users table.

use egui_extras::Column;

/// Fixed column widths for consistent table layout
pub const ORGANIZATION_WIDTH: f32 = 140.0;
pub const EMAIL_WIDTH: f32 = 200.0;
pub const PHONE_WIDTH: f32 = 130.0;
pub const DATE_JOINED_WIDTH: f32 = 170.0;
pub const STATUS_WIDTH: f32 = 110.0;
pub const ACTIONS_WIDTH: f32 = 40.0;
pub const ROW_HEIGHT: f32 = 34.0;
pub const HEADER_HEIGHT: f32 = 28.0;

/// Table column configuration for the users table.
///
/// Returns a vector of column definitions in order:
/// - Organization (fixed)
/// - Username (flexible, fills remaining space)
/// - Email (fixed)
/// - Phone Number (fixed)
/// - Date Joined (fixed)
/// - Status (fixed)
/// - Actions (fixed, unlabeled)
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::exact(ORGANIZATION_WIDTH),   // Organization
        Column::remainder().at_least(120.0), // Username - flexible
        Column::exact(EMAIL_WIDTH),          // Email
        Column::exact(PHONE_WIDTH),          // Phone Number
        Column::exact(DATE_JOINED_WIDTH),    // Date Joined
        Column::exact(STATUS_WIDTH),         // Status
        Column::exact(ACTIONS_WIDTH),        // Actions
    ]
}
