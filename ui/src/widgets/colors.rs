//! Shared color constants for the UI.

use egui::Color32;

/// Teal accent used by the wordmark and primary buttons.
pub const COLOR_TEAL: Color32 = Color32::from_rgb(57, 205, 204);

/// Navy used for headings and emphasized copy.
pub const COLOR_NAVY: Color32 = Color32::from_rgb(33, 63, 125);

/// Green for the `Active` status.
pub const COLOR_ACTIVE: Color32 = Color32::from_rgb(57, 205, 98);

/// Slate gray for the `Inactive` status.
pub const COLOR_INACTIVE: Color32 = Color32::from_rgb(84, 95, 125);

/// Amber for the `Pending` status.
pub const COLOR_PENDING: Color32 = Color32::from_rgb(233, 178, 0);

/// Red for the `Blacklisted` status.
pub const COLOR_BLACKLISTED: Color32 = Color32::from_rgb(228, 3, 59);

/// Gold used by the tier stars on the detail header.
pub const COLOR_STAR: Color32 = Color32::from_rgb(233, 178, 0);
