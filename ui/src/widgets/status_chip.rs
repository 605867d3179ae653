use egui::{Color32, Frame, Margin, Response, RichText, Ui};
use lendboard_business::UserStatus;

use super::colors::{COLOR_ACTIVE, COLOR_BLACKLISTED, COLOR_INACTIVE, COLOR_PENDING};

fn status_color(status: UserStatus) -> Color32 {
    match status {
        UserStatus::Active => COLOR_ACTIVE,
        UserStatus::Inactive => COLOR_INACTIVE,
        UserStatus::Pending => COLOR_PENDING,
        UserStatus::Blacklisted => COLOR_BLACKLISTED,
    }
}

/// Renders a user status as a tinted pill.
pub fn status_chip(ui: &mut Ui, status: UserStatus) -> Response {
    let color = status_color(status);
    Frame::new()
        .fill(color.gamma_multiply(0.12))
        .inner_margin(Margin::symmetric(10, 3))
        .corner_radius(12.0)
        .show(ui, |ui| {
            ui.label(RichText::new(status.as_str()).color(color));
        })
        .response
}
