//! Stacked card layout used below the responsive breakpoint.

use egui::{Align, Frame, Layout, Margin, RichText, Sense, Stroke, Ui, UiBuilder};
use lendboard_business::UserRecord;
use ustr::Ustr;

use super::TableEvents;
use super::action_menu::action_menu;
use crate::widgets::status_chip;

/// Renders one card per visible row.
///
/// The actions menu leads each card and the field labels keep their compact
/// single-word form. Clicking anywhere else on a card opens the detail view.
pub fn render_user_cards(ui: &mut Ui, records: &[UserRecord]) -> TableEvents {
    let mut events = TableEvents::default();
    for record in records {
        let response = ui
            .scope_builder(
                UiBuilder::new()
                    .id_salt(("user_card", &record.id))
                    .sense(Sense::click()),
                |ui| {
                    Frame::new()
                        .fill(ui.visuals().extreme_bg_color)
                        .stroke(Stroke::new(1.0, ui.visuals().weak_text_color()))
                        .inner_margin(Margin::same(12))
                        .corner_radius(4.0)
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            card_row(ui, "Actions", |ui| {
                                if let Some(picked) = action_menu(ui, record.status) {
                                    events.apply(record, picked);
                                }
                            });
                            card_row(ui, "Organization", |ui| {
                                ui.label(&record.organization);
                            });
                            card_row(ui, "Username", |ui| {
                                ui.label(record.full_name());
                            });
                            card_row(ui, "Email", |ui| {
                                ui.label(&record.email);
                            });
                            card_row(ui, "PhoneNumber", |ui| {
                                ui.label(record.formatted_phone());
                            });
                            card_row(ui, "DateJoined", |ui| {
                                ui.label(record.joined_display());
                            });
                            card_row(ui, "Status", |ui| {
                                status_chip(ui, record.status);
                            });
                        });
                },
            )
            .response;

        if response.clicked() && events.view_details.is_none() {
            events.view_details = Some(Ustr::from(&record.id));
        }
        ui.add_space(10.0);
    }
    events
}

fn card_row(ui: &mut Ui, label: &str, value: impl FnOnce(&mut Ui)) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).small().weak());
        ui.with_layout(Layout::right_to_left(Align::Center), value);
    });
}
