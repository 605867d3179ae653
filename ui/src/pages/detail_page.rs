//! Per-user detail view with section tabs.

use egui::{
    Align, Button, Color32, Frame, Id, Layout, Margin, RichText, ScrollArea, Stroke, Ui, vec2,
};
use lendboard_business::{
    ActionFamily, DetailSection, DetailState, LoadUsersCommand, Route, TableSource,
    ToggleStatusInput, ToggleUserStatusCommand, UserRecord, activate_label, blacklist_label,
    education_employment_items, find_user, guarantor_items, personal_info_items, socials_items,
};
use lendboard_states::StateCtx;
use ustr::Ustr;

use crate::widgets::colors::{COLOR_BLACKLISTED, COLOR_NAVY, COLOR_STAR, COLOR_TEAL};
use crate::widgets::info_section;

/// Renders the detail view for `user_id`.
///
/// The record comes out of the same resolved dataset the table uses; visiting
/// this route directly resolves the dataset first.
pub fn detail_page(state_ctx: &StateCtx, ui: &mut Ui, user_id: Ustr) {
    let (record, is_idle) = {
        let Some(source) = state_ctx.cached::<TableSource>() else {
            return;
        };
        (
            find_user(source.records(), user_id.as_str()).cloned(),
            source.is_idle(),
        )
    };
    if is_idle {
        state_ctx.enqueue_command::<LoadUsersCommand>();
    }

    ScrollArea::vertical().show(ui, |ui| {
        if ui.link("← Back to Users").clicked() {
            state_ctx.update::<Route>(|route| *route = Route::Dashboard);
        }
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            ui.label(
                RichText::new("User Details")
                    .size(22.0)
                    .strong()
                    .color(COLOR_NAVY),
            );
            if let Some(record) = &record {
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let activate = activate_label(record.status).to_uppercase();
                    if outline_button(ui, &activate, COLOR_TEAL) {
                        request_toggle(state_ctx, user_id, ActionFamily::Activate);
                    }
                    let blacklist = blacklist_label(record.status).to_uppercase();
                    if outline_button(ui, &blacklist, COLOR_BLACKLISTED) {
                        request_toggle(state_ctx, user_id, ActionFamily::Blacklist);
                    }
                });
            }
        });
        ui.add_space(16.0);

        let Some(record) = record else {
            ui.label("Loading user information...");
            return;
        };

        account_summary(state_ctx, ui, &record);
        ui.add_space(20.0);
        section_content(state_ctx, ui, &record);
    });
}

/// The header card: identity, tier stars, balance and the section tabs.
fn account_summary(state_ctx: &StateCtx, ui: &mut Ui, record: &UserRecord) {
    Frame::new()
        .fill(ui.visuals().extreme_bg_color)
        .stroke(Stroke::new(1.0, ui.visuals().weak_text_color()))
        .inner_margin(Margin::same(16))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new("👤").size(36.0));
                ui.add_space(8.0);
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(record.full_name())
                            .size(20.0)
                            .strong()
                            .color(COLOR_NAVY),
                    );
                    ui.label(RichText::new("LSQFf587g90").weak());
                });
                ui.separator();
                ui.vertical(|ui| {
                    ui.label(RichText::new("User's Tier").weak());
                    ui.label(RichText::new("★ ☆ ☆").color(COLOR_STAR));
                });
                ui.separator();
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new("₦200,000.00")
                            .size(20.0)
                            .strong()
                            .color(COLOR_NAVY),
                    );
                    ui.label(RichText::new("9912345678/Providus Bank").small());
                });
            });

            ui.add_space(16.0);
            let selected = state_ctx.state::<DetailState>().section;
            ui.horizontal_wrapped(|ui| {
                for section in DetailSection::ALL {
                    if ui
                        .selectable_label(section == selected, section.label())
                        .clicked()
                    {
                        state_ctx.update::<DetailState>(|detail| detail.section = section);
                    }
                }
            });
        });
}

fn section_content(state_ctx: &StateCtx, ui: &mut Ui, record: &UserRecord) {
    let section = state_ctx.state::<DetailState>().section;
    match section.placeholder() {
        Some(placeholder) => {
            ui.add_space(24.0);
            ui.label(placeholder);
        }
        None => general_details(ui, record),
    }
}

fn general_details(ui: &mut Ui, record: &UserRecord) {
    Frame::new()
        .fill(ui.visuals().extreme_bg_color)
        .stroke(Stroke::new(1.0, ui.visuals().weak_text_color()))
        .inner_margin(Margin::same(16))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            info_section(
                ui,
                Id::new("personal_information"),
                "Personal Information",
                &personal_info_items(record),
            );
            ui.separator();
            info_section(
                ui,
                Id::new("education_employment"),
                "Education and Employment",
                &education_employment_items(record),
            );
            ui.separator();
            info_section(ui, Id::new("socials"), "Socials", &socials_items(record));
            for (index, guarantor) in record.guarantor.iter().enumerate() {
                ui.separator();
                info_section(
                    ui,
                    Id::new(("guarantor", index)),
                    "Guarantor",
                    &guarantor_items(guarantor),
                );
            }
        });
}

fn outline_button(ui: &mut Ui, label: &str, color: Color32) -> bool {
    ui.add(
        Button::new(RichText::new(label).color(color))
            .stroke(Stroke::new(1.0, color))
            .min_size(vec2(0.0, 32.0)),
    )
    .clicked()
}

fn request_toggle(state_ctx: &StateCtx, id: Ustr, family: ActionFamily) {
    state_ctx.update::<ToggleStatusInput>(|input| {
        input.id = Some(id);
        input.family = Some(family);
    });
    state_ctx.enqueue_command::<ToggleUserStatusCommand>();
}
