//! Sign-in page for unauthenticated users.
//!
//! Credentials are not checked against a backend; a filled-in form is all it
//! takes to enter the dashboard.

use egui::{Align, Button, Color32, Key, Layout, Response, RichText, TextEdit, Ui, vec2};
use lendboard_business::Route;

use crate::state::State;
use crate::widgets::colors::{COLOR_BLACKLISTED, COLOR_NAVY, COLOR_TEAL};

/// Chrome-local sign-in form state.
#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub email_error: Option<&'static str>,
    pub password_error: Option<&'static str>,
}

impl LoginForm {
    /// Both fields must be filled before submission goes through.
    fn validate(&mut self) -> bool {
        self.email_error = self.email.is_empty().then_some("Email is required");
        self.password_error = self.password.is_empty().then_some("Password is required");
        self.email_error.is_none() && self.password_error.is_none()
    }
}

/// Renders the sign-in page with a centered credentials form.
pub fn login_page(state: &mut State, ui: &mut Ui) -> Response {
    let form = &mut state.login_form;
    let mut submit = false;

    let response = ui
        .with_layout(Layout::top_down(Align::Center), |ui| {
            ui.add_space(64.0);
            ui.label(
                RichText::new("lendboard")
                    .size(30.0)
                    .strong()
                    .color(COLOR_TEAL),
            );
            ui.add_space(32.0);
            ui.label(
                RichText::new("Welcome!")
                    .size(24.0)
                    .strong()
                    .color(COLOR_NAVY),
            );
            ui.label("Enter details to login.");
            ui.add_space(24.0);

            let email = ui.add(
                TextEdit::singleline(&mut form.email)
                    .hint_text("Email")
                    .desired_width(300.0),
            );
            if email.changed() {
                form.email_error = None;
            }
            field_error(ui, form.email_error);

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                // Keep the row centered under the email field.
                let inset = (ui.available_width() - 300.0).max(0.0) / 2.0;
                ui.add_space(inset);
                let password = ui.add(
                    TextEdit::singleline(&mut form.password)
                        .password(!form.show_password)
                        .hint_text("Password")
                        .desired_width(240.0),
                );
                if password.changed() {
                    form.password_error = None;
                }
                let toggle = if form.show_password { "HIDE" } else { "SHOW" };
                if ui.small_button(toggle).clicked() {
                    form.show_password = !form.show_password;
                }
                if password.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                    submit = true;
                }
            });
            field_error(ui, form.password_error);

            ui.add_space(12.0);
            ui.link(RichText::new("FORGOT PASSWORD?").small().color(COLOR_TEAL));

            ui.add_space(16.0);
            let log_in = ui.add(
                Button::new(RichText::new("LOG IN").color(Color32::WHITE))
                    .fill(COLOR_TEAL)
                    .min_size(vec2(300.0, 40.0)),
            );
            if log_in.clicked() {
                submit = true;
            }
        })
        .response;

    if submit && form.validate() {
        state.ctx.update::<Route>(|route| *route = Route::Dashboard);
    }
    response
}

fn field_error(ui: &mut Ui, error: Option<&'static str>) {
    if let Some(message) = error {
        ui.label(RichText::new(message).small().color(COLOR_BLACKLISTED));
    }
}
