use egui::{Align, Layout, RichText, TextEdit, Ui};
use lendboard_business::LayoutState;
use lendboard_states::StateCtx;

use super::colors::COLOR_TEAL;

/// Top chrome: sidebar toggle, wordmark, global search and the profile strip.
///
/// The search field feeds the same term as the dashboard search box; both
/// write through [`LayoutState`].
pub fn header_bar(state_ctx: &StateCtx, ui: &mut Ui) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        if ui.button("☰").clicked() {
            state_ctx.update::<LayoutState>(|layout| layout.sidebar_open = !layout.sidebar_open);
        }
        ui.label(
            RichText::new("lendboard")
                .size(22.0)
                .strong()
                .color(COLOR_TEAL),
        );
        ui.add_space(24.0);

        let mut search = state_ctx.state::<LayoutState>().search_text.clone();
        let response = ui.add(
            TextEdit::singleline(&mut search)
                .hint_text("Search for anything")
                .desired_width(280.0),
        );
        if response.changed() {
            state_ctx.update::<LayoutState>(|layout| layout.search_text = search);
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label("▼");
            ui.label(RichText::new("Adedeji").strong());
            ui.label("🔔");
            ui.add_space(8.0);
            ui.label(RichText::new("Docs").underline());
        });
    });
    ui.add_space(4.0);
}
