//! Footer: rows-per-page selector and the page control strip.

use egui::{Align, Button, ComboBox, Layout, Ui};
use lendboard_business::{PAGE_SIZE_OPTIONS, PageControl, UsersTableState, page_controls};
use lendboard_states::StateCtx;

/// Renders "Showing <n> out of <count>" plus the numbered page strip.
pub fn pagination_footer(state_ctx: &StateCtx, ui: &mut Ui, filtered_count: usize, total: usize) {
    let (page, page_size) = {
        let table = state_ctx.state::<UsersTableState>();
        (table.page, table.page_size)
    };

    ui.horizontal(|ui| {
        ui.label("Showing");
        let mut selected = page_size;
        ComboBox::from_id_salt("users_page_size")
            .selected_text(selected.to_string())
            .width(64.0)
            .show_ui(ui, |ui| {
                for option in PAGE_SIZE_OPTIONS {
                    ui.selectable_value(&mut selected, option, option.to_string());
                }
            });
        if selected != page_size {
            state_ctx.update::<UsersTableState>(|table| table.set_page_size(selected));
        }
        ui.label(format!("out of {filtered_count}"));

        let mut requested = None;
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            // Right-to-left layout, so controls render in reverse.
            for control in page_controls(page, total).into_iter().rev() {
                if let Some(target) = page_control_button(ui, control, page) {
                    requested = Some(target);
                }
            }
        });
        if let Some(target) = requested {
            state_ctx.update::<UsersTableState>(|table| table.set_page(target, total));
        }
    });
}

fn page_control_button(ui: &mut Ui, control: PageControl, page: usize) -> Option<usize> {
    match control {
        PageControl::Previous { enabled } => ui
            .add_enabled(enabled, Button::new("‹"))
            .clicked()
            .then_some(page.saturating_sub(1)),
        PageControl::Next { enabled } => ui
            .add_enabled(enabled, Button::new("›"))
            .clicked()
            .then_some(page + 1),
        PageControl::Page { number, current } => ui
            .selectable_label(current, number.to_string())
            .clicked()
            .then_some(number),
        PageControl::Ellipsis => {
            ui.label("...");
            None
        }
    }
}
