use egui::{Grid, Id, RichText, Ui};
use lendboard_business::InfoItem;

/// Columns per row in a detail grid before wrapping.
const GRID_COLUMNS: usize = 4;

/// Titled label-over-value grid used by the detail view sections.
///
/// Sections can repeat (one per guarantor), so the grid id comes from the
/// caller instead of the title.
pub fn info_section(ui: &mut Ui, id: Id, title: &str, items: &[InfoItem]) {
    ui.label(RichText::new(title).strong().size(16.0));
    ui.add_space(8.0);
    Grid::new(id)
        .num_columns(GRID_COLUMNS)
        .spacing([40.0, 18.0])
        .show(ui, |ui| {
            for (index, item) in items.iter().enumerate() {
                ui.vertical(|ui| {
                    ui.label(RichText::new(item.label.to_uppercase()).small().weak());
                    ui.label(RichText::new(&item.value).strong());
                });
                if (index + 1) % GRID_COLUMNS == 0 {
                    ui.end_row();
                }
            }
        });
}
