use egui::{Align, Layout, Response, RichText, Ui};

const NO_MATCH_MESSAGE: &str =
    "Try adjusting your search or filters to find what you're looking for.";
const NO_DATA_MESSAGE: &str = "There are no users to display at the moment.";

/// Placeholder body shown when the table has no rows.
///
/// `constrained` distinguishes "your search matched nothing" from "the
/// dataset itself is empty" so the copy can suggest the right fix.
pub fn empty_state(ui: &mut Ui, constrained: bool) -> Response {
    ui.with_layout(Layout::top_down(Align::Center), |ui| {
        ui.add_space(48.0);
        ui.label(RichText::new("📄").size(40.0));
        ui.add_space(8.0);
        ui.heading("No users found");
        ui.add_space(4.0);
        ui.label(if constrained {
            NO_MATCH_MESSAGE
        } else {
            NO_DATA_MESSAGE
        });
        ui.add_space(48.0);
    })
    .response
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui_kittest::Harness;
    use kittest::Queryable;

    #[test]
    fn message_depends_on_active_constraints() {
        let mut harness = Harness::new_ui(|ui| {
            empty_state(ui, false);
        });
        harness.run();
        assert!(harness.query_by_label(NO_DATA_MESSAGE).is_some());
        assert!(harness.query_by_label(NO_MATCH_MESSAGE).is_none());

        let mut harness = Harness::new_ui(|ui| {
            empty_state(ui, true);
        });
        harness.run();
        assert!(harness.query_by_label(NO_MATCH_MESSAGE).is_some());
    }
}
