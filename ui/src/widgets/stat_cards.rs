use egui::{Frame, Margin, RichText, Stroke, Ui, vec2};

struct StatCard {
    icon: &'static str,
    title: &'static str,
    count: &'static str,
}

// Headline figures are static in the current release; only the table below
// is wired to live data.
const CARDS: [StatCard; 4] = [
    StatCard {
        icon: "👥",
        title: "USERS",
        count: "2,453",
    },
    StatCard {
        icon: "👤",
        title: "ACTIVE USERS",
        count: "2,453",
    },
    StatCard {
        icon: "📋",
        title: "USERS WITH LOANS",
        count: "12,453",
    },
    StatCard {
        icon: "💰",
        title: "USERS WITH SAVINGS",
        count: "102,453",
    },
];

/// The four headline cards across the top of the dashboard.
pub fn stat_cards(ui: &mut Ui) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = vec2(16.0, 16.0);
        for card in &CARDS {
            Frame::new()
                .fill(ui.visuals().extreme_bg_color)
                .stroke(Stroke::new(1.0, ui.visuals().weak_text_color()))
                .inner_margin(Margin::same(16))
                .corner_radius(4.0)
                .show(ui, |ui| {
                    ui.set_min_width(160.0);
                    ui.vertical(|ui| {
                        ui.label(RichText::new(card.icon).size(22.0));
                        ui.add_space(8.0);
                        ui.label(RichText::new(card.title).small().weak());
                        ui.add_space(4.0);
                        ui.label(RichText::new(card.count).size(22.0).strong());
                    });
                });
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui_kittest::Harness;
    use kittest::Queryable;

    #[test]
    fn all_four_cards_render() {
        let mut harness = Harness::new_ui(|ui| {
            stat_cards(ui);
        });
        harness.run();

        for card in &CARDS {
            assert!(harness.query_by_label(card.title).is_some());
        }
        assert!(harness.query_by_label("102,453").is_some());
    }
}
