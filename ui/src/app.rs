use chrono::Utc;
use lendboard_business::{LayoutState, Route};
use lendboard_states::Time;

use crate::{pages, state::State, widgets};

/// Width at or below which the console collapses into its mobile layout.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

pub struct LendboardApp {
    pub state: State,
}

impl LendboardApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for LendboardApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Sync Compute for render
        self.state.ctx.sync_computes();
        self.state
            .ctx
            .update::<Time>(|time| *time.as_mut() = Utc::now());

        let route = self.state.ctx.state::<Route>().clone();
        if route == Route::Login {
            egui::CentralPanel::default().show(ctx, |ui| {
                pages::login_page(&mut self.state, ui);
            });
        } else {
            egui::TopBottomPanel::top("header").show(ctx, |ui| {
                widgets::header_bar(&self.state.ctx, ui);
            });

            let sidebar_open = self.state.ctx.state::<LayoutState>().sidebar_open;
            let wide = ctx.screen_rect().width() > MOBILE_BREAKPOINT;
            egui::SidePanel::left("sidebar")
                .resizable(false)
                .default_width(240.0)
                .show_animated(ctx, sidebar_open && wide, |ui| {
                    widgets::sidebar(&self.state.ctx, ui);
                });

            egui::CentralPanel::default().show(ctx, |ui| {
                if let Route::UserDetail(id) = route {
                    pages::detail_page(&self.state.ctx, ui, id);
                } else {
                    pages::dashboard_page(&self.state.ctx, ui);
                }
            });
        }

        // Run background jobs
        self.state.ctx.run_computed();
    }
}
