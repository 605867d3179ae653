//! Chrome-level layout state shared by the header, sidebar and pages.

use chrono::{DateTime, Utc};
use lendboard_states::State;

/// State behind the application chrome.
///
/// `search_text` is the global search box in the header; the dashboard page
/// exposes a second input bound to the same value, and the visible-rows
/// pipeline reads it as the search term.
#[derive(Debug)]
pub struct LayoutState {
    pub search_text: String,
    pub sidebar_open: bool,
    /// When the dashboard route was entered; drives the landing splash.
    pub dashboard_entered_at: Option<DateTime<Utc>>,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            sidebar_open: true,
            dashboard_entered_at: None,
        }
    }
}

impl State for LayoutState {}
