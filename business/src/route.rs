//! Route state for page navigation.
//!
//! This module defines the route enum that determines which page to display.

use lendboard_states::State;
use ustr::Ustr;

/// Represents the current page/route of the application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    /// Login page - shown when no session has been started yet
    #[default]
    Login,
    /// Users dashboard - cards, search and the users table
    Dashboard,
    /// Detail view for one user record, addressed by record id
    UserDetail(Ustr),
}

impl State for Route {}
