//! Pages module for the application.
//!
//! This module contains the different pages that can be displayed based on the route:
//! - `login_page`: Sign-in form for unauthenticated users
//! - `dashboard_page`: Headline cards, search and the users table
//! - `detail_page`: Tabbed view of one user record

mod dashboard_page;
mod detail_page;
mod login_page;

pub use dashboard_page::dashboard_page;
pub use detail_page::detail_page;
pub use login_page::{LoginForm, login_page};
