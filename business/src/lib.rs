//! Domain layer of the Lendboard console.
//!
//! Everything the UI renders lives here as states, computes and commands:
//! - UI reads state + computes and renders
//! - UI dispatches commands
//! - Commands own every side effect (network, cache)

mod actions;
mod cache;
mod config;
mod detail;
mod filters;
mod layout;
mod paginate;
mod records;
mod route;
mod source;
mod table_state;

pub use actions::{
    ActionFamily, ToggleStatusInput, ToggleUserStatusCommand, activate_label, blacklist_label,
    next_status,
};
pub use cache::{CacheError, CacheRead, CacheStore, MemoryStore, UserCache};
#[cfg(not(target_arch = "wasm32"))]
pub use cache::FileStore;
pub use config::AppConfig;
pub use detail::{
    DetailSection, DetailState, InfoItem, education_employment_items, find_user, guarantor_items,
    personal_info_items, socials_items,
};
pub use filters::{ActiveFilters, FilterSet, VisibleUsers, matches_search, visible_records};
pub use layout::LayoutState;
pub use paginate::{PAGE_SIZE_OPTIONS, PageControl, page_controls, page_slice, total_pages};
pub use records::{Guarantor, UserRecord, UserStatus, format_phone_number};
pub use route::Route;
pub use source::{LoadUsersCommand, PersistFetchedUsersCommand, SourceResolution, TableSource};
pub use table_state::UsersTableState;
