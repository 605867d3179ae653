pub mod colors;
mod empty_state;
mod filter_popover;
mod header;
mod info_section;
mod sidebar;
mod stat_cards;
mod status_chip;
mod users_table;

pub use empty_state::empty_state;
pub use filter_popover::filter_popover;
pub use header::header_bar;
pub use info_section::info_section;
pub use sidebar::sidebar;
pub use stat_cards::stat_cards;
pub use status_chip::status_chip;
pub use users_table::users_table_panel;
