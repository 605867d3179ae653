//! UI-affine state for the users table: pagination cursor, filter popover
//! draft and bookkeeping for cache hydration.
//!
//! Lives in the business crate so UI code stays dumb: widgets read this
//! state, mutate it through its methods and dispatch commands.

use crate::{FilterSet, PAGE_SIZE_OPTIONS};
use chrono::{DateTime, Utc};
use lendboard_states::State;

#[derive(Debug)]
pub struct UsersTableState {
    /// Current page, 1-based.
    pub page: usize,
    /// Rows per page, one of [`PAGE_SIZE_OPTIONS`].
    pub page_size: usize,
    /// Whether the filter popover is open.
    pub filter_open: bool,
    /// Draft edited inside the popover; committed by the Filter button.
    pub filter_draft: FilterSet,
    /// `resolved_at` of the last fetched resolution already handed to the
    /// persist command, so each fetch is written back exactly once.
    pub persisted_stamp: Option<DateTime<Utc>>,
    /// Last visible-rows revision this table has rendered.
    seen_revision: u64,
}

impl Default for UsersTableState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: PAGE_SIZE_OPTIONS[0],
            filter_open: false,
            filter_draft: FilterSet::default(),
            persisted_stamp: None,
            seen_revision: 0,
        }
    }
}

impl State for UsersTableState {}

impl UsersTableState {
    /// Observe the current visible-rows revision. Returns to page 1 when the
    /// revision moved, i.e. when search, filters or the dataset changed.
    pub fn sync_revision(&mut self, revision: u64) -> bool {
        if self.seen_revision == revision {
            return false;
        }
        self.seen_revision = revision;
        self.page = 1;
        true
    }

    /// Jump to `page` if it exists; out-of-range requests are ignored.
    pub fn set_page(&mut self, page: usize, total: usize) {
        if page >= 1 && page <= total {
            self.page = page;
        }
    }

    /// Switch rows-per-page and restart from the first page.
    pub fn set_page_size(&mut self, size: usize) {
        if self.page_size != size {
            self.page_size = size;
            self.page = 1;
        }
    }

    /// Open the popover with the draft seeded from the committed filters.
    pub fn open_filters(&mut self, committed: &FilterSet) {
        self.filter_draft = committed.clone();
        self.filter_open = true;
    }

    pub fn close_filters(&mut self) {
        self.filter_open = false;
    }
}
