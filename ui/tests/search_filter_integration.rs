//! Integration tests for the search box and the column filter popover.
//!
//! These tests verify that:
//! 1. The header search term narrows the visible rows
//! 2. An unmatched term shows the adjust-your-search copy
//! 3. Filter commits from the popover narrow the rows and close it
//! 4. Reset clears the committed filters but keeps the popover open

mod common;

use crate::common::{sample_users, seeded_harness};
use kittest::Queryable;
use lendboard_business::{ActiveFilters, LayoutState, UserStatus, UsersTableState};

#[test]
fn search_term_narrows_the_rows() {
    let mut harness = seeded_harness(sample_users());
    for _ in 0..5 {
        harness.step();
    }

    harness
        .state()
        .state
        .ctx
        .update::<LayoutState>(|layout| layout.search_text = "grace".to_owned());
    for _ in 0..5 {
        harness.step();
    }

    assert!(
        harness.query_by_label_contains("Grace Effiom").is_some(),
        "matching row should stay visible"
    );
    assert!(
        harness.query_by_label_contains("Debby Ogana").is_none(),
        "non-matching row should be filtered out"
    );
    assert!(
        harness.query_by_label_contains("out of 1").is_some(),
        "footer should count the filtered rows"
    );
}

#[test]
fn unmatched_search_shows_the_adjust_copy() {
    let mut harness = seeded_harness(sample_users());
    for _ in 0..5 {
        harness.step();
    }

    harness
        .state()
        .state
        .ctx
        .update::<LayoutState>(|layout| layout.search_text = "zzz-no-such-user".to_owned());
    for _ in 0..5 {
        harness.step();
    }

    assert!(
        harness.query_by_label_contains("No users found").is_some(),
        "no matches should surface the empty state"
    );
    assert!(
        harness
            .query_by_label_contains(
                "Try adjusting your search or filters to find what you're looking for."
            )
            .is_some(),
        "a constrained empty result uses the adjust copy"
    );
}

#[test]
fn filter_commit_narrows_rows_and_closes_the_popover() {
    let mut harness = seeded_harness(sample_users());
    for _ in 0..5 {
        harness.step();
    }

    // Any column header opens the shared popover
    harness.get_by_label("ORGANIZATION ▼").click();
    for _ in 0..2 {
        harness.step();
    }
    assert!(
        harness.query_by_label("Filters").is_some(),
        "popover should open from the header"
    );

    // Drive the draft through state; the popover round-trips it every frame
    harness
        .state()
        .state
        .ctx
        .update::<UsersTableState>(|table| table.filter_draft.status = Some(UserStatus::Pending));
    harness.step();

    harness.get_by_label("Filter").click();
    for _ in 0..5 {
        harness.step();
    }

    assert_eq!(
        harness.state().state.ctx.state::<ActiveFilters>().set.status,
        Some(UserStatus::Pending),
        "commit should publish the draft"
    );
    assert!(
        harness.query_by_label_contains("Debby Ogana").is_some(),
        "row matching the committed filter should stay"
    );
    assert!(
        harness.query_by_label_contains("Grace Effiom").is_none(),
        "row failing the committed filter should go"
    );
    assert!(
        harness.query_by_label("Filters").is_none(),
        "commit should close the popover"
    );
}

#[test]
fn reset_clears_committed_filters_but_stays_open() {
    let mut harness = seeded_harness(sample_users());
    for _ in 0..5 {
        harness.step();
    }

    harness
        .state()
        .state
        .ctx
        .update::<ActiveFilters>(|filters| filters.set.status = Some(UserStatus::Pending));
    for _ in 0..5 {
        harness.step();
    }
    assert!(
        harness.query_by_label_contains("Grace Effiom").is_none(),
        "committed filter should be in effect before the reset"
    );

    harness.get_by_label("STATUS ▼").click();
    for _ in 0..2 {
        harness.step();
    }
    harness.get_by_label("Reset").click();
    for _ in 0..5 {
        harness.step();
    }

    assert!(
        harness.state().state.ctx.state::<ActiveFilters>().set.is_empty(),
        "reset should commit a blank filter set"
    );
    assert!(
        harness.query_by_label_contains("Grace Effiom").is_some(),
        "all rows should return after the reset"
    );
    assert!(
        harness.query_by_label("Filters").is_some(),
        "reset should keep the popover open"
    );
}
