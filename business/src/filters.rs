//! Row visibility pipeline: global search, column filters and the derived
//! set of visible rows.
//!
//! Search and filters are conjunctive. The global search term is matched
//! case-insensitively against name, email, organization, normalized phone
//! number and status; each committed filter then narrows the set further.

use crate::{LayoutState, SourceResolution, TableSource, UserRecord, UserStatus};
use chrono::{DateTime, NaiveDate, Utc};
use lendboard_states::{Compute, ComputeDeps, Dep, State, Updater, assign_impl};
use std::any::{Any, TypeId};
use std::mem::Discriminant;

/// One committed (or drafted) set of column filters.
///
/// Empty strings and `None` mean "no constraint"; [`FilterSet::default`] is
/// therefore the unfiltered state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    pub organization: String,
    pub username: String,
    pub email: String,
    pub date_joined: Option<NaiveDate>,
    pub phone_number: String,
    pub status: Option<UserStatus>,
}

impl FilterSet {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Whether `record` passes every active filter.
    pub fn matches(&self, record: &UserRecord) -> bool {
        if !self.organization.is_empty()
            && !record
                .organization
                .to_lowercase()
                .contains(&self.organization.to_lowercase())
        {
            return false;
        }
        if !self.username.is_empty() {
            let needle = self.username.to_lowercase();
            if !record.first_name.to_lowercase().contains(&needle)
                && !record.last_name.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        if !self.email.is_empty()
            && !record.email.to_lowercase().contains(&self.email.to_lowercase())
        {
            return false;
        }
        // Phone input is digits; match against the normalized number without
        // case folding.
        if !self.phone_number.is_empty()
            && !record.formatted_phone().contains(&self.phone_number)
        {
            return false;
        }
        if let Some(status) = self.status
            && record.status != status
        {
            return false;
        }
        if let Some(date) = self.date_joined {
            match record.date_joined {
                Some(joined) if joined.date_naive() == date => {}
                _ => return false,
            }
        }
        true
    }
}

/// Whether `record` matches the global search term. An empty term matches
/// everything.
pub fn matches_search(record: &UserRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    record.full_name().to_lowercase().contains(&needle)
        || record.email.to_lowercase().contains(&needle)
        || record.organization.to_lowercase().contains(&needle)
        || record.formatted_phone().to_lowercase().contains(&needle)
        || record.status.as_str().to_lowercase().contains(&needle)
}

/// Apply search first, then filters, preserving dataset order.
pub fn visible_records(
    records: &[UserRecord],
    search: &str,
    filters: &FilterSet,
) -> Vec<UserRecord> {
    records
        .iter()
        .filter(|record| matches_search(record, search))
        .filter(|record| filters.matches(record))
        .cloned()
        .collect()
}

/// The committed filters, as applied by the Filter button in the popover.
#[derive(Debug, Default)]
pub struct ActiveFilters {
    pub set: FilterSet,
}

impl State for ActiveFilters {}

/// Inputs of the last visible-rows computation, compared by value so spurious
/// dirty flags (say, a sidebar toggle touching `LayoutState`) do not reset
/// pagination.
#[derive(Debug, Clone, PartialEq)]
struct VisibleInputs {
    resolved_at: Option<DateTime<Utc>>,
    branch: Discriminant<SourceResolution>,
    search: String,
    filters: FilterSet,
}

/// Derived set of rows the table shows, before pagination.
///
/// `revision` increments exactly when the inputs genuinely changed; the table
/// resets to page 1 whenever it observes a new revision.
#[derive(Debug, Default)]
pub struct VisibleUsers {
    records: Vec<UserRecord>,
    revision: u64,
    constrained: bool,
    inputs: Option<VisibleInputs>,
}

impl VisibleUsers {
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// True when a search term or at least one filter is active. Decides
    /// which empty-state message the table shows.
    pub fn is_constrained(&self) -> bool {
        self.constrained
    }
}

impl Compute for VisibleUsers {
    fn deps(&self) -> ComputeDeps {
        const STATE_IDS: [TypeId; 2] = [
            TypeId::of::<LayoutState>(),
            TypeId::of::<ActiveFilters>(),
        ];
        const COMPUTE_IDS: [TypeId; 1] = [TypeId::of::<TableSource>()];
        (&STATE_IDS, &COMPUTE_IDS)
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let search = deps.get_state_ref::<LayoutState>().search_text.clone();
        let filters = deps.get_state_ref::<ActiveFilters>().set.clone();
        let Some(source) = deps.cached::<TableSource>() else {
            return;
        };

        let inputs = VisibleInputs {
            resolved_at: source.resolved_at,
            branch: std::mem::discriminant(&source.resolution),
            search,
            filters,
        };
        if self.inputs.as_ref() == Some(&inputs) {
            return;
        }

        let records = visible_records(source.records(), &inputs.search, &inputs.filters);
        let constrained = !inputs.search.is_empty() || !inputs.filters.is_empty();
        updater.set(Self {
            records,
            revision: self.revision.wrapping_add(1),
            constrained,
            inputs: Some(inputs),
        });
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any>) {
        assign_impl(self, new_self);
    }
}
