//! Resolution of the table's backing dataset.
//!
//! [`LoadUsersCommand`] resolves the dataset cache-first: a parseable cache
//! slot is served as-is, a corrupt slot is discarded before falling back to
//! the network, and only a cache miss reaches the users endpoint. The outcome
//! lands in the [`TableSource`] compute via [`Updater`], so the command owns
//! every side effect and the compute itself stays pure.

use crate::{AppConfig, CacheRead, UserCache, UserRecord};
use chrono::{DateTime, Utc};
use lendboard_states::{Command, Compute, ComputeDeps, Dep, Time, Updater, assign_impl};
use log::{error, info};
use std::any::Any;

/// How the current dataset was obtained.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SourceResolution {
    /// No resolution has been requested yet.
    #[default]
    Idle,
    /// Cache missed; a network request is in flight.
    Loading,
    /// Served from the cache slot. An empty array is still a hit.
    Cached(Vec<UserRecord>),
    /// Served fresh from the endpoint; not yet persisted to the cache.
    Fetched(Vec<UserRecord>),
    /// Both cache and network came up empty-handed.
    Empty,
}

/// Compute cache holding the resolved dataset.
///
/// Pure cache: [`LoadUsersCommand`] and the status mutation command publish
/// into it, downstream row filtering keys off `resolved_at` to notice that a
/// new resolution landed.
#[derive(Debug, Default)]
pub struct TableSource {
    pub resolution: SourceResolution,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl TableSource {
    pub fn cached(records: Vec<UserRecord>, now: DateTime<Utc>) -> Self {
        Self::with(SourceResolution::Cached(records), now)
    }

    pub fn fetched(records: Vec<UserRecord>, now: DateTime<Utc>) -> Self {
        Self::with(SourceResolution::Fetched(records), now)
    }

    pub fn loading(now: DateTime<Utc>) -> Self {
        Self::with(SourceResolution::Loading, now)
    }

    pub fn empty(now: DateTime<Utc>) -> Self {
        Self::with(SourceResolution::Empty, now)
    }

    fn with(resolution: SourceResolution, now: DateTime<Utc>) -> Self {
        Self {
            resolution,
            resolved_at: Some(now),
        }
    }

    /// The resolved records; empty for every non-data branch.
    pub fn records(&self) -> &[UserRecord] {
        match &self.resolution {
            SourceResolution::Cached(records) | SourceResolution::Fetched(records) => records,
            SourceResolution::Idle | SourceResolution::Loading | SourceResolution::Empty => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        self.resolution == SourceResolution::Loading
    }

    pub fn is_idle(&self) -> bool {
        self.resolution == SourceResolution::Idle
    }
}

impl Compute for TableSource {
    fn deps(&self) -> ComputeDeps {
        (&[], &[])
    }

    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {
        // Intentionally no-op.
        //
        // Side effects (network, cache) must not run inside a Compute due to
        // implicit execution. Commands update this cache via `Updater`.
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any>) {
        assign_impl(self, new_self);
    }
}

/// Resolves the users dataset, cache-first.
///
/// Dispatched when the dashboard table first renders, when filters are
/// committed and when a refresh is requested.
#[derive(Default, Debug)]
pub struct LoadUsersCommand;

impl Command for LoadUsersCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let now = *deps.get_state_ref::<Time>().as_ref();

        {
            let mut cache = deps.state_mut::<UserCache>();
            match cache.read_users() {
                CacheRead::Records(records) => {
                    info!("LoadUsersCommand: serving {} users from cache", records.len());
                    updater.set(TableSource::cached(records, now));
                    return;
                }
                CacheRead::Corrupt => {
                    error!("LoadUsersCommand: discarding corrupt users cache");
                    cache.clear_users();
                }
                CacheRead::Missing => {}
            }
        }

        updater.set(TableSource::loading(now));

        let url = deps.get_state_ref::<AppConfig>().users_url();
        info!("LoadUsersCommand: fetching users from {url}");
        let request = ehttp::Request::get(url.as_str());

        ehttp::fetch(request, move |result| match result {
            Ok(response) if response.status == 200 => {
                match serde_json::from_slice::<Vec<UserRecord>>(&response.bytes) {
                    Ok(records) => {
                        info!("LoadUsersCommand: fetched {} users", records.len());
                        updater.set(TableSource::fetched(records, now));
                    }
                    Err(err) => {
                        error!("LoadUsersCommand: users payload did not parse: {err}");
                        updater.set(TableSource::empty(now));
                    }
                }
            }
            Ok(response) => {
                error!(
                    "LoadUsersCommand: users endpoint returned status {}",
                    response.status
                );
                updater.set(TableSource::empty(now));
            }
            Err(err) => {
                error!("LoadUsersCommand: request failed: {err}");
                updater.set(TableSource::empty(now));
            }
        });
    }
}

/// Writes a freshly fetched dataset back into the cache slot.
///
/// Enqueued by the table once per `Fetched` resolution, so the cache becomes
/// the system of record for later visits and mutations.
#[derive(Default, Debug)]
pub struct PersistFetchedUsersCommand;

impl Command for PersistFetchedUsersCommand {
    fn run(&self, deps: Dep<'_>, _updater: Updater) {
        let Some(source) = deps.cached::<TableSource>() else {
            return;
        };
        let SourceResolution::Fetched(records) = &source.resolution else {
            return;
        };
        let mut cache = deps.state_mut::<UserCache>();
        if let Err(err) = cache.write_users(records) {
            error!("PersistFetchedUsersCommand: cache write failed: {err}");
        } else {
            info!(
                "PersistFetchedUsersCommand: persisted {} users to cache",
                records.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lendboard_states::StateCtx;

    fn setup_ctx(endpoint: &str) -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.add_state(Time::default());
        ctx.add_state(AppConfig::new(endpoint.to_owned()));
        ctx.add_state(UserCache::in_memory());
        ctx.record_compute(TableSource::default());
        ctx.record_command(LoadUsersCommand);
        ctx.record_command(PersistFetchedUsersCommand);
        ctx
    }

    #[test]
    fn records_are_empty_for_non_data_branches() {
        assert!(TableSource::default().records().is_empty());
        let now = Utc::now();
        assert!(TableSource::loading(now).records().is_empty());
        assert!(TableSource::empty(now).records().is_empty());
        let fetched = TableSource::fetched(sample_records(), now);
        assert_eq!(fetched.records().len(), 2);
    }

    #[test]
    fn cache_hit_resolves_synchronously() {
        let mut ctx = setup_ctx("http://127.0.0.1:9/");
        ctx.state_mut::<UserCache>()
            .write_users(&sample_records())
            .unwrap();

        ctx.dispatch::<LoadUsersCommand>();
        ctx.sync_computes();

        let source = ctx.cached::<TableSource>().unwrap();
        match &source.resolution {
            SourceResolution::Cached(records) => assert_eq!(records.len(), 2),
            other => panic!("expected cache hit, got {other:?}"),
        }
        assert!(source.resolved_at.is_some());
    }

    #[test]
    fn empty_cached_array_is_served_without_fetching() {
        let mut ctx = setup_ctx("http://127.0.0.1:9/");
        ctx.state_mut::<UserCache>().write_raw("[]").unwrap();

        ctx.dispatch::<LoadUsersCommand>();
        ctx.sync_computes();

        let source = ctx.cached::<TableSource>().unwrap();
        assert_eq!(source.resolution, SourceResolution::Cached(Vec::new()));
    }

    #[test]
    fn corrupt_cache_is_discarded_before_fetching() {
        let mut ctx = setup_ctx("http://127.0.0.1:9/");
        ctx.state_mut::<UserCache>().write_raw("{broken").unwrap();

        ctx.dispatch::<LoadUsersCommand>();
        ctx.sync_computes();

        assert_eq!(ctx.state::<UserCache>().read_users(), CacheRead::Missing);
        // The unroutable endpoint may already have failed the request, so the
        // resolution is either still loading or settled on empty.
        let source = ctx.cached::<TableSource>().unwrap();
        assert!(matches!(
            source.resolution,
            SourceResolution::Loading | SourceResolution::Empty
        ));
    }

    #[test]
    fn persist_command_writes_fetched_records_back() {
        let mut ctx = setup_ctx("http://127.0.0.1:9/");

        // Deliver a fetch outcome the way the network callback would.
        ctx.updater()
            .set(TableSource::fetched(sample_records(), Utc::now()));
        ctx.sync_computes();

        ctx.dispatch::<PersistFetchedUsersCommand>();
        match ctx.state::<UserCache>().read_users() {
            CacheRead::Records(records) => assert_eq!(records.len(), 2),
            other => panic!("expected persisted records, got {other:?}"),
        }
    }

    #[test]
    fn persist_command_ignores_cached_resolutions() {
        let mut ctx = setup_ctx("http://127.0.0.1:9/");
        ctx.updater()
            .set(TableSource::cached(sample_records(), Utc::now()));
        ctx.sync_computes();

        ctx.dispatch::<PersistFetchedUsersCommand>();
        assert_eq!(ctx.state::<UserCache>().read_users(), CacheRead::Missing);
    }

    fn sample_records() -> Vec<UserRecord> {
        serde_json::from_str(
            r#"[
                { "_id": "u-1", "firstName": "Grace", "lastName": "Effiom", "status": "Active" },
                { "_id": "u-2", "firstName": "Tosin", "lastName": "Dokunmu", "status": "Pending" }
            ]"#,
        )
        .unwrap()
    }
}
