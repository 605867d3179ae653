//! Status actions on a user record.
//!
//! The UI follows the workflow-command pattern:
//! - UI sets [`ToggleStatusInput`] via `ctx.update::<ToggleStatusInput>(...)`
//! - UI dispatches [`ToggleUserStatusCommand`]
//! - The command rewrites the cache slot and republishes the table source
//!
//! Status transitions themselves are pure, see [`next_status`].

use crate::{CacheRead, TableSource, UserCache, UserStatus};
use lendboard_states::{Command, Dep, State, Time, Updater};
use log::{error, info, warn};
use ustr::Ustr;

/// The two toggle families the action menu offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionFamily {
    /// Blacklist / unblacklist.
    Blacklist,
    /// Activate / deactivate.
    Activate,
}

/// Next status after applying an action family to `current`.
///
/// Blacklisting is its own inverse only from `Blacklisted`; every other
/// status lands on `Blacklisted`. The activate family reads the account as a
/// binary active/inactive switch, so `Pending` and `Blacklisted` also land on
/// `Active`.
pub fn next_status(current: UserStatus, family: ActionFamily) -> UserStatus {
    match family {
        ActionFamily::Blacklist => match current {
            UserStatus::Blacklisted => UserStatus::Active,
            UserStatus::Active | UserStatus::Inactive | UserStatus::Pending => {
                UserStatus::Blacklisted
            }
        },
        ActionFamily::Activate => match current {
            UserStatus::Active => UserStatus::Inactive,
            UserStatus::Inactive | UserStatus::Pending | UserStatus::Blacklisted => {
                UserStatus::Active
            }
        },
    }
}

/// Menu label for the blacklist entry given the record's current status.
pub fn blacklist_label(status: UserStatus) -> &'static str {
    if status == UserStatus::Blacklisted {
        "Unblacklist User"
    } else {
        "Blacklist User"
    }
}

/// Menu label for the activate entry given the record's current status.
pub fn activate_label(status: UserStatus) -> &'static str {
    if status == UserStatus::Inactive {
        "Activate User"
    } else {
        "Deactivate User"
    }
}

/// Input state for [`ToggleUserStatusCommand`].
///
/// The UI sets both fields before dispatching.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToggleStatusInput {
    pub id: Option<Ustr>,
    pub family: Option<ActionFamily>,
}

impl State for ToggleStatusInput {}

/// Applies a status toggle to one record in the cache slot, then republishes
/// the table source from the freshly written slot.
///
/// The cache is the system of record here: an unparseable slot means the
/// mutation is dropped (logged, no partial write), and a missing slot means
/// there is nothing to mutate.
#[derive(Debug, Default)]
pub struct ToggleUserStatusCommand;

impl Command for ToggleUserStatusCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let input = *deps.get_state_ref::<ToggleStatusInput>();
        let (Some(id), Some(family)) = (input.id, input.family) else {
            return;
        };

        let now = *deps.get_state_ref::<Time>().as_ref();
        let mut cache = deps.state_mut::<UserCache>();
        let mut records = match cache.read_users() {
            CacheRead::Records(records) => records,
            CacheRead::Corrupt => {
                error!("ToggleUserStatusCommand: users cache is unparseable, dropping status change for {id}");
                return;
            }
            CacheRead::Missing => {
                warn!("ToggleUserStatusCommand: no cached users, dropping status change for {id}");
                return;
            }
        };

        match records.iter_mut().find(|record| record.id == id.as_str()) {
            Some(record) => {
                let next = next_status(record.status, family);
                info!("ToggleUserStatusCommand: {id} {} -> {next}", record.status);
                record.status = next;
            }
            None => warn!("ToggleUserStatusCommand: no record with id {id}"),
        }

        if let Err(err) = cache.write_users(&records) {
            error!("ToggleUserStatusCommand: cache write failed: {err}");
            return;
        }

        // Refresh the table from the slot just written.
        match cache.read_users() {
            CacheRead::Records(records) => updater.set(TableSource::cached(records, now)),
            other => error!("ToggleUserStatusCommand: reread after write failed: {other:?}"),
        }
    }
}
