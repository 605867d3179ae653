use std::any::Any;

use crate::{Dep, Updater};

/// A manually triggered operation, and the only place side effects
/// (network, storage) are allowed to run.
///
/// Commands are registered once via [`crate::StateCtx::record_command`] and
/// then either run immediately with [`crate::StateCtx::dispatch`] or queued
/// with [`crate::StateCtx::enqueue_command`]. Synchronous work mutates
/// states through [`Dep`]; asynchronous results are published through the
/// [`Updater`] moved into the IO callback.
pub trait Command: Any {
    fn run(&self, deps: Dep<'_>, updater: Updater);
}
