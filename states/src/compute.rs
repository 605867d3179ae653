use std::any::{Any, TypeId};

use crate::{Dep, Updater};

/// Dependency declaration of a compute: state `TypeId`s first, compute
/// `TypeId`s second. A compute is re-run when any listed dependency changes.
pub type ComputeDeps = (&'static [TypeId], &'static [TypeId]);

/// A derived value living in a [`crate::StateCtx`].
///
/// Computes come in two shapes:
///
/// - **Derived**: `deps()` lists the states/computes it reads, and
///   `compute()` publishes a fresh value via [`Updater::set`]. The runtime
///   re-runs it during [`crate::StateCtx::run_computed`] whenever a
///   dependency was touched since the last run.
/// - **Command-updated cache**: `deps()` is empty and `compute()` is a
///   no-op; the value is only ever replaced by a [`crate::Command`] through
///   its [`Updater`]. This is the shape used for async results, since side
///   effects must not run inside `compute()` (computes execute implicitly).
///
/// Published values are applied during [`crate::StateCtx::sync_computes`]
/// via [`Compute::assign_box`]; implementations forward to [`assign_impl`].
pub trait Compute: Any + Send {
    fn deps(&self) -> ComputeDeps;

    fn compute(&self, deps: Dep<'_>, updater: Updater);

    fn as_any(&self) -> &dyn Any;

    fn assign_box(&mut self, new_self: Box<dyn Any>);
}

/// Standard [`Compute::assign_box`] body: downcast and replace, logging a
/// runtime wiring error instead of panicking if the payload type is wrong.
pub fn assign_impl<T: Any>(this: &mut T, new_self: Box<dyn Any>) {
    match new_self.downcast::<T>() {
        Ok(new_self) => *this = *new_self,
        Err(_) => log::error!(
            "assign_box: payload is not a {}",
            std::any::type_name::<T>()
        ),
    }
}
