use std::any::{Any, TypeId};
use std::cell::{Ref, RefMut};
use std::collections::HashMap;

use crate::ctx::{ComputeSlot, StateCell, mark_dependents};
use crate::{Compute, State};

/// Read/write access to registered states and read access to compute caches,
/// handed to [`Compute::compute`] and [`crate::Command::run`].
///
/// Borrows are checked per type at runtime: holding two simultaneous
/// references to the *same* state type panics, so keep the guards
/// short-lived. A compute must not read its own cache through `Dep`.
pub struct Dep<'a> {
    states: &'a HashMap<TypeId, StateCell>,
    computes: &'a [ComputeSlot],
    compute_index: &'a HashMap<TypeId, usize>,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(
        states: &'a HashMap<TypeId, StateCell>,
        computes: &'a [ComputeSlot],
        compute_index: &'a HashMap<TypeId, usize>,
    ) -> Self {
        Self {
            states,
            computes,
            compute_index,
        }
    }

    /// Shared borrow of a registered state.
    ///
    /// # Panics
    /// Panics if the state type was never registered.
    pub fn get_state_ref<T: State>(&self) -> Ref<'a, T> {
        let cell = self.states.get(&TypeId::of::<T>()).unwrap_or_else(|| {
            panic!("state {} not registered", std::any::type_name::<T>())
        });
        Ref::map(cell.borrow(), |boxed| {
            boxed.downcast_ref::<T>().unwrap_or_else(|| {
                panic!("state slot holds wrong type for {}", std::any::type_name::<T>())
            })
        })
    }

    /// Exclusive borrow of a registered state. Computes depending on `T` are
    /// marked dirty, since the caller is assumed to mutate.
    ///
    /// # Panics
    /// Panics if the state type was never registered.
    pub fn state_mut<T: State>(&self) -> RefMut<'a, T> {
        let cell = self.states.get(&TypeId::of::<T>()).unwrap_or_else(|| {
            panic!("state {} not registered", std::any::type_name::<T>())
        });
        mark_dependents(self.computes, TypeId::of::<T>());
        RefMut::map(cell.borrow_mut(), |boxed| {
            boxed.downcast_mut::<T>().unwrap_or_else(|| {
                panic!("state slot holds wrong type for {}", std::any::type_name::<T>())
            })
        })
    }

    /// Shared borrow of a compute cache, or `None` if it is not registered.
    pub fn cached<C: Compute>(&self) -> Option<Ref<'a, C>> {
        let idx = *self.compute_index.get(&TypeId::of::<C>())?;
        Some(Ref::map(self.computes[idx].cell.borrow(), |boxed| {
            boxed.as_any().downcast_ref::<C>().unwrap_or_else(|| {
                panic!("compute slot holds wrong type for {}", std::any::type_name::<C>())
            })
        }))
    }
}

/// Cloneable handle for publishing values back into the [`crate::StateCtx`].
///
/// Commands move clones of this into async callbacks; the published value is
/// routed to the compute or state slot matching its type during the next
/// [`crate::StateCtx::sync_computes`].
#[derive(Debug, Clone)]
pub struct Updater {
    tx: flume::Sender<UpdateMessage>,
}

impl Updater {
    pub(crate) fn new(tx: flume::Sender<UpdateMessage>) -> Self {
        Self { tx }
    }

    pub fn set<T: Any + Send>(&self, value: T) {
        let message = UpdateMessage {
            target: TypeId::of::<T>(),
            value: Box::new(value),
        };
        if self.tx.send(message).is_err() {
            log::error!(
                "dropping update for {}: context is gone",
                std::any::type_name::<T>()
            );
        }
    }
}

pub(crate) struct UpdateMessage {
    pub(crate) target: TypeId,
    pub(crate) value: Box<dyn Any + Send>,
}
