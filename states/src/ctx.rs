use std::any::{Any, TypeId};
use std::cell::{Cell, Ref, RefCell, RefMut};
use std::collections::HashMap;

use crate::dep::UpdateMessage;
use crate::{Command, Compute, Dep, State, Updater};

pub(crate) type StateCell = RefCell<Box<dyn Any + Send>>;

pub(crate) struct ComputeSlot {
    pub(crate) cell: RefCell<Box<dyn Compute>>,
    pub(crate) dirty: Cell<bool>,
    state_deps: &'static [TypeId],
    compute_deps: &'static [TypeId],
}

/// Marks every compute that depends on `changed` dirty.
pub(crate) fn mark_dependents(computes: &[ComputeSlot], changed: TypeId) {
    for slot in computes {
        if slot.state_deps.contains(&changed) || slot.compute_deps.contains(&changed) {
            slot.dirty.set(true);
        }
    }
}

/// Registry and scheduler for [`State`]s, [`Compute`]s and [`Command`]s.
///
/// The expected frame protocol:
///
/// 1. [`StateCtx::sync_computes`] first: applies values published through
///    [`Updater`]s (including async results that arrived between frames) and
///    propagates dirtiness to dependent computes.
/// 2. Render. Widgets read states/computes, mutate input states, and
///    [`StateCtx::dispatch`] or [`StateCtx::enqueue_command`] commands.
/// 3. [`StateCtx::run_computed`] last: drains queued commands, then re-runs
///    every dirty compute.
///
/// All access goes through per-type [`RefCell`] slots, so shared references
/// to the context are enough for reads, input mutation and dispatch; only
/// the two frame-protocol methods need `&mut`.
pub struct StateCtx {
    states: HashMap<TypeId, StateCell>,
    computes: Vec<ComputeSlot>,
    compute_index: HashMap<TypeId, usize>,
    commands: HashMap<TypeId, Box<dyn Command>>,
    queued_commands: RefCell<Vec<TypeId>>,
    tx: flume::Sender<UpdateMessage>,
    rx: flume::Receiver<UpdateMessage>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (tx, rx) = flume::unbounded();
        Self {
            states: HashMap::new(),
            computes: Vec::new(),
            compute_index: HashMap::new(),
            commands: HashMap::new(),
            queued_commands: RefCell::new(Vec::new()),
            tx,
            rx,
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        self.states
            .insert(TypeId::of::<T>(), RefCell::new(Box::new(state)));
    }

    /// Registers a compute. It starts dirty, so it runs once during the
    /// first [`StateCtx::run_computed`] pass.
    pub fn record_compute<C: Compute>(&mut self, compute: C) {
        let (state_deps, compute_deps) = compute.deps();
        let id = TypeId::of::<C>();
        self.compute_index.insert(id, self.computes.len());
        self.computes.push(ComputeSlot {
            cell: RefCell::new(Box::new(compute)),
            dirty: Cell::new(true),
            state_deps,
            compute_deps,
        });
    }

    pub fn record_command<C: Command>(&mut self, command: C) {
        self.commands.insert(TypeId::of::<C>(), Box::new(command));
    }

    /// Shared borrow of a registered state.
    ///
    /// # Panics
    /// Panics if the state type was never registered.
    pub fn state<T: State>(&self) -> Ref<'_, T> {
        self.dep().get_state_ref::<T>()
    }

    /// Exclusive borrow of a registered state; computes depending on it are
    /// marked dirty. Prefer [`StateCtx::update`] for event-driven edits so a
    /// per-frame read does not count as a change.
    ///
    /// # Panics
    /// Panics if the state type was never registered.
    pub fn state_mut<T: State>(&self) -> RefMut<'_, T> {
        self.dep().state_mut::<T>()
    }

    /// Runs `f` on the state and marks dependent computes dirty.
    ///
    /// # Panics
    /// Panics if the state type was never registered.
    pub fn update<T: State>(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.dep().state_mut::<T>());
    }

    /// Shared borrow of a compute cache, or `None` if it is not registered.
    pub fn cached<C: Compute>(&self) -> Option<Ref<'_, C>> {
        self.dep().cached::<C>()
    }

    /// Runs a registered command immediately. Unregistered commands are a
    /// wiring error and are logged and skipped.
    pub fn dispatch<C: Command>(&self) {
        let Some(command) = self.commands.get(&TypeId::of::<C>()) else {
            log::error!("command {} not registered", std::any::type_name::<C>());
            return;
        };
        command.run(self.dep(), self.updater());
    }

    /// Queues a command to run at the start of the next
    /// [`StateCtx::run_computed`] pass. Use this from inside table/list
    /// iteration where an immediate dispatch would touch state the caller is
    /// still borrowing.
    pub fn enqueue_command<C: Command>(&self) {
        self.queued_commands.borrow_mut().push(TypeId::of::<C>());
    }

    /// Applies values published through [`Updater`]s and marks the computes
    /// depending on the changed slots dirty.
    pub fn sync_computes(&mut self) {
        while let Ok(message) = self.rx.try_recv() {
            if let Some(&idx) = self.compute_index.get(&message.target) {
                self.computes[idx].cell.borrow_mut().assign_box(message.value);
                mark_dependents(&self.computes, message.target);
            } else if let Some(cell) = self.states.get(&message.target) {
                *cell.borrow_mut() = message.value;
                mark_dependents(&self.computes, message.target);
            } else {
                log::warn!("dropping update: target type not registered");
            }
        }
    }

    /// Drains queued commands, then runs every dirty compute once, in
    /// registration order. Values a compute publishes are applied by the
    /// next [`StateCtx::sync_computes`], not within this pass.
    pub fn run_computed(&mut self) {
        let queued: Vec<TypeId> = self.queued_commands.borrow_mut().drain(..).collect();
        for id in queued {
            let Some(command) = self.commands.get(&id) else {
                log::error!("queued command not registered");
                continue;
            };
            command.run(self.dep(), self.updater());
        }

        for slot in &self.computes {
            if !slot.dirty.get() {
                continue;
            }
            slot.dirty.set(false);
            slot.cell.borrow().compute(self.dep(), self.updater());
        }
    }

    fn dep(&self) -> Dep<'_> {
        Dep::new(&self.states, &self.computes, &self.compute_index)
    }

    /// Clone-able publish handle, the same one commands receive. Detached
    /// work (IO callbacks, tests simulating them) uses it to deliver results
    /// into the next [`StateCtx::sync_computes`] pass.
    pub fn updater(&self) -> Updater {
        Updater::new(self.tx.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::any::{Any, TypeId};

    use crate::{Command, Compute, ComputeDeps, Dep, State, StateCtx, Updater, assign_impl};

    #[derive(Debug, Default)]
    struct Counter {
        value: i32,
    }

    impl State for Counter {}

    #[derive(Debug, Default)]
    struct Doubled {
        value: i32,
        runs: u32,
    }

    impl Compute for Doubled {
        fn deps(&self) -> ComputeDeps {
            const STATE_IDS: [TypeId; 1] = [TypeId::of::<Counter>()];
            (&STATE_IDS, &[])
        }

        fn compute(&self, deps: Dep<'_>, updater: Updater) {
            let counter = deps.get_state_ref::<Counter>();
            updater.set(Doubled {
                value: counter.value * 2,
                runs: self.runs + 1,
            });
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn assign_box(&mut self, new_self: Box<dyn Any>) {
            assign_impl(self, new_self);
        }
    }

    #[derive(Debug, Default)]
    struct IncrementCommand;

    impl Command for IncrementCommand {
        fn run(&self, deps: Dep<'_>, _updater: Updater) {
            deps.state_mut::<Counter>().value += 1;
        }
    }

    fn setup() -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter::default());
        ctx.record_compute(Doubled::default());
        ctx.record_command(IncrementCommand);
        ctx
    }

    fn settle(ctx: &mut StateCtx) {
        ctx.run_computed();
        ctx.sync_computes();
    }

    #[test]
    fn compute_runs_once_on_startup() {
        let mut ctx = setup();
        settle(&mut ctx);

        let doubled = ctx.cached::<Doubled>().expect("compute registered");
        assert_eq!(doubled.runs, 1);
        assert_eq!(doubled.value, 0);
    }

    #[test]
    fn clean_compute_is_skipped() {
        let mut ctx = setup();
        settle(&mut ctx);
        settle(&mut ctx);

        // The second pass had no dirty inputs: the first settle left the
        // compute clean because assigning Doubled marks only *dependents*.
        let doubled = ctx.cached::<Doubled>().expect("compute registered");
        assert_eq!(doubled.runs, 1);
    }

    #[test]
    fn state_update_marks_compute_dirty() {
        let mut ctx = setup();
        settle(&mut ctx);

        ctx.update::<Counter>(|counter| counter.value = 21);
        settle(&mut ctx);

        let doubled = ctx.cached::<Doubled>().expect("compute registered");
        assert_eq!(doubled.value, 42);
        assert_eq!(doubled.runs, 2);
    }

    #[test]
    fn dispatch_runs_synchronously() {
        let ctx = setup();
        ctx.dispatch::<IncrementCommand>();
        assert_eq!(ctx.state::<Counter>().value, 1);
    }

    #[test]
    fn enqueued_command_waits_for_run_computed() {
        let mut ctx = setup();
        ctx.enqueue_command::<IncrementCommand>();
        assert_eq!(ctx.state::<Counter>().value, 0);

        ctx.run_computed();
        assert_eq!(ctx.state::<Counter>().value, 1);
    }

    #[test]
    fn updater_routes_to_state_slots() {
        let mut ctx = setup();
        settle(&mut ctx);

        #[derive(Debug, Default)]
        struct Replace;
        impl Command for Replace {
            fn run(&self, _deps: Dep<'_>, updater: Updater) {
                updater.set(Counter { value: 7 });
            }
        }
        ctx.record_command(Replace);

        ctx.dispatch::<Replace>();
        ctx.sync_computes();
        assert_eq!(ctx.state::<Counter>().value, 7);
    }
}
