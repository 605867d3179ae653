//! Typed state runtime for immediate-mode UIs.
//!
//! States hold data, computes derive from it, commands perform side
//! effects, and a [`StateCtx`] schedules the three around the frame loop.
//! See [`StateCtx`] for the frame protocol.

mod basic_state;
mod command;
mod compute;
mod ctx;
mod dep;
mod state;

pub use basic_state::Time;
pub use command::Command;
pub use compute::{Compute, ComputeDeps, assign_impl};
pub use ctx::StateCtx;
pub use dep::{Dep, Updater};
pub use state::State;
