use std::any::Any;

/// Marker for a long-lived typed value registered in a [`crate::StateCtx`].
///
/// States are plain data: configuration, UI inputs, routing, the virtual
/// clock. They are registered once during app setup and addressed by their
/// `TypeId` afterwards. Anything that derives values from states belongs in
/// a [`crate::Compute`]; anything that performs side effects belongs in a
/// [`crate::Command`].
pub trait State: Any + Send {}
