//! Base trait for intents (user/system actions) in MVI architecture.

use std::fmt::Debug;

/// Marker trait for intent objects.
///
/// Intents name the mutations a store accepts: button presses, key
/// bindings, anything that asks for a state transition. They are
/// processed by reducers to produce new states.
pub trait Intent: Debug + Send + 'static {}
