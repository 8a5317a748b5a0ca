//! Base trait for intents (user actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent user actions: key presses, mouse clicks on buttons,
/// or replayed actions from the command line.
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
