//! Counter feature module.
//!
//! Holds a single integer clamped to `[0, 100]` and derives the progress
//! ratio and color band the view renders.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Clamped value, color band, snapshot
//! - `intent.rs` - User actions (Increment, Decrement, ±10, Reset)
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `controller.rs` - Session owner; dispatches intents and notifies subscribers

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::{
    CounterController, SharedCounter, SharedSubscriber, Subscriber, SubscriptionId,
};
pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::{ColorBand, CounterSnapshot, CounterState, MAX_VALUE, MIN_VALUE};
