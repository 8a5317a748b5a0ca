//! Model-View-Intent (MVI) architecture primitives.
//!
//! Base traits for the unidirectional data flow between the counter
//! controller and the terminal view.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Snapshot ──→ View
//!    ↑                                          │
//!    └──────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions (key presses, button clicks)
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
