//! Intents for the counter.

use crate::ui::mvi::Intent;

/// Mutations that can be dispatched to the counter reducer.
///
/// Every intent is valid in every state; out-of-range results are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    /// Add one.
    Increment,

    /// Subtract one.
    Decrement,

    /// Add ten, stopping at the upper bound.
    IncrementBy10,

    /// Subtract ten, stopping at the lower bound.
    DecrementBy10,

    /// Back to zero.
    Reset,
}

impl Intent for CounterIntent {}

impl CounterIntent {
    /// Signed step applied by this intent, or `None` for `Reset`.
    pub fn delta(self) -> Option<i32> {
        match self {
            CounterIntent::Increment => Some(1),
            CounterIntent::Decrement => Some(-1),
            CounterIntent::IncrementBy10 => Some(10),
            CounterIntent::DecrementBy10 => Some(-10),
            CounterIntent::Reset => None,
        }
    }
}
