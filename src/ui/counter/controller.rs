//! Counter controller: owns the state and publishes snapshots.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, ReentrantMutex};

use crate::ui::counter::intent::CounterIntent;
use crate::ui::counter::reducer::CounterReducer;
use crate::ui::counter::state::{ColorBand, CounterSnapshot, CounterState};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Callback invoked with the new snapshot after every dispatched intent.
pub type Subscriber = Box<dyn FnMut(&CounterSnapshot) + Send + 'static>;

/// Handle returned by [`CounterController::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owns a single [`CounterState`] for the lifetime of a presentation session.
///
/// All mutation goes through [`dispatch`](Self::dispatch); subscribers are
/// notified in subscription order, once per dispatched intent, even when the
/// value did not change (e.g. incrementing at the upper bound).
pub struct CounterController {
    state: CounterState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl Default for CounterController {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterController {
    pub fn new() -> Self {
        Self {
            state: CounterState::default(),
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Apply an intent and publish the resulting snapshot.
    pub fn dispatch(&mut self, intent: CounterIntent) -> CounterSnapshot {
        let snapshot = self.apply(intent);
        self.notify(&snapshot);
        snapshot
    }

    fn apply(&mut self, intent: CounterIntent) -> CounterSnapshot {
        let before = self.state.value();
        dispatch_mvi!(self, state, CounterReducer, intent);
        let snapshot = self.snapshot();
        log_transition(intent, before, &snapshot);
        snapshot
    }

    fn notify(&mut self, snapshot: &CounterSnapshot) {
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(snapshot);
        }
    }

    pub fn increment(&mut self) -> CounterSnapshot {
        self.dispatch(CounterIntent::Increment)
    }

    pub fn decrement(&mut self) -> CounterSnapshot {
        self.dispatch(CounterIntent::Decrement)
    }

    pub fn increment_by_10(&mut self) -> CounterSnapshot {
        self.dispatch(CounterIntent::IncrementBy10)
    }

    pub fn decrement_by_10(&mut self) -> CounterSnapshot {
        self.dispatch(CounterIntent::DecrementBy10)
    }

    pub fn reset(&mut self) -> CounterSnapshot {
        self.dispatch(CounterIntent::Reset)
    }

    pub fn current_value(&self) -> u8 {
        self.state.value()
    }

    pub fn progress_ratio(&self) -> f64 {
        self.state.progress_ratio()
    }

    pub fn color_band(&self) -> ColorBand {
        self.state.color_band()
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        self.state.into()
    }

    /// Register a callback for future snapshots.
    ///
    /// The callback is not invoked for the current state; call
    /// [`snapshot`](Self::snapshot) for the initial render.
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&CounterSnapshot) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

/// Callback registered on a [`SharedCounter`]. May be called from any thread
/// that dispatches, and may call back into the handle.
pub type SharedSubscriber = Arc<dyn Fn(&CounterSnapshot) + Send + Sync + 'static>;

#[derive(Default)]
struct Shared {
    state: Mutex<CounterState>,
    subscribers: Mutex<Vec<(SubscriptionId, SharedSubscriber)>>,
    next_id: AtomicU64,
    /// Held for a whole dispatch so snapshots reach subscribers in the order
    /// the transitions happened. Reentrant: a subscriber may dispatch again.
    delivery: ReentrantMutex<()>,
}

/// Cloneable handle to a counter for use across threads.
///
/// Transitions are serialized. Subscribers run with no data lock held, so a
/// subscriber may call [`snapshot`](Self::snapshot) or
/// [`dispatch`](Self::dispatch) on a clone of the same handle.
#[derive(Clone, Default)]
pub struct SharedCounter {
    inner: Arc<Shared>,
}

impl SharedCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&self, intent: CounterIntent) -> CounterSnapshot {
        let _delivery = self.inner.delivery.lock();
        let (before, snapshot) = {
            let mut state = self.inner.state.lock();
            let before = state.value();
            *state = CounterReducer::reduce(*state, intent);
            (before, CounterSnapshot::from(*state))
        };
        log_transition(intent, before, &snapshot);

        let subscribers: Vec<SharedSubscriber> = self
            .inner
            .subscribers
            .lock()
            .iter()
            .map(|(_, subscriber)| Arc::clone(subscriber))
            .collect();
        for subscriber in subscribers {
            subscriber(&snapshot);
        }
        snapshot
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot::from(*self.inner.state.lock())
    }

    pub fn subscribe<F>(&self, subscriber: F) -> SubscriptionId
    where
        F: Fn(&CounterSnapshot) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        let subscriber: SharedSubscriber = Arc::new(subscriber);
        self.inner.subscribers.lock().push((id, subscriber));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.inner.subscribers.lock();
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        subscribers.len() != before
    }
}

fn log_transition(intent: CounterIntent, from: u8, snapshot: &CounterSnapshot) {
    tracing::debug!(
        ?intent,
        from,
        to = snapshot.value,
        band = snapshot.color_band.as_str(),
        "counter transition"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn fresh_controller_starts_at_zero() {
        let controller = CounterController::new();
        assert_eq!(controller.current_value(), 0);
        assert_eq!(controller.progress_ratio(), 0.0);
        assert_eq!(controller.color_band(), ColorBand::Primary);
        assert_eq!(controller.subscriber_count(), 0);
    }

    #[test]
    fn dispatch_returns_published_snapshot() {
        let mut controller = CounterController::new();
        let (tx, rx) = mpsc::channel();
        controller.subscribe(move |snapshot| {
            let _ = tx.send(*snapshot);
        });

        let returned = controller.increment_by_10();
        assert_eq!(rx.try_recv().ok(), Some(returned));
        assert_eq!(returned, controller.snapshot());
    }

    #[test]
    fn subscription_ids_are_unique() {
        let mut controller = CounterController::new();
        let a = controller.subscribe(|_| {});
        let b = controller.subscribe(|_| {});
        assert_ne!(a, b);
        assert!(controller.unsubscribe(a));
        assert!(!controller.unsubscribe(a));
        assert_eq!(controller.subscriber_count(), 1);
    }

    #[test]
    fn shared_counter_serializes_across_threads() {
        let shared = SharedCounter::default();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                std::thread::spawn(move || {
                    for _ in 0..10 {
                        shared.dispatch(CounterIntent::Increment);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(shared.snapshot().value, 40);
    }
}
