//! Headless presentation: drive a controller from a list of intents and
//! collect the snapshots it publishes.

use std::sync::mpsc;

use crate::ui::counter::{CounterController, CounterIntent, CounterSnapshot};

/// Apply `intents` to a fresh controller, returning one snapshot per intent.
pub fn replay<I>(intents: I) -> Vec<CounterSnapshot>
where
    I: IntoIterator<Item = CounterIntent>,
{
    let (tx, rx) = mpsc::channel();
    let mut controller = CounterController::new();
    controller.subscribe(move |snapshot| {
        let _ = tx.send(*snapshot);
    });
    for intent in intents {
        controller.dispatch(intent);
    }
    drop(controller);
    rx.into_iter().collect()
}

/// `value=<v> ratio=<r> band=<band>`
pub fn format_snapshot(snapshot: &CounterSnapshot) -> String {
    format!(
        "value={} ratio={:.2} band={}",
        snapshot.value,
        snapshot.progress_ratio,
        snapshot.color_band.as_str()
    )
}
