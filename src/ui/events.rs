use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, MouseEvent};

use crate::shutdown::ShutdownHandle;
use crate::ui::counter::CounterSnapshot;

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
    Resize(u16, u16),
    /// Counter published a new state.
    Snapshot(CounterSnapshot),
    /// OS signal received (SIGTERM, SIGINT, SIGHUP) or the input reader stopped.
    Shutdown,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                if shutdown.is_shutting_down() {
                    break;
                }

                // Use short poll timeout to check shutdown flag frequently
                let timeout =
                    tick_rate.saturating_sub(last_tick.elapsed()).min(Duration::from_millis(50));

                let forwarded = match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)),
                        Ok(Event::Mouse(mouse)) => event_tx.send(AppEvent::Mouse(mouse)),
                        Ok(Event::Resize(cols, rows)) => {
                            event_tx.send(AppEvent::Resize(cols, rows))
                        }
                        Ok(_) => Ok(()),
                        Err(err) => {
                            tracing::warn!(error = %err, "Terminal read failed");
                            break;
                        }
                    },
                    Ok(false) => Ok(()),
                    Err(err) => {
                        tracing::warn!(error = %err, "Terminal poll failed");
                        break;
                    }
                };

                // Receiver gone: the UI loop has exited.
                if forwarded.is_err() {
                    break;
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
            // Whatever stopped the reader, the UI loop must not wait on it.
            let _ = event_tx.send(AppEvent::Shutdown);
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shutdown_flag_stops_reader_and_emits_shutdown() {
        let shutdown = ShutdownHandle::new();
        shutdown.signal();
        let events = EventHandler::new(Duration::from_millis(10), shutdown);
        assert!(matches!(
            events.next(Duration::from_secs(2)),
            Ok(AppEvent::Shutdown)
        ));
    }

    #[test]
    fn sender_feeds_the_same_queue() {
        let shutdown = ShutdownHandle::new();
        shutdown.signal();
        let events = EventHandler::new(Duration::from_millis(10), shutdown);
        // Drain the reader's shutdown notice first.
        assert!(matches!(
            events.next(Duration::from_secs(2)),
            Ok(AppEvent::Shutdown)
        ));
        events.sender().send(AppEvent::Resize(80, 24)).unwrap();
        assert!(matches!(
            events.next(Duration::from_secs(1)),
            Ok(AppEvent::Resize(80, 24))
        ));
    }
}
