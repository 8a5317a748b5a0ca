use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::config::UiConfig;
use crate::ui::animation::ProgressAnimation;
use crate::ui::controls::Control;
use crate::ui::counter::{CounterController, CounterIntent, CounterSnapshot};
use crate::ui::events::AppEvent;
use crate::ui::layout::ScreenLayout;
use crate::ui::theme::Theme;

/// Presentation session: owns the counter controller for its lifetime and
/// renders from the last snapshot the controller published.
pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    counter: CounterController,
    /// Last snapshot received from the controller.
    view: CounterSnapshot,
    focus: Control,
    animation: ProgressAnimation,
    theme: Theme,
}

impl App {
    /// Start a session. Snapshots are published to `events` so the view
    /// only ever changes by receiving [`AppEvent::Snapshot`].
    pub fn new(config: &UiConfig, theme: Theme, events: mpsc::Sender<AppEvent>) -> Self {
        let mut counter = CounterController::new();
        counter.subscribe(move |snapshot| {
            let _ = events.send(AppEvent::Snapshot(*snapshot));
        });
        let view = counter.snapshot();
        Self {
            should_quit: false,
            size: None,
            counter,
            view,
            focus: Control::Increment,
            animation: ProgressAnimation::new(
                Duration::from_millis(config.animation_ms),
                view.progress_ratio,
            ),
            theme,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn view(&self) -> &CounterSnapshot {
        &self.view
    }

    pub fn focus(&self) -> Control {
        self.focus
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Progress ratio currently drawn, trailing the snapshot while animating.
    pub fn displayed_ratio(&self) -> f64 {
        self.animation.displayed()
    }

    pub fn on_tick(&mut self, elapsed: Duration) {
        self.animation.tick(elapsed);
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn on_snapshot(&mut self, snapshot: CounterSnapshot) {
        self.view = snapshot;
        self.animation.set_target(snapshot.progress_ratio);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('+' | '=' | 'k') | KeyCode::Up => self.dispatch(CounterIntent::Increment),
            KeyCode::Char('-' | 'j') | KeyCode::Down => self.dispatch(CounterIntent::Decrement),
            KeyCode::Char(']') | KeyCode::PageUp => self.dispatch(CounterIntent::IncrementBy10),
            KeyCode::Char('[') | KeyCode::PageDown => self.dispatch(CounterIntent::DecrementBy10),
            KeyCode::Char('r' | 'R' | '0') => self.dispatch(CounterIntent::Reset),
            KeyCode::Tab | KeyCode::Right => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Left => self.focus = self.focus.previous(),
            KeyCode::Enter | KeyCode::Char(' ') => self.press(self.focus),
            _ => {}
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some((cols, rows)) = self.size else {
            return;
        };
        let layout = ScreenLayout::compute(Rect::new(0, 0, cols, rows));
        if let Some(control) = layout.hit_test(mouse.column, mouse.row) {
            self.focus = control;
            self.press(control);
        }
    }

    fn press(&mut self, control: Control) {
        tracing::trace!(?control, "button pressed");
        self.dispatch(control.intent());
    }

    fn dispatch(&mut self, intent: CounterIntent) {
        self.counter.dispatch(intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::counter::ColorBand;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn make_app() -> (App, mpsc::Receiver<AppEvent>) {
        let (tx, rx) = mpsc::channel();
        let config = UiConfig {
            animation_ms: 0,
            ..UiConfig::default()
        };
        (App::new(&config, Theme::default(), tx), rx)
    }

    fn press_key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    /// Deliver pending snapshots the way the runtime loop does.
    fn pump(app: &mut App, rx: &mpsc::Receiver<AppEvent>) -> usize {
        let mut delivered = 0;
        for event in rx.try_iter() {
            if let AppEvent::Snapshot(snapshot) = event {
                app.on_snapshot(snapshot);
                delivered += 1;
            }
        }
        delivered
    }

    #[test]
    fn view_changes_only_after_snapshot_is_delivered() {
        let (mut app, rx) = make_app();
        app.on_key(press_key(KeyCode::Char('+')));
        assert_eq!(app.view().value, 0);
        assert_eq!(pump(&mut app, &rx), 1);
        assert_eq!(app.view().value, 1);
    }

    #[test]
    fn key_bindings_map_to_intents() {
        let (mut app, rx) = make_app();
        app.on_key(press_key(KeyCode::Char(']')));
        app.on_key(press_key(KeyCode::PageUp));
        app.on_key(press_key(KeyCode::Up));
        app.on_key(press_key(KeyCode::Down));
        app.on_key(press_key(KeyCode::Char('[')));
        pump(&mut app, &rx);
        assert_eq!(app.view().value, 10);

        app.on_key(press_key(KeyCode::Char('r')));
        pump(&mut app, &rx);
        assert_eq!(app.view().value, 0);
    }

    #[test]
    fn release_events_are_ignored() {
        let (mut app, rx) = make_app();
        let mut key = press_key(KeyCode::Char('+'));
        key.kind = KeyEventKind::Release;
        app.on_key(key);
        assert_eq!(pump(&mut app, &rx), 0);
    }

    #[test]
    fn enter_presses_focused_button() {
        let (mut app, rx) = make_app();
        assert_eq!(app.focus(), Control::Increment);
        app.on_key(press_key(KeyCode::Left));
        assert_eq!(app.focus(), Control::Decrement);
        app.on_key(press_key(KeyCode::Left));
        assert_eq!(app.focus(), Control::IncrementBy10);
        app.on_key(press_key(KeyCode::Enter));
        pump(&mut app, &rx);
        assert_eq!(app.view().value, 10);
    }

    #[test]
    fn clicking_a_button_focuses_and_presses_it() {
        let (mut app, rx) = make_app();
        app.on_resize(60, 40);
        let layout = ScreenLayout::compute(Rect::new(0, 0, 60, 40));
        let target = layout.button(Control::IncrementBy10);
        for _ in 0..8 {
            app.on_mouse(click(target.x + 1, target.y + 1));
        }
        pump(&mut app, &rx);
        assert_eq!(app.focus(), Control::IncrementBy10);
        assert_eq!(app.view().value, 80);
        assert_eq!(app.view().color_band, ColorBand::Tertiary);
    }

    #[test]
    fn click_before_first_resize_is_ignored() {
        let (mut app, rx) = make_app();
        app.on_mouse(click(1, 1));
        assert_eq!(pump(&mut app, &rx), 0);
    }

    #[test]
    fn snapshot_sets_animation_target() {
        let (tx, rx) = mpsc::channel();
        let config = UiConfig {
            animation_ms: 1000,
            ..UiConfig::default()
        };
        let mut app = App::new(&config, Theme::default(), tx);
        app.on_key(press_key(KeyCode::PageUp));
        pump(&mut app, &rx);
        assert_eq!(app.displayed_ratio(), 0.0);
        app.on_tick(Duration::from_millis(50));
        assert!((app.displayed_ratio() - 0.05).abs() < 1e-9);
        app.on_tick(Duration::from_secs(1));
        assert_eq!(app.displayed_ratio(), 0.1);
    }
}
