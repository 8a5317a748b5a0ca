use crate::config::Config;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::theme::Theme;
use std::io;
use std::time::{Duration, Instant};

pub fn run(config: &Config, theme: Theme, shutdown: ShutdownHandle) -> io::Result<()> {
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let (mut terminal, guard) = setup_terminal(config.ui.mouse)?;
    let events = EventHandler::new(tick_rate, shutdown.clone());
    let mut app = App::new(&config.ui, theme, events.sender());
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    tracing::info!(tick_rate_ms = config.ui.tick_rate_ms, "Counter session started");

    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => app.on_mouse(mouse),
            Ok(AppEvent::Snapshot(snapshot)) => app.on_snapshot(snapshot),
            Ok(AppEvent::Tick) => {
                app.on_tick(last_tick.elapsed());
                last_tick = Instant::now();
            }
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!(final_value = app.view().value, "Counter session ended");
    shutdown.signal();
    drop(app);
    drop(guard);
    Ok(())
}
