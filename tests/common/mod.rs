//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use counter_app::ui::counter::{CounterController, CounterIntent};
use std::path::PathBuf;
use tempfile::TempDir;

/// Controller already driven to `value` by unit increments.
pub fn controller_at(value: u8) -> CounterController {
    let mut controller = CounterController::new();
    for _ in 0..value {
        controller.dispatch(CounterIntent::Increment);
    }
    assert_eq!(controller.current_value(), value);
    controller
}

/// Write `contents` to a `config.toml` inside a fresh temp dir.
pub fn temp_config(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, contents).expect("Failed to write config");
    (temp_dir, config_path)
}
