use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Event loop and animation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 50). Must be non-zero.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Time for the progress ring to sweep the full range (default: 300).
    /// Zero disables the animation.
    #[serde(default = "default_animation_ms")]
    pub animation_ms: u64,
    /// Capture mouse events so buttons can be clicked (default: true).
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

/// Colors for the three value bands and the unfilled ring track.
///
/// Values are anything `ratatui::style::Color` parses: `#rrggbb`,
/// named colors, or 256-color indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_primary")]
    pub primary: String,
    #[serde(default = "default_secondary")]
    pub secondary: String,
    #[serde(default = "default_tertiary")]
    pub tertiary: String,
    #[serde(default = "default_track")]
    pub track: String,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive (default: "info"). `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to the platform cache directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_animation_ms() -> u64 {
    300
}

fn default_mouse() -> bool {
    true
}

fn default_primary() -> String {
    "#6750a4".to_string()
}

fn default_secondary() -> String {
    "#625b71".to_string()
}

fn default_tertiary() -> String {
    "#7d5260".to_string()
}

fn default_track() -> String {
    "#3a3a3a".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            animation_ms: default_animation_ms(),
            mouse: default_mouse(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: default_primary(),
            secondary: default_secondary(),
            tertiary: default_tertiary(),
            track: default_track(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
