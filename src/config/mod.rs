//! Configuration loading and validation.

mod loader;
mod types;

pub use loader::{parse_color, ConfigError};
pub use types::{Config, LoggingConfig, ThemeConfig, UiConfig};
