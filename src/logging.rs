//! Tracing setup.
//!
//! The interactive UI owns the terminal, so its logs go to a file. The
//! headless `replay` command logs to stderr.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to open log file '{path}': {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid log filter '{directive}': {source}")]
    InvalidFilter {
        directive: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Invalid RUST_LOG filter '{directive}': {source}")]
    InvalidEnvFilter {
        directive: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

/// Default log file: `<cache dir>/counter-app/counter-app.log`.
pub fn default_log_path() -> PathBuf {
    let cache_dir = dirs::cache_dir().unwrap_or_else(std::env::temp_dir);
    cache_dir.join("counter-app").join("counter-app.log")
}

/// Build the filter: `RUST_LOG` wins, otherwise `level`.
pub fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok(), level)
}

/// An unparsable `RUST_LOG` is an error rather than a silent fallback.
fn filter_from(env: Option<String>, level: &str) -> Result<EnvFilter, LoggingError> {
    match env {
        Some(directive) => EnvFilter::try_new(&directive)
            .map_err(|source| LoggingError::InvalidEnvFilter { directive, source }),
        None => EnvFilter::try_new(level).map_err(|source| LoggingError::InvalidFilter {
            directive: level.to_string(),
            source,
        }),
    }
}

pub fn init_tracing(level: &str, target: &LogTarget) -> Result<(), LoggingError> {
    let filter = build_filter(level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339());

    let result = match target {
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
    };

    result.map_err(|err| LoggingError::Install(err.to_string()))
}

fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    let open_err = |source| LoggingError::OpenFile {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(open_err)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(open_err)
}
