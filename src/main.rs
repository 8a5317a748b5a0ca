use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use counter_app::cli::{Cli, Command};
use counter_app::config::Config;
use counter_app::logging::{self, LogTarget};
use counter_app::replay::{format_snapshot, replay};
use counter_app::shutdown::ShutdownHandle;
use counter_app::ui::counter::CounterIntent;
use counter_app::ui::runtime;
use counter_app::ui::theme::Theme;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path).context("Failed to load configuration")?;
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());

    match cli.command {
        Some(Command::Replay {
            actions,
            final_only,
        }) => {
            logging::init_tracing(&level, &LogTarget::Stderr)
                .context("Failed to initialize logging")?;
            log_config_source(&config_path);
            let snapshots = replay(actions.into_iter().map(CounterIntent::from));
            if final_only {
                let last = snapshots.last().copied().unwrap_or_default();
                println!("{}", format_snapshot(&last));
            } else {
                for snapshot in &snapshots {
                    println!("{}", format_snapshot(snapshot));
                }
            }
            Ok(())
        }
        None => run_interactive(&config, &config_path, &level, cli.log_file),
    }
}

fn run_interactive(
    config: &Config,
    config_path: &Path,
    level: &str,
    log_file: Option<std::path::PathBuf>,
) -> anyhow::Result<()> {
    let log_path = log_file
        .or_else(|| config.logging.file.clone())
        .unwrap_or_else(logging::default_log_path);
    logging::init_tracing(level, &LogTarget::File(log_path))
        .context("Failed to initialize logging")?;
    log_config_source(config_path);

    let theme = Theme::from_config(&config.theme).context("Invalid theme")?;
    let shutdown = ShutdownHandle::new();
    shutdown
        .register_os_signals()
        .context("Failed to register signal handlers")?;

    runtime::run(config, theme, shutdown).context("Terminal UI failed")?;
    Ok(())
}

fn log_config_source(path: &Path) {
    if path.exists() {
        tracing::debug!(path = %path.display(), "configuration loaded");
    } else {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
    }
}
