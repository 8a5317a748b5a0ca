//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::ui::counter::CounterIntent;

#[derive(Debug, Parser)]
#[command(
    name = "counter-app",
    version,
    about = "Counter with a circular progress indicator, in your terminal"
)]
pub struct Cli {
    /// Config file (default: <config dir>/counter-app/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file for the interactive UI
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "counter_app=trace" (RUST_LOG wins)
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Apply actions to a fresh counter and print each snapshot
    Replay {
        /// Actions in order
        #[arg(value_enum, value_name = "ACTION")]
        actions: Vec<ReplayAction>,

        /// Print only the final snapshot
        #[arg(long)]
        final_only: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReplayAction {
    #[value(name = "inc")]
    Inc,
    #[value(name = "dec")]
    Dec,
    #[value(name = "inc10")]
    Inc10,
    #[value(name = "dec10")]
    Dec10,
    #[value(name = "reset")]
    Reset,
}

impl From<ReplayAction> for CounterIntent {
    fn from(action: ReplayAction) -> Self {
        match action {
            ReplayAction::Inc => CounterIntent::Increment,
            ReplayAction::Dec => CounterIntent::Decrement,
            ReplayAction::Inc10 => CounterIntent::IncrementBy10,
            ReplayAction::Dec10 => CounterIntent::DecrementBy10,
            ReplayAction::Reset => CounterIntent::Reset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_runs_ui() {
        let cli = Cli::try_parse_from(["counter-app"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn replay_parses_actions_in_order() {
        let cli =
            Cli::try_parse_from(["counter-app", "replay", "inc10", "dec", "reset", "--final-only"])
                .unwrap();
        match cli.command {
            Some(Command::Replay {
                actions,
                final_only,
            }) => {
                assert_eq!(
                    actions,
                    vec![ReplayAction::Inc10, ReplayAction::Dec, ReplayAction::Reset]
                );
                assert!(final_only);
            }
            other => panic!("expected Replay, got {:?}", other),
        }
    }

    #[test]
    fn unknown_action_is_rejected() {
        assert!(Cli::try_parse_from(["counter-app", "replay", "double"]).is_err());
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["counter-app", "replay", "--config", "/tmp/x.toml"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/x.toml")));
    }
}
