use clap::{ArgAction, Parser};

use crate::cmd::Commands;
use crate::history::DEFAULT_HISTORY_CAPACITY;

/// Interactive daily task manager.
/// State lives in memory only and is discarded on exit.
#[derive(Parser)]
#[command(name = "daily-tasks", version, about = "Interactive daily task manager")]
pub struct Cli {
    /// Number of completions kept for undo.
    #[arg(long, global = true, default_value_t = DEFAULT_HISTORY_CAPACITY as u16,
          value_parser = clap::value_parser!(u16).range(1..))]
    pub capacity: u16,

    /// Disable coloured output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log diagnostics to stderr. Repeat for more detail.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Tracing filter for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "daily_tasks=debug,warn",
            _ => "daily_tasks=trace,info",
        }
    }
}
