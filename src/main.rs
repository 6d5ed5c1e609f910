//! # Daily Tasks - Interactive Task Manager
//!
//! A small menu-driven task tracker working on three in-memory collections:
//!
//! - **Predefined tasks**: a fixed board of seven tasks, each with a completion flag
//! - **Completion history**: a bounded stack of completions that backs undo
//! - **Dynamic tasks**: a singly linked list of tasks added during the session
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the menu
//! daily-tasks
//!
//! # Keep a longer undo history
//! daily-tasks --capacity 25
//!
//! # Shell completions
//! daily-tasks completions bash
//! ```
//!
//! Nothing is persisted: all state is discarded when the menu exits.

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod board;
pub mod cli;
pub mod cmd;
pub mod error;
pub mod fields;
pub mod history;
pub mod input;
pub mod menu;
pub mod style;
pub mod task;
pub mod task_list;

use board::Session;
use cli::Cli;
use cmd::*;
use menu::MenuApp;
use style::Palette;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(cli.log_filter()))
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Some(Commands::Completions { shell }) => cmd_completions(shell),
        Some(Commands::Run) | None => {
            let session = Session::new(usize::from(cli.capacity));
            let palette = Palette::detect(cli.no_color);
            let app = MenuApp::new(session, io::stdin().lock(), io::stdout(), palette);
            if let Err(e) = app.run() {
                eprintln!("Task manager stopped: {e}");
                std::process::exit(1);
            }
        },
    }
}
