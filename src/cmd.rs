//! Command implementations for the task manager.
//!
//! The `Commands` enum is the CLI subcommand surface. The `cmd_*` functions
//! implement the menu operations against a `Session`, writing line-oriented
//! feedback to the supplied writer. Rejections are returned as `TaskError`
//! and reported by the caller.

use std::io::Write;

use clap::Subcommand;
use clap_complete::{generate, Shell};
use tracing::debug;

use crate::board::Session;
use crate::error::{TaskError, TaskResult};
use crate::style::Palette;

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive task menu (default).
    Run,

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Print every predefined task with its index and completion status.
pub fn cmd_view<W: Write>(session: &Session, out: &mut W, palette: &Palette) -> TaskResult<()> {
    writeln!(out, "\n{}", palette.header("Predefined Tasks:"))?;
    for (i, task) in session.board.iter() {
        if task.completed {
            writeln!(out, "{}: {}{}", i, task.description, palette.done(" (Completed)"))?;
        } else {
            writeln!(out, "{}: {}", i, task.description)?;
        }
    }
    Ok(())
}

/// Replace the description of a predefined task.
pub fn cmd_update<W: Write>(
    session: &mut Session,
    out: &mut W,
    palette: &Palette,
    index: usize,
    description: &str,
) -> TaskResult<()> {
    session.board.update(index, description)?;
    debug!(index, "predefined task updated");
    writeln!(out, "{}", palette.success("Task updated successfully."))?;
    Ok(())
}

/// Mark a predefined task completed and record it for undo.
///
/// Completing an already completed task records it again. When the history
/// is full nothing changes, including the completion flag.
pub fn cmd_complete<W: Write>(
    session: &mut Session,
    out: &mut W,
    palette: &Palette,
    index: i64,
) -> TaskResult<()> {
    let index = session.board.check_index(index)?;

    session.history.push(&session.board[index].description, index)?;
    session.board[index].completed = true;
    debug!(index, depth = session.history.len(), "task completed");

    let description = &session.board[index].description;
    let message = format!("Task '{description}' marked as completed.");
    writeln!(out, "{}", palette.success(&message))?;
    writeln!(out, "Task '{description}' completed.")?;
    Ok(())
}

/// Show the most recent completion without removing it.
pub fn cmd_peek<W: Write>(session: &Session, out: &mut W) -> TaskResult<()> {
    match session.history.peek() {
        Some(record) => writeln!(
            out,
            "Last completed task: {} at {}",
            record.annotated(),
            record.completed_at.format("%H:%M:%S")
        )?,
        None => writeln!(out, "Last completed task: No completed tasks.")?,
    }
    Ok(())
}

/// Revert the most recent completion.
///
/// The task goes back to pending unless an older completion of the same task
/// is still in the history.
pub fn cmd_undo<W: Write>(session: &mut Session, out: &mut W, palette: &Palette) -> TaskResult<()> {
    let record = session.history.pop()?;
    let index = record.source_index;

    if session.history.references(index) {
        debug!(index, "undo left an earlier completion in place");
        let message = format!(
            "Undo: removed one completion of '{}'; it is still completed.",
            record.description
        );
        writeln!(out, "{}", palette.success(&message))?;
        return Ok(());
    }

    session.board.set_completed(index, false)?;
    debug!(index, depth = session.history.len(), "completion undone");
    let message = format!("Undo: Task '{}' is now pending again.", record.annotated());
    writeln!(out, "{}", palette.success(&message))?;
    Ok(())
}

/// Append a dynamic task.
pub fn cmd_add<W: Write>(
    session: &mut Session,
    out: &mut W,
    palette: &Palette,
    description: &str,
) -> TaskResult<()> {
    session.dynamic.insert_task(description);
    debug!(len = session.dynamic.len(), "dynamic task added");
    writeln!(out, "{}", palette.success(&format!("Task added: {description}")))?;
    Ok(())
}

/// Remove the dynamic task at `position`.
pub fn cmd_remove<W: Write>(
    session: &mut Session,
    out: &mut W,
    palette: &Palette,
    position: i64,
) -> TaskResult<()> {
    if session.dynamic.is_empty() {
        return Err(TaskError::NoTasks);
    }
    let position = usize::try_from(position).map_err(|_| TaskError::InvalidPosition {
        position,
        len: session.dynamic.len(),
    })?;

    let removed = session.dynamic.delete_task(position)?;
    debug!(position, len = session.dynamic.len(), "dynamic task removed");
    writeln!(out, "{}", palette.success(&format!("Task '{removed}' removed.")))?;
    Ok(())
}

/// Print the dynamic tasks in list order.
pub fn cmd_list<W: Write>(session: &Session, out: &mut W, palette: &Palette) -> TaskResult<()> {
    if session.dynamic.is_empty() {
        writeln!(out, "No dynamic tasks available.")?;
        return Ok(());
    }
    writeln!(out, "\n{}", palette.header("Dynamic Tasks:"))?;
    for (i, description) in session.dynamic.display_tasks() {
        writeln!(out, "{i}: {description}")?;
    }
    Ok(())
}

/// Generate shell completions.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;
    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}
