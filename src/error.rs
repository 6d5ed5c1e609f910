//! Error types for task manager operations.
//!
//! Every rejected operation is a `TaskError`. All variants except `Io` are
//! recoverable: the menu prints the message and keeps looping.

use thiserror::Error;

/// Conditions reported by the task board, the completion history and the
/// dynamic task list.
#[derive(Error, Debug)]
pub enum TaskError {
    /// A number was expected but the line did not parse as one.
    #[error("Invalid input! Please enter a number.")]
    InvalidInput { raw: String },

    /// Menu choice outside 1..=9.
    #[error("Invalid choice! Try again.")]
    InvalidChoice { choice: i64 },

    /// Predefined task index out of range.
    #[error("Invalid index.")]
    InvalidIndex { index: i64, len: usize },

    /// Dynamic task position out of range.
    #[error("Invalid position. No task removed.")]
    InvalidPosition { position: i64, len: usize },

    /// Removal requested on an empty dynamic task list.
    #[error("No tasks to remove.")]
    NoTasks,

    /// Completion history is full.
    #[error("Stack Overflow! Cannot add more completed tasks.")]
    StackOverflow { capacity: usize },

    /// Undo requested with an empty completion history.
    #[error("Stack Underflow! No tasks to undo.")]
    StackUnderflow,

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TaskError {
    /// Whether the menu loop can report this error and carry on.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, TaskError::Io(_))
    }

    /// The values behind a rejection, for diagnostics.
    pub fn detail(&self) -> String {
        match self {
            TaskError::InvalidInput { raw } => format!("input={raw:?}"),
            TaskError::InvalidChoice { choice } => format!("choice={choice}"),
            TaskError::InvalidIndex { index, len } => format!("index={index} len={len}"),
            TaskError::InvalidPosition { position, len } => format!("position={position} len={len}"),
            TaskError::StackOverflow { capacity } => format!("capacity={capacity}"),
            TaskError::NoTasks | TaskError::StackUnderflow => String::new(),
            TaskError::Io(err) => err.to_string(),
        }
    }
}

pub type TaskResult<T> = Result<T, TaskError>;
