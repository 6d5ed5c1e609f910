//! Bounded completion history used for undo.
//!
//! The history is a fixed-capacity LIFO stack. Pushing onto a full stack is
//! rejected rather than overwriting the oldest record, and popping an empty
//! stack is a reported condition rather than a panic.

use chrono::{DateTime, Local};
use tracing::trace;

use crate::error::{TaskError, TaskResult};

/// Default number of completions kept for undo.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// A single completion of a predefined task.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRecord {
    /// Task description as it read when the task was completed.
    pub description: String,
    /// Board position of the completed task.
    pub source_index: usize,
    pub completed_at: DateTime<Local>,
}

impl CompletionRecord {
    /// Description annotated as completed, e.g. `"Study (Completed)"`.
    pub fn annotated(&self) -> String {
        format!("{} (Completed)", self.description)
    }
}

/// Fixed-capacity stack of completion records.
#[derive(Debug)]
pub struct CompletionStack {
    records: Vec<CompletionRecord>,
    capacity: usize,
}

impl CompletionStack {
    /// Create an empty stack holding at most `capacity` records.
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a completion. Fails without touching the stack when it is full.
    pub fn push(&mut self, description: &str, source_index: usize) -> TaskResult<()> {
        if self.is_full() {
            return Err(TaskError::StackOverflow {
                capacity: self.capacity,
            });
        }
        self.records.push(CompletionRecord {
            description: description.to_string(),
            source_index,
            completed_at: Local::now(),
        });
        trace!(source_index, depth = self.records.len(), "completion pushed");
        Ok(())
    }

    /// Remove and return the most recent completion.
    pub fn pop(&mut self) -> TaskResult<CompletionRecord> {
        let record = self.records.pop().ok_or(TaskError::StackUnderflow)?;
        trace!(source_index = record.source_index, depth = self.records.len(), "completion popped");
        Ok(record)
    }

    /// Most recent completion, if any.
    pub fn peek(&self) -> Option<&CompletionRecord> {
        self.records.last()
    }

    /// True when any remaining record points at board position `index`.
    pub fn references(&self, index: usize) -> bool {
        self.records.iter().any(|r| r.source_index == index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
