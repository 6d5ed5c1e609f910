//! Predefined task data structure.
//!
//! A predefined task is one of the fixed entries seeded at startup. It is
//! addressed by its position on the board and lives for the whole run.

/// Task descriptions the board is seeded with.
pub const SEED_TASKS: [&str; 7] = [
    "Check Schedule",
    "Attend lecture",
    "Exercise",
    "Study",
    "Homework",
    "Improve Piano Skills",
    "Don't Lose Your Sanity",
];

/// A fixed board entry with its completion flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredefinedTask {
    pub description: String,
    pub completed: bool,
}

impl PredefinedTask {
    /// Create a pending task.
    pub fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
            completed: false,
        }
    }
}
