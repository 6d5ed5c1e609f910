//! The predefined task board and the per-run session state.
//!
//! `TaskBoard` holds the fixed set of predefined tasks. `Session` owns the
//! board together with the completion history and the dynamic task list for
//! the lifetime of one run.

use std::ops::{Index, IndexMut};

use crate::error::{TaskError, TaskResult};
use crate::history::CompletionStack;
use crate::task::{PredefinedTask, SEED_TASKS};
use crate::task_list::TaskList;

/// Fixed-length sequence of predefined tasks.
#[derive(Debug, Clone)]
pub struct TaskBoard {
    tasks: Vec<PredefinedTask>,
}

impl TaskBoard {
    /// Build a board from descriptions, all pending. The length never changes.
    pub fn new<S: AsRef<str>>(descriptions: &[S]) -> Self {
        Self {
            tasks: descriptions
                .iter()
                .map(|d| PredefinedTask::new(d.as_ref()))
                .collect(),
        }
    }

    /// Board seeded with the default task set.
    pub fn seeded() -> Self {
        Self::new(&SEED_TASKS)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &PredefinedTask)> {
        self.tasks.iter().enumerate()
    }

    /// Task at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&PredefinedTask> {
        self.tasks.get(index)
    }

    /// Convert a user-supplied index into a valid board position.
    pub fn check_index(&self, index: i64) -> TaskResult<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.tasks.len())
            .ok_or(TaskError::InvalidIndex {
                index,
                len: self.tasks.len(),
            })
    }

    /// Overwrite the description at `index`; the completion flag is untouched.
    pub fn update(&mut self, index: usize, description: &str) -> TaskResult<()> {
        let task = self.task_mut(index)?;
        task.description = description.to_string();
        Ok(())
    }

    /// Set the completion flag at `index`.
    pub fn set_completed(&mut self, index: usize, completed: bool) -> TaskResult<()> {
        self.task_mut(index)?.completed = completed;
        Ok(())
    }

    fn task_mut(&mut self, index: usize) -> TaskResult<&mut PredefinedTask> {
        let len = self.tasks.len();
        self.tasks.get_mut(index).ok_or(TaskError::InvalidIndex {
            index: index as i64,
            len,
        })
    }
}

/// Positional access for indices already validated with `check_index`.
impl Index<usize> for TaskBoard {
    type Output = PredefinedTask;

    fn index(&self, index: usize) -> &PredefinedTask {
        &self.tasks[index]
    }
}

impl IndexMut<usize> for TaskBoard {
    fn index_mut(&mut self, index: usize) -> &mut PredefinedTask {
        &mut self.tasks[index]
    }
}

/// Everything one run of the task manager works on.
pub struct Session {
    pub board: TaskBoard,
    pub history: CompletionStack,
    pub dynamic: TaskList,
}

impl Session {
    /// Seeded board, empty history of the given capacity, empty dynamic list.
    pub fn new(history_capacity: usize) -> Self {
        Self {
            board: TaskBoard::seeded(),
            history: CompletionStack::new(history_capacity),
            dynamic: TaskList::new(),
        }
    }
}
