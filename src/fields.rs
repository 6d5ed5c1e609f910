//! Menu options and their numbering.
//!
//! The interactive menu is numbered 1 through 9; `MenuChoice` is the typed
//! form of a selection.

use std::fmt;

use crate::error::TaskError;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewTasks,
    UpdateTask,
    CompleteTask,
    PeekCompleted,
    UndoCompletion,
    AddDynamic,
    RemoveDynamic,
    ListDynamic,
    Exit,
}

impl MenuChoice {
    /// All options in menu order.
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::ViewTasks,
        MenuChoice::UpdateTask,
        MenuChoice::CompleteTask,
        MenuChoice::PeekCompleted,
        MenuChoice::UndoCompletion,
        MenuChoice::AddDynamic,
        MenuChoice::RemoveDynamic,
        MenuChoice::ListDynamic,
        MenuChoice::Exit,
    ];

    /// The number the user types to pick this option.
    pub fn number(self) -> i64 {
        match self {
            MenuChoice::ViewTasks => 1,
            MenuChoice::UpdateTask => 2,
            MenuChoice::CompleteTask => 3,
            MenuChoice::PeekCompleted => 4,
            MenuChoice::UndoCompletion => 5,
            MenuChoice::AddDynamic => 6,
            MenuChoice::RemoveDynamic => 7,
            MenuChoice::ListDynamic => 8,
            MenuChoice::Exit => 9,
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::ViewTasks => "View Tasks",
            MenuChoice::UpdateTask => "Update Task",
            MenuChoice::CompleteTask => "Mark Task as Completed",
            MenuChoice::PeekCompleted => "View Last Completed Task",
            MenuChoice::UndoCompletion => "Undo Last Completion",
            MenuChoice::AddDynamic => "Add New Dynamic Task",
            MenuChoice::RemoveDynamic => "Remove Dynamic Task",
            MenuChoice::ListDynamic => "View Dynamic Tasks",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl TryFrom<i64> for MenuChoice {
    type Error = TaskError;

    fn try_from(choice: i64) -> Result<Self, Self::Error> {
        MenuChoice::ALL
            .into_iter()
            .find(|c| c.number() == choice)
            .ok_or(TaskError::InvalidChoice { choice })
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}
