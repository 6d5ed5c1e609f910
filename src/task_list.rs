//! Singly linked list of user-defined tasks.
//!
//! Each node is owned by its predecessor, the first node by the list head.
//! There is no tail pointer: appending walks the chain from the head.

use crate::error::{TaskError, TaskResult};

struct TaskNode {
    description: String,
    next: Option<Box<TaskNode>>,
}

/// Ordered, unbounded list of dynamic tasks addressed by zero-based position.
#[derive(Default)]
pub struct TaskList {
    head: Option<Box<TaskNode>>,
    len: usize,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task at the tail.
    pub fn insert_task(&mut self, description: &str) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(TaskNode {
            description: description.to_string(),
            next: None,
        }));
        self.len += 1;
    }

    /// Remove the task at `position` and return its description.
    ///
    /// An empty list reports `NoTasks`; a position past the end reports
    /// `InvalidPosition`. Neither mutates the list.
    pub fn delete_task(&mut self, position: usize) -> TaskResult<String> {
        if self.head.is_none() {
            return Err(TaskError::NoTasks);
        }
        let invalid = TaskError::InvalidPosition {
            position: position as i64,
            len: self.len,
        };
        if position >= self.len {
            return Err(invalid);
        }

        let mut cursor = &mut self.head;
        for _ in 0..position {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => return Err(invalid),
            }
        }

        let Some(removed) = cursor.take() else {
            return Err(invalid);
        };
        let TaskNode { description, next } = *removed;
        *cursor = next;
        self.len -= 1;
        Ok(description)
    }

    /// Walk the list from the head, yielding `(position, description)`.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
            index: 0,
        }
    }

    /// The tasks in list order. Each call starts a fresh walk from the head.
    pub fn display_tasks(&self) -> Iter<'_> {
        self.iter()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

impl Drop for TaskList {
    fn drop(&mut self) {
        // Unlink iteratively; the default recursive drop can blow the stack.
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

/// Lazy iterator over a `TaskList`.
pub struct Iter<'a> {
    next: Option<&'a TaskNode>,
    index: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        let item = (self.index, node.description.as_str());
        self.index += 1;
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(items: &[&str]) -> TaskList {
        let mut list = TaskList::new();
        for item in items {
            list.insert_task(item);
        }
        list
    }

    fn descriptions(list: &TaskList) -> Vec<&str> {
        list.iter().map(|(_, d)| d).collect()
    }

    #[test]
    fn inserts_keep_order_and_indices() {
        let list = list_of(&["a", "b", "c", "d"]);
        assert_eq!(
            list.display_tasks().collect::<Vec<_>>(),
            vec![(0, "a"), (1, "b"), (2, "c"), (3, "d")]
        );
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn iteration_is_restartable() {
        let list = list_of(&["a", "b"]);
        assert_eq!(list.iter().count(), 2);
        assert_eq!(list.iter().count(), 2);
    }

    #[test]
    fn delete_head() {
        let mut list = list_of(&["a", "b", "c"]);
        assert_eq!(list.delete_task(0).unwrap(), "a");
        assert_eq!(descriptions(&list), vec!["b", "c"]);
        assert_eq!(list.display_tasks().next(), Some((0, "b")));
    }

    #[test]
    fn delete_middle() {
        let mut list = list_of(&["a", "b", "c"]);
        assert_eq!(list.delete_task(1).unwrap(), "b");
        assert_eq!(descriptions(&list), vec!["a", "c"]);
    }

    #[test]
    fn delete_tail_then_append() {
        let mut list = list_of(&["a", "b", "c"]);
        assert_eq!(list.delete_task(2).unwrap(), "c");
        list.insert_task("d");
        assert_eq!(descriptions(&list), vec!["a", "b", "d"]);
    }

    #[test]
    fn delete_out_of_range_is_a_noop() {
        let mut list = list_of(&["a", "b", "c"]);
        let err = list.delete_task(5).unwrap_err();
        assert!(matches!(err, TaskError::InvalidPosition { position: 5, len: 3 }));
        assert_eq!(descriptions(&list), vec!["a", "b", "c"]);

        assert!(matches!(list.delete_task(3), Err(TaskError::InvalidPosition { .. })));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn delete_from_empty_reports_no_tasks() {
        let mut list = TaskList::new();
        assert!(matches!(list.delete_task(0), Err(TaskError::NoTasks)));
        assert!(matches!(list.delete_task(4), Err(TaskError::NoTasks)));
        assert!(list.is_empty());
    }

    #[test]
    fn long_lists_drop_without_recursion() {
        let mut list = TaskList::new();
        let mut head: Option<Box<TaskNode>> = None;
        for i in 0..200_000 {
            head = Some(Box::new(TaskNode {
                description: i.to_string(),
                next: head,
            }));
        }
        list.head = head;
        list.len = 200_000;
        assert_eq!(list.iter().next(), Some((0, "199999")));
        drop(list);
    }
}
