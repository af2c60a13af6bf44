//! Ordered task sequence and the column views derived from it.

use super::{BoardDomainError, Task, TaskId, TaskStatus};
use std::collections::HashSet;

/// Ordered collection of tasks, unique by identifier.
///
/// Column membership is not stored separately: a column is the subsequence
/// of tasks carrying that column's status, in sequence order, so the three
/// column views always partition the sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskSequence {
    tasks: Vec<Task>,
}

impl TaskSequence {
    /// Creates a sequence, rejecting duplicate task identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateTaskId`] for the first
    /// identifier that appears twice.
    pub fn new(tasks: Vec<Task>) -> Result<Self, BoardDomainError> {
        let mut seen = HashSet::with_capacity(tasks.len());
        for task in &tasks {
            if !seen.insert(task.id()) {
                return Err(BoardDomainError::DuplicateTaskId(task.id().clone()));
            }
        }
        Ok(Self { tasks })
    }

    /// Creates an empty sequence.
    #[must_use]
    pub const fn empty() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Returns the tasks in sequence order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the sequence holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Iterates over task identifiers in sequence order.
    pub fn ids(&self) -> impl Iterator<Item = &TaskId> {
        self.tasks.iter().map(Task::id)
    }

    /// Returns the tasks whose status matches `status`, in sequence order.
    #[must_use]
    pub fn column_view(&self, status: TaskStatus) -> ColumnView<'_> {
        ColumnView {
            status,
            tasks: self
                .tasks
                .iter()
                .filter(|task| task.status() == status)
                .collect(),
        }
    }

    /// Returns every column view in board order.
    pub fn columns(&self) -> impl Iterator<Item = ColumnView<'_>> {
        TaskStatus::ALL
            .into_iter()
            .map(|status| self.column_view(status))
    }

    /// Rewrites the status of the task with identifier `id`, leaving the
    /// order and every other task untouched.
    pub(super) fn with_status(&self, id: &TaskId, status: TaskStatus) -> Self {
        let tasks = self
            .tasks
            .iter()
            .map(|task| {
                if task.id() == id {
                    task.with_status(status)
                } else {
                    task.clone()
                }
            })
            .collect();
        Self { tasks }
    }
}

impl<'a> IntoIterator for &'a TaskSequence {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

/// Tasks belonging to one column, borrowed from a [`TaskSequence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView<'a> {
    status: TaskStatus,
    tasks: Vec<&'a Task>,
}

impl<'a> ColumnView<'a> {
    /// Returns the status this column collects.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the column header label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.status.as_str()
    }

    /// Returns the column's tasks in board order.
    #[must_use]
    pub fn tasks(&self) -> &[&'a Task] {
        &self.tasks
    }

    /// Returns the task at a column-relative index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a Task> {
        self.tasks.get(index).copied()
    }

    /// Returns the number of tasks in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the column holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Consumes the view, returning the borrowed tasks.
    #[must_use]
    pub fn into_tasks(self) -> Vec<&'a Task> {
        self.tasks
    }
}
