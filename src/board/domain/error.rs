//! Error types for board domain validation, parsing and reordering.

use super::{TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned while constructing domain board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task identifier is empty after trimming.
    #[error("task identifier must not be empty")]
    EmptyTaskId,

    /// Two tasks in one sequence share an identifier.
    #[error("duplicate task identifier: {0}")]
    DuplicateTaskId(TaskId),
}

/// Error returned while parsing task statuses from the store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities from the store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Errors returned by the reorder engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReorderError {
    /// The drag outcome points past the end of its source column.
    #[error("source index {index} is outside column '{column}' of length {len}")]
    SourceIndexOutOfRange {
        /// Column the drag started from.
        column: TaskStatus,
        /// Index reported by the drag outcome.
        index: usize,
        /// Number of tasks in the column.
        len: usize,
    },
}
