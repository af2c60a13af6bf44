//! Domain model for the task board.
//!
//! Columns are never stored: each one is a filtered view over the task
//! sequence. The reorder engine is a pure function over that sequence and
//! keeps every infrastructure concern outside of the domain boundary.

mod drag;
mod error;
mod ids;
mod reorder;
mod sequence;
mod state;
mod task;

pub use drag::{DragLocation, DragOutcome};
pub use error::{BoardDomainError, ParsePriorityError, ParseTaskStatusError, ReorderError};
pub use ids::TaskId;
pub use reorder::{Reordered, TaskMove, reorder};
pub use sequence::{ColumnView, TaskSequence};
pub use state::{BoardState, ListenerId};
pub use task::{Priority, Task, TaskData, TaskStatus};
