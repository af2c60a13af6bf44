//! Pure reorder engine turning a drag outcome into the next task sequence.

use super::{DragOutcome, ReorderError, Task, TaskId, TaskSequence, TaskStatus};

/// A task that changed place as the result of a drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskMove {
    task_id: TaskId,
    from: TaskStatus,
    to: TaskStatus,
    projected_column: Vec<TaskId>,
}

impl TaskMove {
    /// Returns the identifier of the moved task.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    /// Returns the column the task was dragged out of.
    #[must_use]
    pub const fn from(&self) -> TaskStatus {
        self.from
    }

    /// Returns the column the task was dropped into. This is the status
    /// written back to the store.
    #[must_use]
    pub const fn to(&self) -> TaskStatus {
        self.to
    }

    /// Returns `true` when the task changed column.
    #[must_use]
    pub fn changed_column(&self) -> bool {
        self.from != self.to
    }

    /// Destination column order right after the drop.
    ///
    /// This arrangement is not carried into the task sequence: the sequence
    /// keeps its original relative order and only the status changes, so a
    /// reload shows the column in store order.
    #[must_use]
    pub fn projected_column(&self) -> &[TaskId] {
        &self.projected_column
    }
}

/// Result of running the reorder engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reordered {
    sequence: TaskSequence,
    task_move: Option<TaskMove>,
}

impl Reordered {
    fn unchanged(sequence: &TaskSequence) -> Self {
        Self {
            sequence: sequence.clone(),
            task_move: None,
        }
    }

    /// Returns the next task sequence.
    #[must_use]
    pub const fn sequence(&self) -> &TaskSequence {
        &self.sequence
    }

    /// Returns the move performed, or `None` for a no-op drop.
    #[must_use]
    pub const fn task_move(&self) -> Option<&TaskMove> {
        self.task_move.as_ref()
    }

    /// Returns `true` when the drop changed nothing.
    #[must_use]
    pub const fn is_unchanged(&self) -> bool {
        self.task_move.is_none()
    }

    /// Splits the result into the next sequence and the move performed.
    #[must_use]
    pub fn into_parts(self) -> (TaskSequence, Option<TaskMove>) {
        (self.sequence, self.task_move)
    }
}

/// Computes the task sequence that follows a drop.
///
/// A drop outside every column (`None`) and a drop back onto the pick-up
/// location leave the sequence unchanged. Otherwise the task at the source
/// index of the source column is the moved task; its status becomes the
/// destination column and every other task, together with the relative
/// order of the whole sequence, stays as it was.
///
/// # Errors
///
/// Returns [`ReorderError::SourceIndexOutOfRange`] when the source index
/// does not address a task of the source column.
pub fn reorder(
    sequence: &TaskSequence,
    drag: Option<&DragOutcome>,
) -> Result<Reordered, ReorderError> {
    let Some(drag) = drag else {
        return Ok(Reordered::unchanged(sequence));
    };
    if drag.is_noop() {
        return Ok(Reordered::unchanged(sequence));
    }

    let source = drag.source;
    let destination = drag.destination;
    let mut source_list = sequence.column_view(source.column).into_tasks();
    if source.index >= source_list.len() {
        return Err(ReorderError::SourceIndexOutOfRange {
            column: source.column,
            index: source.index,
            len: source_list.len(),
        });
    }
    let moved: &Task = source_list.remove(source.index);
    let task_id = moved.id().clone();

    let mut destination_list = if drag.crosses_columns() {
        sequence.column_view(destination.column).into_tasks()
    } else {
        source_list
    };
    let insert_at = destination.index.min(destination_list.len());
    destination_list.insert(insert_at, moved);
    let projected_column = destination_list
        .into_iter()
        .map(|task| task.id().clone())
        .collect();

    Ok(Reordered {
        sequence: sequence.with_status(&task_id, destination.column),
        task_move: Some(TaskMove {
            task_id,
            from: source.column,
            to: destination.column,
            projected_column,
        }),
    })
}
