//! Task record and its workflow status.

use super::{ParsePriorityError, ParseTaskStatusError, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow stage of a task, doubling as its column on the board.
///
/// Any status may follow any other; a drag to a column is the only way a
/// status changes and there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Work has not started.
    #[serde(rename = "To Do")]
    ToDo,
    /// Work is under way.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Work is finished.
    #[serde(rename = "Done")]
    Done,
}

impl TaskStatus {
    /// Every status, in the order the columns appear on the board.
    pub const ALL: [Self; 3] = [Self::ToDo, Self::InProgress, Self::Done];

    /// Returns the label used both on the column header and in the store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Parses a status exactly as the store spells it.
    ///
    /// Unlike [`TryFrom<&str>`], no trimming or case folding is applied, so
    /// a record holding `"to do"` is rejected rather than filed under To Do.
    ///
    /// # Errors
    ///
    /// Returns [`ParseTaskStatusError`] for anything but a canonical label.
    pub fn from_label(label: &str) -> Result<Self, ParseTaskStatusError> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == label)
            .ok_or_else(|| ParseTaskStatusError(label.to_owned()))
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "to do" => Ok(Self::ToDo),
            "in progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Low priority.
    Low,
    /// Medium priority.
    Medium,
    /// High priority.
    High,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Parses a priority exactly as the store spells it.
    ///
    /// # Errors
    ///
    /// Returns [`ParsePriorityError`] for anything but a canonical label.
    pub fn from_label(label: &str) -> Result<Self, ParsePriorityError> {
        [Self::Low, Self::Medium, Self::High]
            .into_iter()
            .find(|priority| priority.as_str() == label)
            .ok_or_else(|| ParsePriorityError(label.to_owned()))
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameter object carrying every task attribute except its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskData {
    /// Task title.
    pub title: String,
    /// Free-form task description.
    pub description: String,
    /// Task date, kept verbatim as the store provides it.
    pub date: String,
    /// Task priority.
    pub priority: Priority,
    /// Current workflow status.
    pub status: TaskStatus,
}

/// A task card on the board.
///
/// Tasks are created outside the board and loaded wholesale; the board only
/// ever rewrites a task's status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    date: String,
    priority: Priority,
    status: TaskStatus,
}

impl Task {
    /// Builds a task from its store identifier and attributes.
    #[must_use]
    pub fn new(id: TaskId, data: TaskData) -> Self {
        Self {
            id,
            title: data.title,
            description: data.description,
            date: data.date,
            priority: data.priority,
            status: data.status,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task date as stored.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the current workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns a copy of this task with its status replaced.
    #[must_use]
    pub(super) fn with_status(&self, status: TaskStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}
