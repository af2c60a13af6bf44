//! Raw store records and their validating decode into [`Task`].

use crate::board::domain::{
    ParsePriorityError, ParseTaskStatusError, Priority, Task, TaskData, TaskId, TaskStatus,
};
use serde_json::{Map, Value};
use thiserror::Error;

/// Undecoded task document as the store returns it.
pub type RawTaskRecord = Map<String, Value>;

const TITLE: &str = "title";
const DESCRIPTION: &str = "description";
const DATE: &str = "date";
const PRIORITY: &str = "priority";
const STATUS: &str = "status";

/// Reason a single record could not be decoded.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeFailure {
    /// A required field is absent.
    #[error("missing field '{0}'")]
    MissingField(&'static str),

    /// A field is present but is not a string.
    #[error("field '{0}' must be a string")]
    NotAString(&'static str),

    /// The status field holds an unknown value.
    #[error(transparent)]
    Status(#[from] ParseTaskStatusError),

    /// The priority field holds an unknown value.
    #[error(transparent)]
    Priority(#[from] ParsePriorityError),
}

/// Error returned when a stored record does not have the task shape.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("cannot decode task {task_id}: {failure}")]
pub struct DecodeError {
    /// Identifier of the offending record.
    pub task_id: TaskId,
    /// What was wrong with it.
    pub failure: DecodeFailure,
}

/// Decodes a raw record into a task.
///
/// Fields other than the five task attributes are ignored; the identifier
/// always comes from the store key, never from the record body.
///
/// # Errors
///
/// Returns [`DecodeError`] when a field is missing, is not a string, or
/// holds a status or priority that is not spelled exactly as a canonical
/// label.
pub fn decode_task(id: &TaskId, record: &RawTaskRecord) -> Result<Task, DecodeError> {
    decode_fields(record)
        .map(|data| Task::new(id.clone(), data))
        .map_err(|failure| DecodeError {
            task_id: id.clone(),
            failure,
        })
}

fn decode_fields(record: &RawTaskRecord) -> Result<TaskData, DecodeFailure> {
    Ok(TaskData {
        title: required_str(record, TITLE)?.to_owned(),
        description: required_str(record, DESCRIPTION)?.to_owned(),
        date: required_str(record, DATE)?.to_owned(),
        priority: Priority::from_label(required_str(record, PRIORITY)?)?,
        status: TaskStatus::from_label(required_str(record, STATUS)?)?,
    })
}

fn required_str<'a>(
    record: &'a RawTaskRecord,
    field: &'static str,
) -> Result<&'a str, DecodeFailure> {
    record
        .get(field)
        .ok_or(DecodeFailure::MissingField(field))?
        .as_str()
        .ok_or(DecodeFailure::NotAString(field))
}

/// Encodes a task's attributes as a raw record, without its identifier.
#[must_use]
pub fn encode_task(task: &Task) -> RawTaskRecord {
    let mut record = Map::new();
    record.insert(TITLE.to_owned(), Value::from(task.title()));
    record.insert(DESCRIPTION.to_owned(), Value::from(task.description()));
    record.insert(DATE.to_owned(), Value::from(task.date()));
    record.insert(PRIORITY.to_owned(), Value::from(task.priority().as_str()));
    record.insert(STATUS.to_owned(), Value::from(task.status().as_str()));
    record
}
