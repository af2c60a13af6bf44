//! Shared test helpers for in-memory store integration tests.

use rstest::fixture;
use serde_json::{Value, json};
use taskboard::board::{
    adapters::memory::InMemoryTaskStore,
    domain::{TaskId, TaskStatus},
    ports::RawTaskRecord,
};

/// Collection used by every integration test.
pub const COLLECTION: &str = "tasks";

/// Builds a raw task document the way a store would hold it.
///
/// # Panics
///
/// Panics if the literal is not a JSON object, which would be a bug in the
/// helper itself.
#[must_use]
pub fn raw_task(title: &str, priority: &str, status: &str) -> RawTaskRecord {
    match json!({
        "title": title,
        "description": format!("{title} in detail"),
        "date": "2024-05-20",
        "priority": priority,
        "status": status,
    }) {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

/// A store seeded with store-assigned ids, returned alongside those ids.
pub struct SeededStore {
    /// The store.
    pub store: InMemoryTaskStore,
    /// Ids in insertion order.
    pub ids: Vec<TaskId>,
}

impl SeededStore {
    /// Returns the id inserted at `position`.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer tasks were seeded.
    pub fn id(&self, position: usize) -> Result<&TaskId, eyre::Report> {
        self.ids
            .get(position)
            .ok_or_else(|| eyre::eyre!("no task seeded at position {position}"))
    }

    /// Reads the status stored for `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is missing or has no string status.
    pub fn stored_status(&self, id: &TaskId) -> Result<TaskStatus, eyre::Report> {
        let record = self
            .store
            .record(COLLECTION, id)?
            .ok_or_else(|| eyre::eyre!("record {id} missing"))?;
        let raw = record
            .get("status")
            .and_then(Value::as_str)
            .ok_or_else(|| eyre::eyre!("record {id} has no status"))?;
        Ok(TaskStatus::try_from(raw)?)
    }
}

/// Store with two "To Do" tasks, one "In Progress" and one "Done".
///
/// # Panics
///
/// Panics if seeding the in-memory store fails.
#[fixture]
pub fn seeded() -> SeededStore {
    let store = InMemoryTaskStore::new();
    let ids = [
        raw_task("Draft roadmap", "High", "To Do"),
        raw_task("Book venue", "Low", "To Do"),
        raw_task("Review budget", "Medium", "In Progress"),
        raw_task("Send invites", "Medium", "Done"),
    ]
    .into_iter()
    .map(|record| store.insert(COLLECTION, record))
    .collect::<Result<Vec<_>, _>>()
    .expect("seed in-memory store");
    SeededStore { store, ids }
}
