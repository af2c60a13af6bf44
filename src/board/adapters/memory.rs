//! In-memory document store for board tests and local runs.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::board::{
    domain::{Task, TaskId},
    ports::{
        RawTaskRecord, StatusUpdate, StoreError, StoreResult, StoredRecord, TaskStore, encode_task,
    },
};

/// A status write the store accepted, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedWrite {
    /// Collection written to.
    pub collection: String,
    /// Record identifier.
    pub id: TaskId,
    /// Fields merged into the record.
    pub update: StatusUpdate,
}

/// Thread-safe in-memory document store.
///
/// Records keep insertion order within a collection. Reads and writes can be
/// made to fail on demand to exercise the board's error paths.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    collections: HashMap<String, Vec<StoredRecord>>,
    writes: Vec<RecordedWrite>,
    read_failure: Option<String>,
    write_failure: Option<String>,
}

fn backend_failure(err: impl ToString) -> StoreError {
    StoreError::unavailable(std::io::Error::other(err.to_string()))
}

impl InMemoryTaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record under a freshly generated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the store lock is poisoned.
    pub fn insert(&self, collection: &str, record: RawTaskRecord) -> StoreResult<TaskId> {
        let id = TaskId::new(Uuid::new_v4().to_string())
            .map_err(|err| StoreError::Rejected(err.to_string()))?;
        self.insert_with_id(collection, id.clone(), record)?;
        Ok(id)
    }

    /// Adds a record under a caller-chosen identifier, replacing any record
    /// already stored under it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the store lock is poisoned.
    pub fn insert_with_id(
        &self,
        collection: &str,
        id: TaskId,
        record: RawTaskRecord,
    ) -> StoreResult<()> {
        let mut state = self.state.write().map_err(backend_failure)?;
        let records = state.collections.entry(collection.to_owned()).or_default();
        match records.iter_mut().find(|stored| stored.id == id) {
            Some(stored) => stored.record = record,
            None => records.push(StoredRecord::new(id, record)),
        }
        Ok(())
    }

    /// Adds every task under its own identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the store lock is poisoned.
    pub fn insert_tasks<'a>(
        &self,
        collection: &str,
        tasks: impl IntoIterator<Item = &'a Task>,
    ) -> StoreResult<()> {
        for task in tasks {
            self.insert_with_id(collection, task.id().clone(), encode_task(task))?;
        }
        Ok(())
    }

    /// Returns the record stored under `id`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the store lock is poisoned.
    pub fn record(&self, collection: &str, id: &TaskId) -> StoreResult<Option<RawTaskRecord>> {
        let state = self.state.read().map_err(backend_failure)?;
        Ok(state.collections.get(collection).and_then(|records| {
            records
                .iter()
                .find(|stored| &stored.id == id)
                .map(|stored| stored.record.clone())
        }))
    }

    /// Returns every accepted status write, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the store lock is poisoned.
    pub fn writes(&self) -> StoreResult<Vec<RecordedWrite>> {
        let state = self.state.read().map_err(backend_failure)?;
        Ok(state.writes.clone())
    }

    /// Makes every subsequent read fail with `message`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the store lock is poisoned.
    pub fn fail_reads(&self, message: impl Into<String>) -> StoreResult<()> {
        let mut state = self.state.write().map_err(backend_failure)?;
        state.read_failure = Some(message.into());
        Ok(())
    }

    /// Makes every subsequent write fail with `message`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the store lock is poisoned.
    pub fn fail_writes(&self, message: impl Into<String>) -> StoreResult<()> {
        let mut state = self.state.write().map_err(backend_failure)?;
        state.write_failure = Some(message.into());
        Ok(())
    }

    /// Clears injected read and write failures.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the store lock is poisoned.
    pub fn recover(&self) -> StoreResult<()> {
        let mut state = self.state.write().map_err(backend_failure)?;
        state.read_failure = None;
        state.write_failure = None;
        Ok(())
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn read_all(&self, collection: &str) -> StoreResult<Vec<StoredRecord>> {
        let state = self.state.read().map_err(backend_failure)?;
        if let Some(message) = &state.read_failure {
            return Err(backend_failure(message));
        }
        Ok(state
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn update_fields(
        &self,
        collection: &str,
        id: &TaskId,
        update: StatusUpdate,
    ) -> StoreResult<()> {
        let mut state = self.state.write().map_err(backend_failure)?;
        if let Some(message) = &state.write_failure {
            return Err(StoreError::Rejected(message.clone()));
        }

        let stored = state
            .collections
            .get_mut(collection)
            .and_then(|records| records.iter_mut().find(|stored| &stored.id == id))
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        stored.record.insert(
            "status".to_owned(),
            Value::from(update.status.as_str()),
        );

        state.writes.push(RecordedWrite {
            collection: collection.to_owned(),
            id: id.clone(),
            update,
        });
        Ok(())
    }
}
