//! Service that reads the full task set once per board mount.

use crate::board::{
    domain::{BoardDomainError, Task, TaskSequence},
    ports::{DecodeError, StoreError, TaskStore, decode_task},
};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while loading the board.
///
/// The message carries the underlying cause so the host can show it as is.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    /// The store read failed.
    #[error("error fetching tasks: {0}")]
    Store(#[from] StoreError),
    /// A record did not have the task shape.
    #[error("error fetching tasks: {0}")]
    Decode(#[from] DecodeError),
    /// The records violate a board invariant.
    #[error("error fetching tasks: {0}")]
    Domain(#[from] BoardDomainError),
}

/// Reads and decodes every task of a collection.
#[derive(Debug)]
pub struct TaskLoader<S>
where
    S: TaskStore,
{
    store: Arc<S>,
    collection: String,
}

impl<S> TaskLoader<S>
where
    S: TaskStore,
{
    /// Creates a loader over `collection`.
    #[must_use]
    pub fn new(store: Arc<S>, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    /// Returns the collection this loader reads.
    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Loads every task in store order. There is no retry.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Store`] when the read fails and
    /// [`LoadError::Decode`] on the first malformed record.
    pub async fn load(&self) -> Result<Vec<Task>, LoadError> {
        let records = self.store.read_all(&self.collection).await?;
        let tasks = records
            .iter()
            .map(|stored| decode_task(&stored.id, &stored.record))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(
            collection = %self.collection,
            count = tasks.len(),
            "loaded tasks"
        );
        Ok(tasks)
    }

    /// Loads every task into a validated sequence.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`TaskLoader::load`], or [`LoadError::Domain`]
    /// when two records share an identifier.
    pub async fn load_sequence(&self) -> Result<TaskSequence, LoadError> {
        let tasks = self.load().await?;
        Ok(TaskSequence::new(tasks)?)
    }
}
