//! Store port: read every task record, update one record's fields.

use super::RawTaskRecord;
use crate::board::domain::{TaskId, TaskStatus};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// A raw record together with the identifier the store keeps it under.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRecord {
    /// Store-assigned identifier.
    pub id: TaskId,
    /// Undecoded record fields.
    pub record: RawTaskRecord,
}

impl StoredRecord {
    /// Pairs an identifier with its record.
    #[must_use]
    pub const fn new(id: TaskId, record: RawTaskRecord) -> Self {
        Self { id, record }
    }
}

/// Partial record sent when a task changes column.
///
/// The board never writes anything but the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    /// New workflow status.
    pub status: TaskStatus,
}

impl StatusUpdate {
    /// Creates an update for `status`.
    #[must_use]
    pub const fn new(status: TaskStatus) -> Self {
        Self { status }
    }
}

/// Document store contract required by the board.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Reads every record of a collection, in store order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the store cannot be reached
    /// or rejects the read.
    async fn read_all(&self, collection: &str) -> StoreResult<Vec<StoredRecord>>;

    /// Merges `update` into the record stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no record has that identifier,
    /// [`StoreError::Rejected`] when the store refuses the write, or
    /// [`StoreError::Unavailable`] when it cannot be reached.
    async fn update_fields(
        &self,
        collection: &str,
        id: &TaskId,
        update: StatusUpdate,
    ) -> StoreResult<()>;
}

/// Errors returned by store implementations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The store could not be reached or failed the request.
    #[error("store unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),

    /// No record exists under the identifier.
    #[error("record not found: {0}")]
    NotFound(TaskId),

    /// The store refused the operation, for example on permissions.
    #[error("request rejected: {0}")]
    Rejected(String),
}

impl StoreError {
    /// Wraps a transport or backend error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
