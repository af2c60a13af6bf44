//! Status write-back to the store after an optimistic board update.

use crate::board::{
    domain::{TaskId, TaskStatus},
    ports::{StatusUpdate, StoreError, TaskStore},
    services::SyncPolicy,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

/// Error returned when the store rejects a status write.
///
/// The board state is never rolled back on this error; it stays diverged
/// from the store until the next load.
#[derive(Debug, Clone, Error)]
#[error("error updating status of task {task_id} to '{status}': {source}")]
pub struct SyncError {
    /// Task whose status was being written.
    pub task_id: TaskId,
    /// Status the board had already applied.
    pub status: TaskStatus,
    /// Underlying store failure.
    pub source: StoreError,
}

/// Writes a single task's status to the store.
pub struct PersistenceSync<S>
where
    S: TaskStore,
{
    store: Arc<S>,
    collection: String,
}

impl<S> Clone for PersistenceSync<S>
where
    S: TaskStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            collection: self.collection.clone(),
        }
    }
}

impl<S> PersistenceSync<S>
where
    S: TaskStore,
{
    /// Creates a writer for `collection`.
    #[must_use]
    pub fn new(store: Arc<S>, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    /// Sends `{status}` for one task. There is no retry and no timeout.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError`] wrapping the store failure.
    pub async fn sync_status(&self, task_id: &TaskId, status: TaskStatus) -> Result<(), SyncError> {
        self.store
            .update_fields(&self.collection, task_id, StatusUpdate::new(status))
            .await
            .map_err(|source| SyncError {
                task_id: task_id.clone(),
                status,
                source,
            })?;
        tracing::debug!(task_id = %task_id, status = %status, "task status synced");
        Ok(())
    }
}

enum SyncCommand {
    Write { task_id: TaskId, status: TaskStatus },
    Flush(oneshot::Sender<()>),
}

/// Error returned when a dispatcher is created outside a Tokio runtime.
#[derive(Debug, Clone, Error)]
#[error("status sync needs a Tokio runtime: {0}")]
pub struct RuntimeUnavailable(String);

enum DispatchMode<S>
where
    S: TaskStore + 'static,
{
    Queued(mpsc::UnboundedSender<SyncCommand>),
    Detached {
        sync: PersistenceSync<S>,
        runtime: Handle,
        in_flight: Vec<JoinHandle<()>>,
    },
}

/// Fire-and-forget front end for [`PersistenceSync`].
///
/// Failures are logged and counted, never returned to the caller. A write
/// that has been dispatched keeps running after the dispatcher is dropped.
pub struct SyncDispatcher<S>
where
    S: TaskStore + 'static,
{
    mode: DispatchMode<S>,
    failures: Arc<AtomicUsize>,
}

impl<S> SyncDispatcher<S>
where
    S: TaskStore + 'static,
{
    /// Creates a dispatcher following `policy` on the current Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeUnavailable`] when called outside a Tokio runtime.
    pub fn new(sync: PersistenceSync<S>, policy: SyncPolicy) -> Result<Self, RuntimeUnavailable> {
        let runtime = Handle::try_current().map_err(|err| RuntimeUnavailable(err.to_string()))?;
        let failures = Arc::new(AtomicUsize::new(0));
        let mode = match policy {
            SyncPolicy::Queued => {
                let (sender, receiver) = mpsc::unbounded_channel();
                runtime.spawn(run_queue(sync, receiver, Arc::clone(&failures)));
                DispatchMode::Queued(sender)
            }
            SyncPolicy::Detached => DispatchMode::Detached {
                sync,
                runtime,
                in_flight: Vec::new(),
            },
        };
        Ok(Self { mode, failures })
    }

    /// Schedules a status write and returns without waiting for it.
    pub fn dispatch(&mut self, task_id: TaskId, status: TaskStatus) {
        match &mut self.mode {
            DispatchMode::Queued(sender) => {
                if sender.send(SyncCommand::Write { task_id, status }).is_err() {
                    self.failures.fetch_add(1, Ordering::Relaxed);
                    tracing::error!(status = %status, "sync worker stopped, status write dropped");
                }
            }
            DispatchMode::Detached {
                sync,
                runtime,
                in_flight,
            } => {
                in_flight.retain(|write| !write.is_finished());
                let sync = sync.clone();
                let failures = Arc::clone(&self.failures);
                in_flight.push(runtime.spawn(async move {
                    report(sync.sync_status(&task_id, status).await, &failures);
                }));
            }
        }
    }

    /// Waits until every write dispatched so far has finished.
    pub async fn flush(&mut self) {
        match &mut self.mode {
            DispatchMode::Queued(sender) => {
                let (done, finished) = oneshot::channel();
                if sender.send(SyncCommand::Flush(done)).is_ok() {
                    finished.await.ok();
                }
            }
            DispatchMode::Detached { in_flight, .. } => {
                for write in std::mem::take(in_flight) {
                    write.await.ok();
                }
            }
        }
    }

    /// Returns how many writes have failed since the dispatcher was created.
    #[must_use]
    pub fn failed_writes(&self) -> usize {
        self.failures.load(Ordering::Relaxed)
    }
}

async fn run_queue<S>(
    sync: PersistenceSync<S>,
    mut receiver: mpsc::UnboundedReceiver<SyncCommand>,
    failures: Arc<AtomicUsize>,
) where
    S: TaskStore + 'static,
{
    while let Some(command) = receiver.recv().await {
        match command {
            SyncCommand::Write { task_id, status } => {
                report(sync.sync_status(&task_id, status).await, &failures);
            }
            SyncCommand::Flush(done) => {
                done.send(()).ok();
            }
        }
    }
}

fn report(result: Result<(), SyncError>, failures: &AtomicUsize) {
    if let Err(err) = result {
        failures.fetch_add(1, Ordering::Relaxed);
        tracing::error!(
            task_id = %err.task_id,
            status = %err.status,
            error = %err.source,
            "error updating task status"
        );
    }
}
