//! Board controller tying loading, reordering and status sync together.

use crate::board::{
    domain::{
        BoardState, DragOutcome, ListenerId, ReorderError, TaskMove, TaskSequence, reorder,
    },
    ports::TaskStore,
    services::{
        BoardConfig, LoadError, PersistenceSync, RuntimeUnavailable, SyncDispatcher, TaskLoader,
    },
};
use std::sync::Arc;
use thiserror::Error;

/// Lifecycle phase of a mounted board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardPhase {
    /// Tasks are being fetched; no columns are available yet.
    Loading,
    /// Tasks are loaded and the board accepts drops.
    Ready,
    /// The load failed; the message is meant for the user.
    Failed(String),
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Loading the tasks failed.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// The drop could not be applied.
    #[error(transparent)]
    Reorder(#[from] ReorderError),
    /// The board was loaded already; a mount loads exactly once.
    #[error("board has already been loaded")]
    AlreadyLoaded,
    /// The board cannot accept drops in its current phase.
    #[error("board is not ready: {0:?}")]
    NotReady(BoardPhase),
    /// The board was created outside a Tokio runtime.
    #[error(transparent)]
    Runtime(#[from] RuntimeUnavailable),
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// A task board mounted over a store.
///
/// Drops are applied to the local state first and written back afterwards;
/// a failed write is logged and the local state is kept.
pub struct KanbanBoard<S>
where
    S: TaskStore + 'static,
{
    loader: TaskLoader<S>,
    sync: SyncDispatcher<S>,
    state: BoardState,
    phase: BoardPhase,
}

impl<S> KanbanBoard<S>
where
    S: TaskStore + 'static,
{
    /// Creates an unloaded board in the [`BoardPhase::Loading`] phase.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Runtime`] when called outside a Tokio runtime.
    pub fn new(store: Arc<S>, config: BoardConfig) -> BoardResult<Self> {
        let loader = TaskLoader::new(Arc::clone(&store), config.collection.clone());
        let sync = SyncDispatcher::new(
            PersistenceSync::new(store, config.collection),
            config.sync_policy,
        )?;
        Ok(Self {
            loader,
            sync,
            state: BoardState::default(),
            phase: BoardPhase::Loading,
        })
    }

    /// Creates a board and loads it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Runtime`] outside a Tokio runtime and
    /// [`BoardError::Load`] when the tasks cannot be loaded.
    pub async fn mount(store: Arc<S>, config: BoardConfig) -> BoardResult<Self> {
        let mut board = Self::new(store, config)?;
        board.load().await?;
        Ok(board)
    }

    /// Loads the tasks and moves the board to [`BoardPhase::Ready`].
    ///
    /// On failure the board moves to [`BoardPhase::Failed`] for good; no
    /// partial board is kept and there is no retry.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::AlreadyLoaded`] outside the loading phase and
    /// [`BoardError::Load`] when the tasks cannot be loaded.
    pub async fn load(&mut self) -> BoardResult<()> {
        if self.phase != BoardPhase::Loading {
            return Err(BoardError::AlreadyLoaded);
        }
        match self.loader.load_sequence().await {
            Ok(sequence) => {
                self.state.replace(sequence);
                self.phase = BoardPhase::Ready;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(
                    collection = %self.loader.collection(),
                    error = %err,
                    "board load failed"
                );
                self.phase = BoardPhase::Failed(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Returns the board's lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> &BoardPhase {
        &self.phase
    }

    /// Returns the observable board state.
    #[must_use]
    pub const fn state(&self) -> &BoardState {
        &self.state
    }

    /// Returns the current task sequence.
    #[must_use]
    pub const fn sequence(&self) -> &TaskSequence {
        self.state.sequence()
    }

    /// Registers a listener notified on every state replacement.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&TaskSequence) + Send + Sync + 'static,
    {
        self.state.subscribe(listener)
    }

    /// Removes a listener.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.state.unsubscribe(id)
    }

    /// Applies a drop to the board.
    ///
    /// `None` stands for a drop outside every column. A drop that moves a
    /// task replaces the state, notifies listeners and dispatches a status
    /// write for the moved task, including when it stays in its column.
    /// The write is not awaited. Returns the move performed, if any.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotReady`] before a successful load and
    /// [`BoardError::Reorder`] when the drag outcome is out of range.
    pub fn on_drag_end(&mut self, drag: Option<DragOutcome>) -> BoardResult<Option<TaskMove>> {
        if self.phase != BoardPhase::Ready {
            return Err(BoardError::NotReady(self.phase.clone()));
        }
        let (next, task_move) = reorder(self.state.sequence(), drag.as_ref())?.into_parts();
        let Some(task_move) = task_move else {
            return Ok(None);
        };

        tracing::debug!(
            task_id = %task_move.task_id(),
            from = %task_move.from(),
            to = %task_move.to(),
            "task moved"
        );
        self.state.replace(next);
        self.sync.dispatch(task_move.task_id().clone(), task_move.to());
        Ok(Some(task_move))
    }

    /// Waits for every status write dispatched so far.
    pub async fn flush(&mut self) {
        self.sync.flush().await;
    }

    /// Returns how many status writes have failed on this board.
    #[must_use]
    pub fn failed_writes(&self) -> usize {
        self.sync.failed_writes()
    }
}
