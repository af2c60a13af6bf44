//! Shared world state for board reorder BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use taskboard::board::{
    adapters::memory::InMemoryTaskStore,
    domain::{TaskMove, TaskSequence},
    services::{BoardConfig, BoardError, KanbanBoard},
};

/// Collection the scenarios seed and read.
pub const COLLECTION: &str = "tasks";

/// Scenario world for board reorder behaviour tests.
pub struct BoardWorld {
    pub store: InMemoryTaskStore,
    pub board: Option<KanbanBoard<InMemoryTaskStore>>,
    pub before_drop: Option<TaskSequence>,
    pub last_load_error: Option<BoardError>,
    pub last_drop_result: Option<Result<Option<TaskMove>, BoardError>>,
}

impl BoardWorld {
    /// Creates a world with an empty store and no board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: InMemoryTaskStore::new(),
            board: None,
            before_drop: None,
            last_load_error: None,
            last_drop_result: None,
        }
    }

    /// Creates an unloaded board over the world's store.
    ///
    /// # Errors
    ///
    /// Returns an error when no Tokio runtime is running.
    pub fn new_board(&self) -> Result<KanbanBoard<InMemoryTaskStore>, BoardError> {
        KanbanBoard::new(Arc::new(self.store.clone()), BoardConfig::default())
    }

    /// Returns the mounted board.
    ///
    /// # Errors
    ///
    /// Returns an error if no board has been created in this scenario.
    pub fn board_mut(&mut self) -> Result<&mut KanbanBoard<InMemoryTaskStore>, eyre::Report> {
        self.board
            .as_mut()
            .ok_or_else(|| eyre::eyre!("missing board in scenario world"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
