//! Application services for board loading, reordering and sync.

mod board;
mod config;
mod loader;
mod sync;

pub use board::{BoardError, BoardPhase, BoardResult, KanbanBoard};
pub use config::{BoardConfig, DEFAULT_COLLECTION, SyncPolicy};
pub use loader::{LoadError, TaskLoader};
pub use sync::{PersistenceSync, RuntimeUnavailable, SyncDispatcher, SyncError};
