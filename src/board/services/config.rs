//! Board configuration.

use serde::Deserialize;

/// Store collection the board reads from when none is configured.
pub const DEFAULT_COLLECTION: &str = "tasks";

/// How status writes are dispatched after a drop.
///
/// Writes are never awaited by the caller and never retried. The policies
/// differ only in how concurrent writes are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncPolicy {
    /// Writes run one after another on a single background worker, so they
    /// reach the store in drop order and the last drop wins.
    #[default]
    Queued,
    /// Every write runs as its own background task. Overlapping writes may
    /// land in any order and the last one to complete wins.
    Detached,
}

/// Configuration for a mounted board.
///
/// # Examples
///
/// ```
/// use taskboard::board::services::{BoardConfig, SyncPolicy};
///
/// let config = BoardConfig::default();
/// assert_eq!(config.collection, "tasks");
/// assert_eq!(config.sync_policy, SyncPolicy::Queued);
///
/// let detached = BoardConfig::detached();
/// assert_eq!(detached.sync_policy, SyncPolicy::Detached);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Name of the store collection holding the tasks.
    pub collection: String,
    /// Dispatch policy for status writes.
    pub sync_policy: SyncPolicy,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            collection: DEFAULT_COLLECTION.to_owned(),
            sync_policy: SyncPolicy::default(),
        }
    }
}

impl BoardConfig {
    /// Creates a configuration reading from `collection`.
    #[must_use]
    pub fn for_collection(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            ..Self::default()
        }
    }

    /// Creates a configuration that dispatches every write independently.
    ///
    /// Matches the behaviour of a plain fire-and-forget client.
    #[must_use]
    pub fn detached() -> Self {
        Self {
            sync_policy: SyncPolicy::Detached,
            ..Self::default()
        }
    }

    /// Replaces the sync policy.
    #[must_use]
    pub fn with_sync_policy(mut self, sync_policy: SyncPolicy) -> Self {
        self.sync_policy = sync_policy;
        self
    }
}
