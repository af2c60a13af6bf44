//! Drag gesture outcome passed to the reorder engine.

use super::TaskStatus;
use serde::{Deserialize, Serialize};

/// A column and a column-relative index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DragLocation {
    /// Column the location refers to.
    pub column: TaskStatus,
    /// Position inside the column view.
    pub index: usize,
}

impl DragLocation {
    /// Creates a location.
    #[must_use]
    pub const fn new(column: TaskStatus, index: usize) -> Self {
        Self { column, index }
    }
}

/// Result of a drag gesture that ended over a column.
///
/// A drop outside every column is represented by `None` at the call site,
/// never by a sentinel value here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DragOutcome {
    /// Where the card was picked up.
    pub source: DragLocation,
    /// Where the card was dropped.
    pub destination: DragLocation,
}

impl DragOutcome {
    /// Creates an outcome from its two locations.
    #[must_use]
    pub const fn new(source: DragLocation, destination: DragLocation) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Shorthand for building an outcome from raw columns and indices.
    #[must_use]
    pub const fn between(
        source_column: TaskStatus,
        source_index: usize,
        destination_column: TaskStatus,
        destination_index: usize,
    ) -> Self {
        Self::new(
            DragLocation::new(source_column, source_index),
            DragLocation::new(destination_column, destination_index),
        )
    }

    /// Returns `true` when the card was dropped where it was picked up.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.source == self.destination
    }

    /// Returns `true` when the card changes column.
    #[must_use]
    pub fn crosses_columns(&self) -> bool {
        self.source.column != self.destination.column
    }
}
