//! Observable board state.

use super::{ColumnView, TaskSequence, TaskStatus};
use std::fmt;

type Listener = Box<dyn Fn(&TaskSequence) + Send + Sync>;

/// Handle returned by [`BoardState::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Holder of the board's single task sequence.
///
/// The sequence only changes wholesale through [`BoardState::replace`]; each
/// replacement notifies every registered listener so a renderer can re-read
/// the column views.
#[derive(Default)]
pub struct BoardState {
    sequence: TaskSequence,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl BoardState {
    /// Creates a board state over an initial sequence.
    #[must_use]
    pub fn new(sequence: TaskSequence) -> Self {
        Self {
            sequence,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Returns the current task sequence.
    #[must_use]
    pub const fn sequence(&self) -> &TaskSequence {
        &self.sequence
    }

    /// Returns the tasks in one column, in board order.
    #[must_use]
    pub fn column_view(&self, status: TaskStatus) -> ColumnView<'_> {
        self.sequence.column_view(status)
    }

    /// Returns every column view in board order.
    pub fn columns(&self) -> impl Iterator<Item = ColumnView<'_>> {
        self.sequence.columns()
    }

    /// Swaps in a new sequence and notifies listeners.
    pub fn replace(&mut self, next: TaskSequence) {
        self.sequence = next;
        for (_, listener) in &self.listeners {
            listener(&self.sequence);
        }
    }

    /// Registers a listener called after every [`BoardState::replace`].
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&TaskSequence) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` when the id is unknown.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl fmt::Debug for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardState")
            .field("sequence", &self.sequence)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
