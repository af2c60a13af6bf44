//! Taskboard: the reorder core of a kanban board.
//!
//! This crate holds the part of a kanban board that has invariants worth
//! testing: the ordered task sequence, the status columns derived from it,
//! the engine that turns a drag gesture into the next arrangement, and the
//! write-back of status changes to a document store.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the backing store
//! - **Adapters**: Concrete implementations of ports
//! - **Services**: Loading, synchronisation and the board controller
//!
//! Rendering is left to the host application, which subscribes to the board
//! state and re-reads the column views whenever it is notified.
//!
//! # Modules
//!
//! - [`board`]: Task board state, reordering and store synchronisation

pub mod board;
