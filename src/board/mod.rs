//! Kanban board management for Taskboard.
//!
//! The board loads every task from a document store once per mount, keeps
//! them in a single ordered sequence, and derives one column per status from
//! that sequence. Dropping a card computes the next sequence with the pure
//! reorder engine, applies it optimistically, and pushes the moved task's
//! status back to the store without waiting for the write. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
