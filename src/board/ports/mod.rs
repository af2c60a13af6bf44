//! Port contracts for the board's backing store.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod record;
pub mod store;

pub use record::{DecodeError, DecodeFailure, RawTaskRecord, decode_task, encode_task};
pub use store::{StatusUpdate, StoreError, StoreResult, StoredRecord, TaskStore};

#[cfg(test)]
pub use store::MockTaskStore;
