//! Adapter implementations for board store ports.

pub mod memory;
