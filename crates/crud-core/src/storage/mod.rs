//! Storage layer
//!
//! The demo backend keeps records in DashMap collections inside the process.
//! Nothing is persisted.

pub mod memory;
pub mod seed;

pub use memory::{Collection, MemoryStore};
