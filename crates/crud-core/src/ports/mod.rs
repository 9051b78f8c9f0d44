//! Ports (traits) for data access

pub mod backend;

pub use backend::Backend;
