//! CRUD Core
//!
//! Data access for the admin: an in-memory demo store and a Xano REST
//! client behind one [`Backend`] trait, and the [`CrudService`] dispatcher
//! that callers use without knowing which backend is active.

pub mod config;
pub mod error;
pub mod ports;
pub mod remote;
pub mod service;
pub mod storage;

pub use crate::config::AppConfig;
pub use crate::error::{CrudError, Result};
pub use crate::ports::Backend;
pub use crate::remote::XanoClient;
pub use crate::service::{CrudService, HealthStatus};
pub use crate::storage::MemoryStore;

pub use crud_types::*;
