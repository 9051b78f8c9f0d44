//! Backend trait for record persistence

use crate::Result;
use async_trait::async_trait;
use crud_types::{DataMode, NewRecord, Record, RecordPatch, Table};

/// Record store addressed by table.
///
/// "Not found" is part of the normal result shape: `get` and `update`
/// return `None`, `delete` returns `false`. Errors are reserved for
/// operational failures.
#[async_trait]
pub trait Backend: Send + Sync {
    fn mode(&self) -> DataMode;

    async fn list(&self, table: Table) -> Result<Vec<Record>>;

    async fn get(&self, table: Table, id: &str) -> Result<Option<Record>>;

    async fn create(&self, input: NewRecord) -> Result<Record>;

    async fn update(&self, id: &str, patch: RecordPatch) -> Result<Option<Record>>;

    async fn delete(&self, table: Table, id: &str) -> Result<bool>;

    /// Check that the backend is reachable
    async fn health(&self) -> Result<()>;
}
