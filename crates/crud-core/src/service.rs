//! CRUD service
//!
//! One entry point over whichever backend was picked at startup. Callers
//! address tables by their string tag and pass raw JSON payloads; the
//! service turns those into typed inputs before touching the backend.

use crate::config::AppConfig;
use crate::error::{CrudError, Result};
use crate::ports::Backend;
use crate::remote::XanoClient;
use crate::storage::MemoryStore;
use crud_types::{DataMode, NewRecord, Record, RecordPatch, Table};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub mode: DataMode,
}

#[derive(Clone)]
pub struct CrudService {
    backend: Arc<dyn Backend>,
}

impl CrudService {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Build the backend selected by `config.data_mode`
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        config.validate()?;
        let backend: Arc<dyn Backend> = match config.data_mode {
            DataMode::Demo if config.seed_demo_data => Arc::new(MemoryStore::with_demo_data()),
            DataMode::Demo => Arc::new(MemoryStore::new()),
            DataMode::Xano => Arc::new(XanoClient::from_config(config)?),
        };
        info!("Data mode: {}", backend.mode());
        Ok(Self::new(backend))
    }

    pub fn mode(&self) -> DataMode {
        self.backend.mode()
    }

    pub async fn list(&self, table: &str) -> Result<Vec<Record>> {
        let table = parse_table(table)?;
        debug!("List {}", table.plural());
        self.backend.list(table).await
    }

    pub async fn get(&self, table: &str, id: &str) -> Result<Option<Record>> {
        let table = parse_table(table)?;
        debug!("Get {} {}", table, id);
        self.backend.get(table, id).await
    }

    /// Create a record. Caller-supplied `id`/`created_at` are discarded.
    pub async fn create(&self, table: &str, data: Value) -> Result<Record> {
        let table = parse_table(table)?;
        let input = NewRecord::from_value(table, data).map_err(|e| invalid(table, e))?;
        let record = self.backend.create(input).await?;
        info!("Created {} {}", table, record.id());
        Ok(record)
    }

    /// Merge the fields present in `data` into an existing record
    pub async fn update(&self, table: &str, id: &str, data: Value) -> Result<Option<Record>> {
        let table = parse_table(table)?;
        let patch = RecordPatch::from_value(table, data).map_err(|e| invalid(table, e))?;
        let record = self.backend.update(id, patch).await?;
        match &record {
            Some(_) => info!("Updated {} {}", table, id),
            None => debug!("Update skipped, {} {} not found", table, id),
        }
        Ok(record)
    }

    pub async fn delete(&self, table: &str, id: &str) -> Result<bool> {
        let table = parse_table(table)?;
        let removed = self.backend.delete(table, id).await?;
        if removed {
            info!("Deleted {} {}", table, id);
        }
        Ok(removed)
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        self.backend.health().await?;
        Ok(HealthStatus {
            status: "connected".to_string(),
            mode: self.backend.mode(),
        })
    }
}

fn parse_table(tag: &str) -> Result<Table> {
    Ok(tag.parse::<Table>()?)
}

fn invalid(table: Table, e: serde_json::Error) -> CrudError {
    CrudError::InvalidPayload {
        table: table.to_string(),
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;
    use tokio_test::{assert_err, assert_ok};

    fn demo() -> CrudService {
        CrudService::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_unsupported_table() {
        let service = demo();
        let err = service.list("user").await.unwrap_err();
        assert!(matches!(err, CrudError::UnsupportedTable(ref t) if t == "user"));
        assert_err!(service.get("users", "1").await);
        assert_err!(service.create("", json!({})).await);
        assert_err!(service.delete("Post", "1").await);
    }

    #[tokio::test]
    async fn test_category_scenario() {
        let service = demo();

        let created = service
            .create(
                "category",
                json!({ "name": "Tech", "description": "d", "color": "#3B82F6" }),
            )
            .await
            .unwrap();
        let id = created.id().to_string();
        let category = created.as_category().unwrap();
        assert!(!id.is_empty());
        assert!(category.created_at.timestamp_millis() > 0);

        let listed = service.list("category").await.unwrap();
        assert!(listed.contains(&created));

        assert!(service.delete("category", &id).await.unwrap());
        assert_eq!(service.get("category", &id).await.unwrap(), None);
        assert!(!service.delete("category", &id).await.unwrap());
    }

    #[tokio::test]
    async fn test_create_ignores_caller_identity_fields() {
        let service = demo();
        let record = service
            .create(
                "post",
                json!({
                    "id": "999",
                    "created_at": 0,
                    "title": "Hello",
                    "content": "World",
                    "user_id": "1"
                }),
            )
            .await
            .unwrap();

        assert_ne!(record.id(), "999");
        assert!(record.as_post().unwrap().created_at.timestamp_millis() > 0);
        assert_eq!(service.get("post", "999").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_ignores_caller_identity_fields() {
        let service = demo();
        let created = service
            .create("post", json!({ "title": "A", "user_id": "1" }))
            .await
            .unwrap();
        let before = created.as_post().unwrap().clone();

        let updated = service
            .update(
                "post",
                &before.id,
                json!({ "id": "77", "created_at": 5, "published": true }),
            )
            .await
            .unwrap()
            .unwrap();
        let after = updated.as_post().unwrap();

        assert!(after.published);
        assert_eq!(after.id, before.id);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.title, before.title);
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_not_found() {
        let service = demo();
        service
            .create("category", json!({ "name": "Tech" }))
            .await
            .unwrap();

        let result = service
            .update("category", "not-a-number", json!({ "name": "x" }))
            .await;
        assert_eq!(assert_ok!(result), None);
        assert_eq!(service.get("category", "abc").await.unwrap(), None);
        assert!(!service.delete("category", "abc").await.unwrap());
    }

    #[tokio::test]
    async fn test_invalid_payload() {
        let service = demo();
        let err = service
            .create("post", json!({ "content": "missing title" }))
            .await
            .unwrap_err();
        assert!(matches!(err, CrudError::InvalidPayload { .. }));
        assert_eq!(err.status(), Some(400));
        assert!(service.list("post").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_from_config_demo_seeded() {
        let service = CrudService::from_config(&AppConfig::default()).unwrap();
        assert_eq!(service.mode(), DataMode::Demo);
        assert_eq!(service.list("category").await.unwrap().len(), 4);

        let empty = CrudService::from_config(&AppConfig {
            seed_demo_data: false,
            ..Default::default()
        })
        .unwrap();
        assert!(empty.list("post").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_health() {
        let health = demo().health().await.unwrap();
        assert_eq!(
            health,
            HealthStatus {
                status: "connected".to_string(),
                mode: DataMode::Demo,
            }
        );
    }

    /// Backend that records the calls it receives
    #[derive(Default)]
    struct Recording {
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Backend for Recording {
        fn mode(&self) -> DataMode {
            DataMode::Xano
        }

        async fn list(&self, table: Table) -> Result<Vec<Record>> {
            self.calls.lock().unwrap().push(format!("list {}", table));
            Ok(vec![])
        }

        async fn get(&self, table: Table, id: &str) -> Result<Option<Record>> {
            self.calls.lock().unwrap().push(format!("get {} {}", table, id));
            Ok(None)
        }

        async fn create(&self, input: NewRecord) -> Result<Record> {
            Err(CrudError::Remote {
                status: 500,
                code: "HTTP_ERROR".to_string(),
                message: format!("cannot create {}", input.table()),
            })
        }

        async fn update(&self, id: &str, patch: RecordPatch) -> Result<Option<Record>> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("update {} {}", patch.table(), id));
            Ok(None)
        }

        async fn delete(&self, table: Table, id: &str) -> Result<bool> {
            self.calls.lock().unwrap().push(format!("delete {} {}", table, id));
            Ok(false)
        }

        async fn health(&self) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_ids_are_forwarded_verbatim() {
        let backend = Arc::new(Recording::default());
        let service = CrudService::new(backend.clone());

        service.list("post").await.unwrap();
        service
            .get("category", "3f2c7b2e-8a1d-4c55-9a57-0c7f3f1a2b44")
            .await
            .unwrap();
        service.update("post", "abc", json!({})).await.unwrap();
        service.delete("category", "12").await.unwrap();

        assert_eq!(
            *backend.calls.lock().unwrap(),
            vec![
                "list post",
                "get category 3f2c7b2e-8a1d-4c55-9a57-0c7f3f1a2b44",
                "update post abc",
                "delete category 12",
            ]
        );

        let err = service
            .create("post", json!({ "title": "t", "user_id": "u" }))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(service.mode(), DataMode::Xano);
    }
}
