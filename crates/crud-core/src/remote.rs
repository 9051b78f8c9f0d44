//! Xano REST client
//!
//! Speaks the backend's fixed contract: `GET/POST /{table}` and
//! `GET/PATCH/DELETE /{table}/{id}` with JSON bodies and an optional bearer
//! token. Any non-2xx response becomes [`CrudError::Remote`].

use crate::config::AppConfig;
use crate::error::{CrudError, Result};
use crate::ports::Backend;
use async_trait::async_trait;
use crud_types::{DataMode, NewRecord, Record, RecordPatch, Table};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as ReqwestClient, Method, Response, Url};
use serde_json::Value;
use tracing::{debug, warn};

pub struct XanoClient {
    http: ReqwestClient,
    base_url: String,
    api_key: Option<String>,
}

impl XanoClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: ReqwestClient::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Create client from validated configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        if config.xano_base_url.trim().is_empty() {
            return Err(CrudError::InvalidConfig(
                "Missing required Xano environment variables: XANO_BASE_URL".to_string(),
            ));
        }
        let client = Self::new(config.xano_base_url.trim());
        client.endpoint(&[])?;
        Ok(match config.api_key() {
            Some(key) => client.with_api_key(key),
            None => client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `base_url` followed by `segments`, each encoded as a single path
    /// segment so `/`, `?` and `#` inside an id never leave it
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            CrudError::InvalidConfig(format!("Invalid XANO_BASE_URL {}: {}", self.base_url, e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                CrudError::InvalidConfig(format!("Invalid XANO_BASE_URL {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Dot segments would address the table itself, so they are refused
    fn record_url(&self, table: Table, id: &str) -> Result<Url> {
        if matches!(id, "" | "." | "..") {
            return Err(CrudError::InvalidId(id.to_string()));
        }
        self.endpoint(&[table.as_str(), id])
    }

    async fn send(&self, method: Method, url: Url, body: Option<Value>) -> Result<Response> {
        debug!("Xano {} {}", method, url);

        let mut request = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(remote_error(status.as_u16(), &body));
        }
        Ok(response)
    }

    async fn request(&self, method: Method, url: Url, body: Option<Value>) -> Result<Value> {
        let response = self.send(method, url, body).await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    pub async fn get_all(&self, table: Table) -> Result<Vec<Value>> {
        let url = self.endpoint(&[table.as_str()])?;
        let value = self.request(Method::GET, url, None).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn get_by_id(&self, table: Table, id: &str) -> Result<Value> {
        let url = self.record_url(table, id)?;
        self.request(Method::GET, url, None).await
    }

    pub async fn create(&self, input: &NewRecord) -> Result<Value> {
        let url = self.endpoint(&[input.table().as_str()])?;
        let body = serde_json::to_value(input)?;
        self.request(Method::POST, url, Some(body)).await
    }

    /// Xano uses PATCH instead of PUT
    pub async fn update(&self, id: &str, patch: &RecordPatch) -> Result<Value> {
        let url = self.record_url(patch.table(), id)?;
        let body = serde_json::to_value(patch)?;
        self.request(Method::PATCH, url, Some(body)).await
    }

    /// Returns `false` when the record does not exist
    pub async fn delete(&self, table: Table, id: &str) -> Result<bool> {
        let result = match self.record_url(table, id) {
            Ok(url) => self.send(Method::DELETE, url, None).await.map(|_| ()),
            Err(e) => Err(e),
        };
        match result {
            Ok(()) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub async fn health_check(&self) -> Result<()> {
        let url = self.endpoint(&[Table::Category.as_str()])?;
        self.send(Method::GET, url, None).await.map(|_| ())
    }
}

/// Build an error from a failed response, preferring the body's
/// `message` and `code` fields
fn remote_error(status: u16, body: &str) -> CrudError {
    let error: Value = serde_json::from_str(body).unwrap_or_default();
    CrudError::Remote {
        status,
        code: error["code"]
            .as_str()
            .unwrap_or("HTTP_ERROR")
            .to_string(),
        message: error["message"]
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", status)),
    }
}

#[async_trait]
impl Backend for XanoClient {
    fn mode(&self) -> DataMode {
        DataMode::Xano
    }

    async fn list(&self, table: Table) -> Result<Vec<Record>> {
        self.get_all(table)
            .await?
            .into_iter()
            .map(|value| Record::from_value(table, value).map_err(CrudError::from))
            .collect()
    }

    async fn get(&self, table: Table, id: &str) -> Result<Option<Record>> {
        match self.get_by_id(table, id).await {
            Ok(value) => Ok(Some(Record::from_value(table, value)?)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn create(&self, input: NewRecord) -> Result<Record> {
        let table = input.table();
        let value = XanoClient::create(self, &input).await?;
        Ok(Record::from_value(table, value)?)
    }

    async fn update(&self, id: &str, patch: RecordPatch) -> Result<Option<Record>> {
        let table = patch.table();
        match XanoClient::update(self, id, &patch).await {
            Ok(value) => Ok(Some(Record::from_value(table, value)?)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn delete(&self, table: Table, id: &str) -> Result<bool> {
        XanoClient::delete(self, table, id).await
    }

    async fn health(&self) -> Result<()> {
        self.health_check().await.map_err(|e| {
            warn!("Xano health check failed: {}", e);
            e
        })
    }
}
