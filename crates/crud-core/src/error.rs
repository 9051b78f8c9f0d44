//! Error types for CRUD Admin

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CrudError>;

/// Operational failures. "Not found" is never an error at this layer;
/// lookups return `Option` and deletes return `bool`.
#[derive(Error, Debug)]
pub enum CrudError {
    #[error("Unsupported table: {0}")]
    UnsupportedTable(String),

    #[error("Invalid payload for {table}: {message}")]
    InvalidPayload { table: String, message: String },

    /// Id that cannot name a single record, such as `..`
    #[error("Invalid record id: {0:?}")]
    InvalidId(String),

    #[error("Remote error {status} ({code}): {message}")]
    Remote {
        status: u16,
        code: String,
        message: String,
    },

    #[error("Connection failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl CrudError {
    /// HTTP-like status code, when one is known
    pub fn status(&self) -> Option<u16> {
        match self {
            CrudError::Remote { status, .. } => Some(*status),
            CrudError::Transport(e) => e.status().map(|s| s.as_u16()),
            CrudError::InvalidPayload { .. } => Some(400),
            CrudError::InvalidId(_) => Some(404),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<crud_types::UnknownTable> for CrudError {
    fn from(e: crud_types::UnknownTable) -> Self {
        CrudError::UnsupportedTable(e.0)
    }
}

impl From<config::ConfigError> for CrudError {
    fn from(e: config::ConfigError) -> Self {
        CrudError::Config(e.to_string())
    }
}
