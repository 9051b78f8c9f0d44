//! CRUD Types - Pure record definitions
//!
//! This crate contains only data types with no async runtime dependencies.
//! Both the in-memory demo store and the remote Xano backend speak these
//! shapes, so callers never see which backend produced a record.

pub mod category;
mod ids;
pub mod post;
pub mod record;

pub use category::*;
pub use post::*;
pub use record::*;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Entity kinds managed by the admin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Table {
    Post,
    Category,
}

impl Table {
    pub const ALL: [Table; 2] = [Table::Post, Table::Category];

    /// Path segment used both by the local API and the remote backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Post => "post",
            Table::Category => "category",
        }
    }

    /// Human label, e.g. for "Post not found"
    pub fn label(&self) -> &'static str {
        match self {
            Table::Post => "Post",
            Table::Category => "Category",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            Table::Post => "posts",
            Table::Category => "categories",
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag that does not name a managed entity kind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported table: {0}")]
pub struct UnknownTable(pub String);

impl FromStr for Table {
    type Err = UnknownTable;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "post" => Ok(Table::Post),
            "category" => Ok(Table::Category),
            other => Err(UnknownTable(other.to_string())),
        }
    }
}

/// Which backend serves the data, fixed at process start
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataMode {
    #[default]
    Demo,
    Xano,
}

impl std::fmt::Display for DataMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataMode::Demo => write!(f, "demo"),
            DataMode::Xano => write!(f, "xano"),
        }
    }
}

/// A stored record kind with its create and partial-update inputs.
///
/// `build` is the only way a record comes into existence locally: the
/// identifier and creation time are always supplied by the store.
pub trait Entity:
    Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const TABLE: Table;

    type New: Clone + Serialize + DeserializeOwned + Send + Sync;
    type Patch: Clone + Default + Serialize + DeserializeOwned + Send + Sync;

    fn id(&self) -> &str;

    fn build(id: String, created_at: DateTime<Utc>, input: Self::New) -> Self;

    /// Overwrite only the fields present in `patch`
    fn apply(&mut self, patch: Self::Patch);

    fn into_record(self) -> Record;
}
