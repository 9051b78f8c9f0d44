//! Category types

use crate::{ids, Entity, Record, Table};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(deserialize_with = "ids::string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Hex color such as `#3B82F6`; the format is not validated
    #[serde(default)]
    pub color: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

/// Category creation input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Partial category update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Entity for Category {
    const TABLE: Table = Table::Category;

    type New = NewCategory;
    type Patch = CategoryPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, created_at: DateTime<Utc>, input: NewCategory) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            color: input.color.unwrap_or_default(),
            created_at,
        }
    }

    fn apply(&mut self, patch: CategoryPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }

    fn into_record(self) -> Record {
        Record::Category(self)
    }
}
