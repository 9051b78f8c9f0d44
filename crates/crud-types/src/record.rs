//! Table-erased wrappers
//!
//! Backends are addressed by [`Table`] at runtime, so records and inputs
//! travel as enums with one variant per entity kind. On the wire they are
//! untagged: a `Record::Post` serializes exactly like a [`Post`].

use crate::{Category, CategoryPatch, Entity, NewCategory, NewPost, Post, PostPatch, Table};
use serde::Serialize;
use serde_json::Value;

/// A stored record of any kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Post(Post),
    Category(Category),
}

impl Record {
    pub fn table(&self) -> Table {
        match self {
            Record::Post(_) => Table::Post,
            Record::Category(_) => Table::Category,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Record::Post(p) => p.id(),
            Record::Category(c) => c.id(),
        }
    }

    /// Decode a record of kind `table` from JSON
    pub fn from_value(table: Table, value: Value) -> serde_json::Result<Self> {
        Ok(match table {
            Table::Post => Record::Post(serde_json::from_value(value)?),
            Table::Category => Record::Category(serde_json::from_value(value)?),
        })
    }

    pub fn as_post(&self) -> Option<&Post> {
        match self {
            Record::Post(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_category(&self) -> Option<&Category> {
        match self {
            Record::Category(c) => Some(c),
            _ => None,
        }
    }
}

impl From<Post> for Record {
    fn from(post: Post) -> Self {
        post.into_record()
    }
}

impl From<Category> for Record {
    fn from(category: Category) -> Self {
        category.into_record()
    }
}

/// Creation input of any kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NewRecord {
    Post(NewPost),
    Category(NewCategory),
}

impl NewRecord {
    pub fn table(&self) -> Table {
        match self {
            NewRecord::Post(_) => Table::Post,
            NewRecord::Category(_) => Table::Category,
        }
    }

    /// Decode a creation input for `table`. Unknown keys, including `id`
    /// and `created_at`, are dropped.
    pub fn from_value(table: Table, value: Value) -> serde_json::Result<Self> {
        Ok(match table {
            Table::Post => NewRecord::Post(serde_json::from_value(value)?),
            Table::Category => NewRecord::Category(serde_json::from_value(value)?),
        })
    }
}

impl From<NewPost> for NewRecord {
    fn from(input: NewPost) -> Self {
        NewRecord::Post(input)
    }
}

impl From<NewCategory> for NewRecord {
    fn from(input: NewCategory) -> Self {
        NewRecord::Category(input)
    }
}

/// Partial update of any kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecordPatch {
    Post(PostPatch),
    Category(CategoryPatch),
}

impl RecordPatch {
    pub fn table(&self) -> Table {
        match self {
            RecordPatch::Post(_) => Table::Post,
            RecordPatch::Category(_) => Table::Category,
        }
    }

    pub fn from_value(table: Table, value: Value) -> serde_json::Result<Self> {
        Ok(match table {
            Table::Post => RecordPatch::Post(serde_json::from_value(value)?),
            Table::Category => RecordPatch::Category(serde_json::from_value(value)?),
        })
    }
}

impl From<PostPatch> for RecordPatch {
    fn from(patch: PostPatch) -> Self {
        RecordPatch::Post(patch)
    }
}

impl From<CategoryPatch> for RecordPatch {
    fn from(patch: CategoryPatch) -> Self {
        RecordPatch::Category(patch)
    }
}
