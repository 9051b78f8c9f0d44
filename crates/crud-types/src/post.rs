//! Post types

use crate::{ids, Entity, Record, Table};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(deserialize_with = "ids::string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Owning user. Not checked against any user table.
    #[serde(deserialize_with = "ids::string_or_number")]
    pub user_id: String,
    #[serde(default)]
    pub published: bool,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

/// Post creation input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(deserialize_with = "ids::string_or_number")]
    pub user_id: String,
    #[serde(default)]
    pub published: bool,
}

/// Partial post update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(
        default,
        deserialize_with = "ids::opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

impl Entity for Post {
    const TABLE: Table = Table::Post;

    type New = NewPost;
    type Patch = PostPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, created_at: DateTime<Utc>, input: NewPost) -> Self {
        Self {
            id,
            title: input.title,
            content: input.content,
            user_id: input.user_id,
            published: input.published,
            created_at,
        }
    }

    fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
        if let Some(published) = patch.published {
            self.published = published;
        }
    }

    fn into_record(self) -> Record {
        Record::Post(self)
    }
}
