//! In-memory demo store using DashMap
//!
//! Each entity kind owns one [`Collection`]. Identifiers come from a
//! per-collection counter and are never reused, even after deletes.

use crate::ports::Backend;
use crate::Result;
use async_trait::async_trait;
use chrono::Utc;
use crud_types::{Category, DataMode, Entity, NewRecord, Post, Record, RecordPatch, Table};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Records of one kind, keyed by id
pub struct Collection<T> {
    rows: DashMap<String, Row<T>>,
    next_seq: AtomicU64,
}

struct Row<T> {
    seq: u64,
    record: T,
}

impl<T: Entity> Collection<T> {
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
            next_seq: AtomicU64::new(1),
        }
    }

    /// Owned copies of all records, oldest first
    pub fn list(&self) -> Vec<T> {
        let mut rows: Vec<(u64, T)> = self
            .rows
            .iter()
            .map(|row| (row.seq, row.record.clone()))
            .collect();
        rows.sort_by_key(|(seq, _)| *seq);
        rows.into_iter().map(|(_, record)| record).collect()
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.rows.get(id).map(|row| row.record.clone())
    }

    /// Store a new record with the next id and the current time
    pub fn create(&self, input: T::New) -> T {
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
        let record = T::build(seq.to_string(), Utc::now(), input);
        self.rows.insert(
            seq.to_string(),
            Row {
                seq,
                record: record.clone(),
            },
        );
        record
    }

    /// Merge `patch` into an existing record. Never creates.
    pub fn update(&self, id: &str, patch: T::Patch) -> Option<T> {
        let mut row = self.rows.get_mut(id)?;
        row.record.apply(patch);
        Some(row.record.clone())
    }

    pub fn delete(&self, id: &str) -> bool {
        self.rows.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Insert a record that already has an id and timestamp (fixtures).
    /// The counter moves past numeric ids so later creates don't collide.
    pub(crate) fn restore(&self, record: T) {
        let seq = match record.id().parse::<u64>() {
            Ok(seq) => {
                self.next_seq.fetch_max(seq + 1, Ordering::SeqCst);
                seq
            }
            Err(_) => self.next_seq.fetch_add(1, Ordering::SeqCst),
        };
        self.rows.insert(record.id().to_string(), Row { seq, record });
    }
}

impl<T: Entity> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Demo backend holding every entity kind in process memory
#[derive(Default)]
pub struct MemoryStore {
    posts: Collection<Post>,
    categories: Collection<Category>,
}

impl MemoryStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the demo fixtures
    pub fn with_demo_data() -> Self {
        let store = Self::new();
        for category in super::seed::demo_categories() {
            store.categories.restore(category);
        }
        for post in super::seed::demo_posts() {
            store.posts.restore(post);
        }
        store
    }

    pub fn posts(&self) -> &Collection<Post> {
        &self.posts
    }

    pub fn categories(&self) -> &Collection<Category> {
        &self.categories
    }
}

#[async_trait]
impl Backend for MemoryStore {
    fn mode(&self) -> DataMode {
        DataMode::Demo
    }

    async fn list(&self, table: Table) -> Result<Vec<Record>> {
        debug!("Listing {} from demo store", table.plural());
        Ok(match table {
            Table::Post => self.posts.list().into_iter().map(Record::from).collect(),
            Table::Category => self
                .categories
                .list()
                .into_iter()
                .map(Record::from)
                .collect(),
        })
    }

    async fn get(&self, table: Table, id: &str) -> Result<Option<Record>> {
        Ok(match table {
            Table::Post => self.posts.get(id).map(Record::from),
            Table::Category => self.categories.get(id).map(Record::from),
        })
    }

    async fn create(&self, input: NewRecord) -> Result<Record> {
        Ok(match input {
            NewRecord::Post(input) => self.posts.create(input).into(),
            NewRecord::Category(input) => self.categories.create(input).into(),
        })
    }

    async fn update(&self, id: &str, patch: RecordPatch) -> Result<Option<Record>> {
        Ok(match patch {
            RecordPatch::Post(patch) => self.posts.update(id, patch).map(Record::from),
            RecordPatch::Category(patch) => self.categories.update(id, patch).map(Record::from),
        })
    }

    async fn delete(&self, table: Table, id: &str) -> Result<bool> {
        Ok(match table {
            Table::Post => self.posts.delete(id),
            Table::Category => self.categories.delete(id),
        })
    }

    async fn health(&self) -> Result<()> {
        Ok(())
    }
}
