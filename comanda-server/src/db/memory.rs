//! In-process document store
//!
//! Keeps documents in insertion order per collection. The lock is held for
//! one gateway call only, so it gives the same per-document atomicity as
//! the SurrealDB engine and nothing more.

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use shared::ObjectId;
use std::collections::HashMap;

use super::RepoResult;
use super::store::{Collection, Document, DocumentStore, Filter, ID_FIELD, apply_patch};

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<Collection, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in a collection
    pub fn len(&self, collection: Collection) -> usize {
        self.collections
            .read()
            .get(&collection)
            .map(Vec::len)
            .unwrap_or(0)
    }

    pub fn is_empty(&self, collection: Collection) -> bool {
        self.len(collection) == 0
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn engine(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }

    async fn find_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> RepoResult<Option<Document>> {
        let guard = self.collections.read();
        Ok(guard
            .get(&collection)
            .and_then(|docs| docs.iter().find(|d| filter.matches(d)).cloned()))
    }

    async fn find(&self, collection: Collection, filter: &Filter) -> RepoResult<Vec<Document>> {
        let guard = self.collections.read();
        Ok(guard
            .get(&collection)
            .map(|docs| docs.iter().filter(|d| filter.matches(d)).cloned().collect())
            .unwrap_or_default())
    }

    async fn insert_one(&self, collection: Collection, mut doc: Document) -> RepoResult<ObjectId> {
        let id = ObjectId::new();
        doc.insert(ID_FIELD.to_string(), Value::String(id.to_hex()));
        self.collections
            .write()
            .entry(collection)
            .or_default()
            .push(doc);
        Ok(id)
    }

    async fn update_one(
        &self,
        collection: Collection,
        filter: &Filter,
        patch: Document,
    ) -> RepoResult<u64> {
        let mut guard = self.collections.write();
        let Some(doc) = guard
            .get_mut(&collection)
            .and_then(|docs| docs.iter_mut().find(|d| filter.matches(d)))
        else {
            return Ok(0);
        };
        Ok(u64::from(apply_patch(doc, &patch)))
    }

    async fn delete_one(&self, collection: Collection, filter: &Filter) -> RepoResult<u64> {
        let mut guard = self.collections.write();
        let Some(docs) = guard.get_mut(&collection) else {
            return Ok(0);
        };
        match docs.iter().position(|d| filter.matches(d)) {
            Some(index) => {
                docs.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
