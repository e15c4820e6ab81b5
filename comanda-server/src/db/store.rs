//! Document store contract
//!
//! Every business component talks to storage through [`DocumentStore`]:
//! `find_one` / `find` / `insert_one` / `update_one` / `delete_one`, scoped
//! per named [`Collection`]. A single write touches a single document and is
//! atomic for that document; nothing spans documents.

use async_trait::async_trait;
use serde_json::{Map, Value};
use shared::ObjectId;
use std::fmt;
use std::sync::Arc;

use super::RepoResult;

/// Field holding the 24-hex document id
pub const ID_FIELD: &str = "_id";

/// Stored document (JSON object, `_id` included)
pub type Document = Map<String, Value>;

/// Process-wide store handle
pub type SharedStore = Arc<dyn DocumentStore>;

/// Named collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    User,
    Order,
    Table,
    Category,
    Plate,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::User,
        Collection::Order,
        Collection::Table,
        Collection::Category,
        Collection::Plate,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Collection::User => "user",
            Collection::Order => "order",
            Collection::Table => "table",
            Collection::Category => "category",
            Collection::Plate => "plate",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Conjunction of top-level field equalities
///
/// An empty filter matches every document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<(String, Value)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Match every document
    pub fn all() -> Self {
        Self::default()
    }

    /// Match the document with this id
    pub fn by_id(id: &ObjectId) -> Self {
        Self::new().eq(ID_FIELD, id.to_hex())
    }

    /// Add `field == value`
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.push((field.into(), value.into()));
        self
    }

    pub fn conditions(&self) -> &[(String, Value)] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn matches(&self, doc: &Document) -> bool {
        self.conditions
            .iter()
            .all(|(field, value)| doc.get(field) == Some(value))
    }
}

/// Apply a `$set`-style patch: every top-level field in `patch` overwrites
/// the document's field. Returns whether anything changed.
///
/// `_id` is never overwritten.
pub fn apply_patch(doc: &mut Document, patch: &Document) -> bool {
    let mut changed = false;
    for (field, value) in patch {
        if field == ID_FIELD {
            continue;
        }
        if doc.get(field) != Some(value) {
            doc.insert(field.clone(), value.clone());
            changed = true;
        }
    }
    changed
}

/// Keyed-document store
///
/// Implementations must be cheap to share behind an [`Arc`]; every request
/// calls into the same instance concurrently.
#[async_trait]
pub trait DocumentStore: Send + Sync + fmt::Debug {
    /// Engine name, for logs and health checks
    fn engine(&self) -> &'static str;

    /// Verify the store answers
    async fn ping(&self) -> RepoResult<()>;

    /// First document matching `filter` in the store's natural order
    async fn find_one(&self, collection: Collection, filter: &Filter)
    -> RepoResult<Option<Document>>;

    /// All documents matching `filter`, in the store's natural order
    async fn find(&self, collection: Collection, filter: &Filter) -> RepoResult<Vec<Document>>;

    /// Insert under a freshly generated id (any `_id` in `doc` is replaced)
    async fn insert_one(&self, collection: Collection, doc: Document) -> RepoResult<ObjectId>;

    /// Patch the first matching document. Returns the modified count: 0 when
    /// nothing matched or the patch changed nothing.
    async fn update_one(
        &self,
        collection: Collection,
        filter: &Filter,
        patch: Document,
    ) -> RepoResult<u64>;

    /// Remove the first matching document. Returns the deleted count.
    async fn delete_one(&self, collection: Collection, filter: &Filter) -> RepoResult<u64>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_filter_matches_all_conditions() {
        let d = doc(json!({"tableId": "t1", "orderClosed": false}));
        assert!(Filter::all().matches(&d));
        assert!(Filter::new().eq("tableId", "t1").matches(&d));
        assert!(
            Filter::new()
                .eq("tableId", "t1")
                .eq("orderClosed", false)
                .matches(&d)
        );
        assert!(!Filter::new().eq("tableId", "t1").eq("orderClosed", true).matches(&d));
        assert!(!Filter::new().eq("missing", Value::Null).matches(&d));
    }

    #[test]
    fn test_apply_patch_reports_change() {
        let mut d = doc(json!({"_id": "a", "name": "Mesa 1", "isTaken": false}));

        assert!(!apply_patch(&mut d, &doc(json!({"name": "Mesa 1"}))));
        assert!(apply_patch(&mut d, &doc(json!({"isTaken": true}))));
        assert_eq!(d["isTaken"], json!(true));

        // _id is immutable
        assert!(!apply_patch(&mut d, &doc(json!({"_id": "b"}))));
        assert_eq!(d["_id"], json!("a"));
    }

    #[test]
    fn test_collection_names() {
        let names: Vec<_> = Collection::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["user", "order", "table", "category", "plate"]);
    }
}
