//! Repository Module
//!
//! Typed CRUD over the document store. One generic [`Repository`] serves
//! every entity; the per-entity wiring (collection, payload type, label)
//! lives in [`entities`].

pub mod entities;

pub use entities::{
    CategoryRepository, DiningTableRepository, OrderRepository, PlateRepository, UserRepository,
};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::ObjectId;
use std::fmt;
use std::marker::PhantomData;
use validator::Validate;

use super::store::{Collection, Document, Filter, SharedStore};
use super::{RepoError, RepoResult};

/// A stored entity type
pub trait Entity: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection the entity lives in
    const COLLECTION: Collection;
    /// Human-readable name used in API messages ("Table", "Order", ...)
    const LABEL: &'static str;
    /// Create / replace payload (the entity without its `_id`)
    type Body: Serialize + DeserializeOwned + Validate + Send + Sync + 'static;
}

/// Serialize a value into a store document
pub fn to_document<T: Serialize>(value: &T) -> RepoResult<Document> {
    match serde_json::to_value(value)? {
        Value::Object(doc) => Ok(doc),
        other => Err(RepoError::Serialization(format!(
            "Expected an object, got {other}"
        ))),
    }
}

/// Deserialize a store document
pub fn from_document<T: DeserializeOwned>(doc: Document) -> RepoResult<T> {
    Ok(serde_json::from_value(Value::Object(doc))?)
}

/// Generic repository bound to one collection
pub struct Repository<T> {
    store: SharedStore,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: Entity> fmt::Debug for Repository<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository")
            .field("collection", &T::COLLECTION)
            .field("engine", &self.store.engine())
            .finish()
    }
}

impl<T: Entity> Repository<T> {
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    // ========== Filter queries ==========

    pub async fn find_one(&self, filter: &Filter) -> RepoResult<Option<T>> {
        self.store
            .find_one(T::COLLECTION, filter)
            .await?
            .map(from_document)
            .transpose()
    }

    pub async fn find(&self, filter: &Filter) -> RepoResult<Vec<T>> {
        self.store
            .find(T::COLLECTION, filter)
            .await?
            .into_iter()
            .map(from_document)
            .collect()
    }

    /// Overwrite the given fields of the first matching document
    pub async fn update_fields(&self, filter: &Filter, fields: Document) -> RepoResult<u64> {
        self.store.update_one(T::COLLECTION, filter, fields).await
    }

    // ========== CRUD by id ==========

    /// All documents, in the store's natural order
    pub async fn find_all(&self) -> RepoResult<Vec<T>> {
        self.find(&Filter::all()).await
    }

    pub async fn find_by_id(&self, id: &ObjectId) -> RepoResult<Option<T>> {
        self.find_one(&Filter::by_id(id)).await
    }

    /// Insert a new document, returning its generated id
    pub async fn create(&self, body: &T::Body) -> RepoResult<ObjectId> {
        self.store
            .insert_one(T::COLLECTION, to_document(body)?)
            .await
    }

    /// Write every field of `body` over the document. Returns the modified
    /// count (0 = not found or no change).
    pub async fn update(&self, id: &ObjectId, body: &T::Body) -> RepoResult<u64> {
        self.update_fields(&Filter::by_id(id), to_document(body)?)
            .await
    }

    /// Hard delete. Returns the deleted count (0 or 1).
    pub async fn delete(&self, id: &ObjectId) -> RepoResult<u64> {
        self.store.delete_one(T::COLLECTION, &Filter::by_id(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DocumentStore, MemoryStore};
    use shared::models::{Category, CategoryBody};
    use std::sync::Arc;

    fn repo() -> CategoryRepository {
        Repository::new(Arc::new(MemoryStore::new()))
    }

    fn bebidas() -> CategoryBody {
        CategoryBody {
            name: "Bebidas".to_string(),
            image_url: "https://img/bebidas.png".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_find_by_id() {
        let repo = repo();
        let id = repo.create(&bebidas()).await.unwrap();

        let found: Category = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.name, "Bebidas");
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_reports_modified_count() {
        let repo = repo();
        let id = repo.create(&bebidas()).await.unwrap();

        assert_eq!(repo.update(&id, &bebidas()).await.unwrap(), 0);

        let mut body = bebidas();
        body.name = "Refrescos".to_string();
        assert_eq!(repo.update(&id, &body).await.unwrap(), 1);
        assert_eq!(repo.update(&ObjectId::new(), &body).await.unwrap(), 0);

        let found = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found.name, "Refrescos");
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let repo = repo();
        let id = repo.create(&bebidas()).await.unwrap();
        assert_eq!(repo.delete(&id).await.unwrap(), 1);
        assert_eq!(repo.delete(&id).await.unwrap(), 0);
        assert!(repo.find_by_id(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_document_is_serialization_error() {
        let store = Arc::new(MemoryStore::new());
        let mut doc = Document::new();
        doc.insert("name".to_string(), Value::from(42));
        store.insert_one(Collection::Category, doc).await.unwrap();

        let repo: CategoryRepository = Repository::new(store);
        assert!(matches!(
            repo.find_all().await,
            Err(RepoError::Serialization(_))
        ));
    }
}
