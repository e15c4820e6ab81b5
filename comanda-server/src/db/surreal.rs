//! SurrealDB document store
//!
//! Each document is stored as record `<collection>:<_id>` with its `_id`
//! also kept as a plain string field, so reads can `OMIT id` and hand back
//! the same JSON that was written.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use shared::ObjectId;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use super::store::{Collection, Document, DocumentStore, Filter, ID_FIELD, apply_patch};
use super::{RepoError, RepoResult};

/// Row returned by `DELETE ... RETURN BEFORE`; only the id is read
#[derive(Debug, Deserialize)]
struct DeletedRow {
    #[serde(rename = "_id")]
    _id: String,
}

#[derive(Clone, Debug)]
pub struct SurrealStore {
    db: Surreal<Db>,
}

impl SurrealStore {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    /// Embedded RocksDB at `path`
    pub async fn open_rocksdb(path: &str, namespace: &str, database: &str) -> RepoResult<Self> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(path).await?;
        db.use_ns(namespace.to_string())
            .use_db(database.to_string())
            .await?;
        tracing::info!(path = %path, "SurrealDB (RocksDB) connection established");
        Ok(Self::new(db))
    }

    /// Embedded in-memory engine (nothing persisted)
    pub async fn open_memory(namespace: &str, database: &str) -> RepoResult<Self> {
        let db: Surreal<Db> = Surreal::new::<Mem>(()).await?;
        db.use_ns(namespace.to_string())
            .use_db(database.to_string())
            .await?;
        Ok(Self::new(db))
    }

    /// `SELECT` over a collection with the filter's equalities as bound
    /// parameters `$p0..$pN`
    fn select_sql(filter: &Filter, limit_one: bool) -> RepoResult<String> {
        let mut sql = String::from("SELECT * OMIT id FROM type::table($tb)");
        for (i, (field, _)) in filter.conditions().iter().enumerate() {
            if !is_safe_field(field) {
                return Err(RepoError::Validation(format!("Invalid field name: {field}")));
            }
            sql.push_str(if i == 0 { " WHERE " } else { " AND " });
            sql.push_str(&format!("`{field}` = $p{i}"));
        }
        if limit_one {
            sql.push_str(" LIMIT 1");
        }
        Ok(sql)
    }

    async fn select(
        &self,
        collection: Collection,
        filter: &Filter,
        limit_one: bool,
    ) -> RepoResult<Vec<Document>> {
        let sql = Self::select_sql(filter, limit_one)?;
        let mut query = self.db.query(sql).bind(("tb", collection.name()));
        for (i, (_, value)) in filter.conditions().iter().enumerate() {
            query = query.bind((format!("p{i}"), value.clone()));
        }
        let rows: Vec<Value> = query.await?.take(0)?;
        rows.into_iter().map(into_document).collect()
    }
}

/// Field names are interpolated into SurrealQL, so only plain identifiers pass
fn is_safe_field(field: &str) -> bool {
    !field.is_empty()
        && field
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn into_document(value: Value) -> RepoResult<Document> {
    match value {
        Value::Object(doc) => Ok(doc),
        other => Err(RepoError::Serialization(format!(
            "Expected a document, got {other}"
        ))),
    }
}

fn document_key(doc: &Document) -> RepoResult<String> {
    doc.get(ID_FIELD)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| RepoError::Serialization("Document without _id".to_string()))
}

#[async_trait]
impl DocumentStore for SurrealStore {
    fn engine(&self) -> &'static str {
        "surrealdb"
    }

    async fn ping(&self) -> RepoResult<()> {
        self.db.health().await?;
        Ok(())
    }

    async fn find_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> RepoResult<Option<Document>> {
        Ok(self.select(collection, filter, true).await?.into_iter().next())
    }

    async fn find(&self, collection: Collection, filter: &Filter) -> RepoResult<Vec<Document>> {
        self.select(collection, filter, false).await
    }

    async fn insert_one(&self, collection: Collection, mut doc: Document) -> RepoResult<ObjectId> {
        let id = ObjectId::new();
        doc.insert(ID_FIELD.to_string(), Value::String(id.to_hex()));

        self.db
            .query("CREATE type::thing($tb, $key) CONTENT $doc RETURN NONE")
            .bind(("tb", collection.name()))
            .bind(("key", id.to_hex()))
            .bind(("doc", Value::Object(doc)))
            .await?
            .check()?;
        Ok(id)
    }

    async fn update_one(
        &self,
        collection: Collection,
        filter: &Filter,
        patch: Document,
    ) -> RepoResult<u64> {
        let Some(mut current) = self.find_one(collection, filter).await? else {
            return Ok(0);
        };
        let key = document_key(&current)?;
        if !apply_patch(&mut current, &patch) {
            return Ok(0);
        }

        let mut patch = patch;
        patch.remove(ID_FIELD);
        self.db
            .query("UPDATE type::thing($tb, $key) MERGE $patch RETURN NONE")
            .bind(("tb", collection.name()))
            .bind(("key", key))
            .bind(("patch", Value::Object(patch)))
            .await?
            .check()?;
        Ok(1)
    }

    async fn delete_one(&self, collection: Collection, filter: &Filter) -> RepoResult<u64> {
        let Some(current) = self.find_one(collection, filter).await? else {
            return Ok(0);
        };
        let key = document_key(&current)?;

        let deleted: Vec<DeletedRow> = self
            .db
            .query("DELETE type::thing($tb, $key) RETURN BEFORE")
            .bind(("tb", collection.name()))
            .bind(("key", key))
            .await?
            .take(0)?;
        Ok(deleted.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_sql_binds_every_condition() {
        let filter = Filter::new().eq("tableId", "abc").eq("orderClosed", false);
        let sql = SurrealStore::select_sql(&filter, true).unwrap();
        assert_eq!(
            sql,
            "SELECT * OMIT id FROM type::table($tb) WHERE `tableId` = $p0 AND `orderClosed` = $p1 LIMIT 1"
        );
    }

    #[test]
    fn test_select_sql_without_filter() {
        let sql = SurrealStore::select_sql(&Filter::all(), false).unwrap();
        assert_eq!(sql, "SELECT * OMIT id FROM type::table($tb)");
    }

    #[test]
    fn test_select_sql_rejects_injection() {
        let filter = Filter::new().eq("name` = 1; DELETE user; --", "x");
        assert!(matches!(
            SurrealStore::select_sql(&filter, false),
            Err(RepoError::Validation(_))
        ));
    }
}
