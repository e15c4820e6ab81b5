//! Database Module
//!
//! Persistence gateway: a keyed-document store contract ([`DocumentStore`])
//! with two engines, and typed repositories on top of it.
//!
//! | Engine | 用途 |
//! |--------|------|
//! | [`SurrealStore`] | 嵌入式 SurrealDB (RocksDB 或内存) |
//! | [`MemoryStore`] | 进程内存储 (测试 / 临时演示) |

pub mod memory;
pub mod repository;
pub mod store;
pub mod surreal;

pub use memory::MemoryStore;
pub use store::{Collection, Document, DocumentStore, Filter, ID_FIELD, SharedStore};
pub use surreal::SurrealStore;

use std::sync::Arc;
use thiserror::Error;

use crate::core::config::{Config, DbEngine};

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    /// Store unreachable, timed out, or rejected the statement
    #[error("Database error: {0}")]
    Database(String),

    /// A stored document no longer matches its type
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(err: serde_json::Error) -> Self {
        RepoError::Serialization(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Open the store selected by the configuration
///
/// Called once at start-up; the returned handle is shared by every request.
pub async fn open_store(config: &Config) -> RepoResult<SharedStore> {
    let store: SharedStore = match config.db_engine {
        DbEngine::RocksDb => {
            if let Some(parent) = std::path::Path::new(&config.db_path).parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    RepoError::Database(format!("Failed to create {}: {e}", parent.display()))
                })?;
            }
            Arc::new(
                SurrealStore::open_rocksdb(&config.db_path, &config.db_namespace, &config.db_name)
                    .await?,
            )
        }
        DbEngine::SurrealMemory => {
            Arc::new(SurrealStore::open_memory(&config.db_namespace, &config.db_name).await?)
        }
        DbEngine::Memory => Arc::new(MemoryStore::new()),
    };

    tracing::info!(
        engine = store.engine(),
        namespace = %config.db_namespace,
        database = %config.db_name,
        "Document store ready"
    );
    Ok(store)
}
