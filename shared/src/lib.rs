//! Shared types for Comanda
//!
//! Data model, identifiers and the response envelope used by the server
//! and its clients.

pub mod models;
pub mod response;
pub mod types;
pub mod util;

// Re-exports
pub use response::ApiResponse;
pub use serde::{Deserialize, Serialize};
pub use types::{ObjectId, ObjectIdError};
