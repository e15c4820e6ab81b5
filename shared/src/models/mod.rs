//! Data models
//!
//! Shared between comanda-server and its clients (via API).
//! Every stored entity carries its id as `_id` (24 hex chars); the matching
//! `*Body` type is the request payload without the id, validated at the API
//! boundary and written to the store as-is.

pub mod category;
pub mod dining_table;
pub mod order;
pub mod plate;
pub mod user;

// Re-exports
pub use category::*;
pub use dining_table::*;
pub use order::*;
pub use plate::*;
pub use user::*;
