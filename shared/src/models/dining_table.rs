//! Dining Table Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::ObjectId;

/// Dining table entity (桌台)
///
/// `is_taken` is maintained by clients; the server never couples it to
/// order state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTable {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub is_taken: bool,
}

/// Create / replace dining table payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DiningTableBody {
    #[validate(length(min = 1))]
    pub name: String,
    pub is_taken: bool,
}
