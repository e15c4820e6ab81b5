//! User Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::ObjectId;

/// Staff account
///
/// `password` is stored and compared in plaintext. `is_blocked` is kept for
/// clients but the login lockout only looks at `attempts_count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub username: String,
    pub password: String,
    pub is_admin: bool,
    pub is_blocked: bool,
    /// Consecutive failed logins
    pub attempts_count: i64,
}

/// Create / replace user payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserBody {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
    pub is_admin: bool,
    pub is_blocked: bool,
    #[validate(range(min = 0))]
    pub attempts_count: i64,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}
