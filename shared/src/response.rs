//! API Response types
//!
//! Every endpoint answers with the same envelope:
//! ```json
//! {
//!     "code": 200,
//!     "status": true,
//!     "data": { ... },
//!     "error": null
//! }
//! ```
//!
//! Business failures (not found, locked account, wrong password) keep
//! `code: 200` and set `status: false`.

use serde::{Deserialize, Serialize};

/// HTTP code carried by business responses
pub const API_CODE_OK: u16 = 200;

/// Unified API response structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Mirrors the HTTP status code
    pub code: u16,
    /// Whether the operation did what was asked
    pub status: bool,
    /// Response payload
    pub data: Option<T>,
    /// Human-readable failure message
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            code: API_CODE_OK,
            status: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create a business failure (`status: false`, HTTP 200)
    pub fn fail(message: impl Into<String>) -> Self {
        Self::error(API_CODE_OK, message)
    }

    /// Create a failure with an explicit code (validation / server errors)
    pub fn error(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            status: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_envelope_shape() {
        let body = serde_json::to_value(ApiResponse::ok("abc")).unwrap();
        assert_eq!(
            body,
            json!({"code": 200, "status": true, "data": "abc", "error": null})
        );
    }

    #[test]
    fn test_fail_keeps_code_200() {
        let body = serde_json::to_value(ApiResponse::<()>::fail("Table x not found")).unwrap();
        assert_eq!(
            body,
            json!({"code": 200, "status": false, "data": null, "error": "Table x not found"})
        );
    }
}
