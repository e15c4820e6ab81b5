//! 统一错误处理
//!
//! [`AppError`] 渲染为统一响应信封 `{code, status, data, error}`：
//!
//! | 变体 | HTTP | 说明 |
//! |------|------|------|
//! | NotFound | 200 | 业务结果 (`status: false`)，不是协议错误 |
//! | Validation | 400 | 请求格式错误 |
//! | Timeout | 408 | 请求超时 (REQUEST_TIMEOUT_MS) |
//! | Database | 500 | 存储不可达 / 超时 / 写入失败 |
//! | Internal | 500 | 其他内部错误 |
//!
//! 5xx 只记录日志，不向客户端暴露细节。
//!
//! # 使用示例
//!
//! ```ignore
//! Err(AppError::not_found(format!("Table {id} not found")))
//!
//! Ok(ok(tables))
//! ```

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use shared::{ApiResponse, ObjectIdError};
use tracing::error;

use crate::db::RepoError;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 业务结果 ==========
    #[error("{0}")]
    /// 资源不存在 / 未修改 / 未删除 (200, status=false)
    NotFound(String),

    // ========== 请求错误 (4xx) ==========
    #[error("Validation failed: {0}")]
    /// 验证失败 (400)
    Validation(String),

    #[error("Request timed out after {0} ms")]
    /// 请求超时 (408)
    Timeout(u64),

    // ========== 系统错误 (5xx) ==========
    #[error("Database error: {0}")]
    /// 数据库错误 (500)
    Database(String),

    #[error("Internal server error: {0}")]
    /// 内部错误 (500)
    Internal(String),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::OK,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Timeout(_) => StatusCode::REQUEST_TIMEOUT,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            AppError::NotFound(msg) => msg.clone(),
            AppError::Validation(msg) => msg.clone(),
            AppError::Timeout(_) => self.to_string(),
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                "Database error".to_string()
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                "Internal server error".to_string()
            }
        };

        let body = Json(ApiResponse::<()>::error(status.as_u16(), message));
        (status, body).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
            RepoError::Serialization(msg) => AppError::Internal(msg),
        }
    }
}

impl From<ObjectIdError> for AppError {
    fn from(err: ObjectIdError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

// ========== Helper functions ==========

/// Create a successful response
pub fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::ok(data))
}

/// Create a business failure response (`status: false`, HTTP 200)
pub fn fail<T: Serialize>(message: impl Into<String>) -> Json<ApiResponse<T>> {
    Json(ApiResponse::fail(message))
}
