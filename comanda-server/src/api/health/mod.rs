//! 健康检查路由
//!
//! # 响应示例
//!
//! ```json
//! {
//!   "code": 200,
//!   "status": true,
//!   "data": { "status": "ok", "version": "0.1.0", "engine": "surrealdb" },
//!   "error": null
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use shared::ApiResponse;

use crate::core::ServerState;
use crate::utils::ok;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// ok | degraded
    status: &'static str,
    version: &'static str,
    /// 存储引擎
    engine: &'static str,
}

/// 存储不可达时返回 degraded，接口本身仍然 200
pub async fn health(State(state): State<ServerState>) -> Json<ApiResponse<HealthResponse>> {
    let status = match state.store.ping().await {
        Ok(()) => "ok",
        Err(e) => {
            tracing::warn!(error = %e, "Store ping failed");
            "degraded"
        }
    };

    ok(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        engine: state.store.engine(),
    })
}
