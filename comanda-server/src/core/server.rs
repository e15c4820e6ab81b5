//! Server Implementation
//!
//! HTTP 服务器启动和管理

use axum::response::{IntoResponse, Response};
use axum::{Router, extract::Request, middleware};
use std::net::SocketAddr;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::core::{Config, ServerState};
use crate::utils::{AppError, AppResult};

/// HTTP 请求日志中间件
async fn log_request(request: Request, next: middleware::Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// 请求超时中间件，超时返回 408 信封
async fn enforce_timeout(timeout_ms: u64, request: Request, next: middleware::Next) -> Response {
    match tokio::time::timeout(Duration::from_millis(timeout_ms), next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            tracing::warn!(timeout_ms, "Request timed out");
            AppError::Timeout(timeout_ms).into_response()
        }
    }
}

/// Wrap a router with the request timeout
fn with_request_timeout(router: Router, timeout_ms: u64) -> Router {
    router.layer(middleware::from_fn(move |request: Request, next: middleware::Next| {
        enforce_timeout(timeout_ms, request, next)
    }))
}

/// Build the full application router with state and middleware
pub fn build_router(state: ServerState) -> Router {
    let timeout_ms = state.config.request_timeout_ms;
    let app = crate::api::build_app().with_state(state);

    with_request_timeout(app, timeout_ms)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    pub async fn run(&self) -> AppResult<()> {
        let app = build_router(self.state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

        tracing::info!("Comanda server is running at http://localhost:{}", self.config.http_port);

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

        Ok(())
    }
}
