//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 登录 (失败计数 + 锁定)
//! - [`tables`] - 桌台管理接口
//! - [`categories`] - 分类管理接口
//! - [`plates`] - 菜品管理接口
//! - [`users`] - 用户管理接口
//! - [`orders`] - 订单管理接口
//!
//! 所有接口都返回 [`shared::ApiResponse`] 信封。

pub mod crud;

pub mod auth;
pub mod health;

pub mod categories;
pub mod orders;
pub mod plates;
pub mod tables;
pub mod users;

use axum::Router;

use crate::core::ServerState;

/// Merge every resource router (state is attached by the caller)
pub fn build_app() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(tables::router())
        .merge(categories::router())
        .merge(plates::router())
        .merge(users::router())
        .merge(orders::router())
}
