//! Order API 模块
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/order | GET | 全部订单 |
//! | /api/order | POST | 开单 |
//! | /api/order/user/{userId} | GET | 用户的第一张订单 |
//! | /api/order/table/{tableId} | GET | 桌台当前未结订单 |
//! | /api/order/{id} | PUT | 整单覆盖 |
//! | /api/order/{id} | DELETE | 删除 |

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/order", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/user/{id}", get(handler::get_by_user))
        .route("/table/{id}", get(handler::get_active_by_table))
        .route("/{id}", put(handler::update).delete(handler::delete))
}
