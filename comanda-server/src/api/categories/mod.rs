//! Category API 模块
//!
//! 无单个查询接口

use axum::{
    Router,
    routing::{get, put},
};
use shared::models::Category;

use super::crud::{self, Resource};
use crate::core::ServerState;
use crate::db::repository::Repository;

impl Resource for Category {
    const DEGRADED_LISTING: bool = true;

    fn repository(state: &ServerState) -> &Repository<Self> {
        &state.categories
    }
}

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/category", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(crud::list::<Category>).post(crud::create::<Category>))
        .route(
            "/{id}",
            put(crud::update::<Category>).delete(crud::delete::<Category>),
        )
}
