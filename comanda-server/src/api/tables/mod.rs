//! Dining Table API 模块

use axum::{Router, routing::get};
use shared::models::DiningTable;

use super::crud::{self, Resource};
use crate::core::ServerState;
use crate::db::repository::Repository;

impl Resource for DiningTable {
    const DEGRADED_LISTING: bool = true;

    fn repository(state: &ServerState) -> &Repository<Self> {
        &state.tables
    }
}

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/table", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/",
            get(crud::list::<DiningTable>).post(crud::create::<DiningTable>),
        )
        .route(
            "/{id}",
            get(crud::get_by_id::<DiningTable>)
                .put(crud::update::<DiningTable>)
                .delete(crud::delete::<DiningTable>),
        )
}
