//! Plate API 模块

use axum::{
    Router,
    routing::{get, put},
};
use shared::models::Plate;

use super::crud::{self, Resource};
use crate::core::ServerState;
use crate::db::repository::Repository;

impl Resource for Plate {
    const DEGRADED_LISTING: bool = true;

    fn repository(state: &ServerState) -> &Repository<Self> {
        &state.plates
    }
}

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/plate", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(crud::list::<Plate>).post(crud::create::<Plate>))
        .route(
            "/{id}",
            put(crud::update::<Plate>).delete(crud::delete::<Plate>),
        )
}
