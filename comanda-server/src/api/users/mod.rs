//! User API 模块
//!
//! 用户文档原样返回 (包括 password 与 attemptsCount)

use axum::{Router, routing::get};
use shared::models::User;

use super::crud::{self, Resource};
use crate::core::ServerState;
use crate::db::repository::Repository;

impl Resource for User {
    fn repository(state: &ServerState) -> &Repository<Self> {
        &state.users
    }
}

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/user", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(crud::list::<User>).post(crud::create::<User>))
        .route(
            "/{id}",
            get(crud::get_by_id::<User>)
                .put(crud::update::<User>)
                .delete(crud::delete::<User>),
        )
}
