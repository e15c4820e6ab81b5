//! Order API Handlers

use axum::{Json, extract::State};
use shared::models::{Order, OrderBody};
use shared::{ApiResponse, ObjectId};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult, IdPath, ValidatedJson, ok};

/// List all orders
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<Vec<Order>>>> {
    let orders = state.ledger.list_all().await?;
    Ok(ok(orders))
}

/// First order belonging to a user, open or closed
pub async fn get_by_user(
    State(state): State<ServerState>,
    IdPath(user_id): IdPath,
) -> AppResult<Json<ApiResponse<Order>>> {
    state
        .ledger
        .find_by_user(&user_id)
        .await?
        .map(ok)
        .ok_or_else(|| AppError::not_found(format!("Orders with User {} not found", user_id)))
}

/// The open order seated at a table
pub async fn get_active_by_table(
    State(state): State<ServerState>,
    IdPath(table_id): IdPath,
) -> AppResult<Json<ApiResponse<Order>>> {
    state
        .ledger
        .find_active_by_table(&table_id)
        .await?
        .map(ok)
        .ok_or_else(|| AppError::not_found(format!("Orders with Table {} not found", table_id)))
}

/// Open a new order
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(body): ValidatedJson<OrderBody>,
) -> AppResult<Json<ApiResponse<ObjectId>>> {
    let id = state.ledger.create(&body).await?;
    Ok(ok(id))
}

/// Replace every field of an order (plates, tip, closing flag)
pub async fn update(
    State(state): State<ServerState>,
    IdPath(id): IdPath,
    ValidatedJson(body): ValidatedJson<OrderBody>,
) -> AppResult<Json<ApiResponse<String>>> {
    if state.ledger.replace(&id, &body).await? == 1 {
        Ok(ok(format!("Order {} updated successfully", id)))
    } else {
        Err(AppError::not_found(format!("Order {} not found", id)))
    }
}

pub async fn delete(
    State(state): State<ServerState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<String>>> {
    if state.ledger.delete(&id).await? == 1 {
        Ok(ok(format!("Order {} deleted successfully", id)))
    } else {
        Err(AppError::not_found(format!("Order {} not found", id)))
    }
}
