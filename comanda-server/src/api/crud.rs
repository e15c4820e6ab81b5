//! Generic CRUD handlers
//!
//! Tables, categories, plates and users share the same five endpoints:
//!
//! | 方法 | 路径 | 成功 data | status=false error |
//! |------|------|-----------|--------------------|
//! | GET | / | 列表 | - |
//! | GET | /{id} | 文档 | `<Label> {id} not found` |
//! | POST | / | 新 id | - |
//! | PUT | /{id} | `<Label> {id} updated successfully` | `<Label> {id} not found` |
//! | DELETE | /{id} | `<Label> {id} deleted successfully` | `<Label> {id} not found` |

use axum::{Json, extract::State};
use shared::{ApiResponse, ObjectId};

use crate::core::ServerState;
use crate::db::repository::{Entity, Repository};
use crate::utils::{AppError, AppResult, IdPath, ValidatedJson, ok};

/// An entity exposed through the generic CRUD endpoints
pub trait Resource: Entity {
    /// Listing failures are logged and answered with an empty list
    const DEGRADED_LISTING: bool = false;

    fn repository(state: &ServerState) -> &Repository<Self>;
}

fn not_found<R: Resource>(id: &ObjectId) -> AppError {
    AppError::not_found(format!("{} {} not found", R::LABEL, id))
}

/// GET / - 获取全部
pub async fn list<R: Resource>(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<R>>>> {
    match R::repository(&state).find_all().await {
        Ok(items) => Ok(ok(items)),
        Err(e) if R::DEGRADED_LISTING => {
            tracing::error!(resource = R::LABEL, error = %e, "Listing failed, answering with an empty list");
            Ok(ok(Vec::new()))
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /{id} - 获取单个
pub async fn get_by_id<R: Resource>(
    State(state): State<ServerState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<R>>> {
    R::repository(&state)
        .find_by_id(&id)
        .await?
        .map(ok)
        .ok_or_else(|| not_found::<R>(&id))
}

/// POST / - 创建
pub async fn create<R: Resource>(
    State(state): State<ServerState>,
    ValidatedJson(body): ValidatedJson<R::Body>,
) -> AppResult<Json<ApiResponse<ObjectId>>> {
    let id = R::repository(&state).create(&body).await?;
    tracing::debug!(resource = R::LABEL, id = %id, "Created");
    Ok(ok(id))
}

/// PUT /{id} - 更新 (覆盖所有字段)
pub async fn update<R: Resource>(
    State(state): State<ServerState>,
    IdPath(id): IdPath,
    ValidatedJson(body): ValidatedJson<R::Body>,
) -> AppResult<Json<ApiResponse<String>>> {
    let modified = R::repository(&state).update(&id, &body).await?;
    if modified == 1 {
        Ok(ok(format!("{} {} updated successfully", R::LABEL, id)))
    } else {
        Err(not_found::<R>(&id))
    }
}

/// DELETE /{id} - 删除
pub async fn delete<R: Resource>(
    State(state): State<ServerState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<String>>> {
    let deleted = R::repository(&state).delete(&id).await?;
    if deleted == 1 {
        Ok(ok(format!("{} {} deleted successfully", R::LABEL, id)))
    } else {
        Err(not_found::<R>(&id))
    }
}
