//! Authentication Handlers

use axum::{Json, extract::State};
use shared::ApiResponse;
use shared::models::{LoginRequest, User};

use crate::auth::LoginOutcome;
use crate::core::ServerState;
use crate::utils::{AppResult, ValidatedJson, fail, ok};

/// Login handler
///
/// 业务失败统一返回 HTTP 200 + `status: false`：
/// - 账号已锁定: `Su cuenta ha sido bloqueada`
/// - 密码错误: `Contraseña incorrecta, reintentos: {n}`
/// - 用户不存在: `El usuario {username} no existe`
pub async fn login(
    State(state): State<ServerState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> AppResult<Json<ApiResponse<User>>> {
    let outcome = state.guard.authenticate(&req.username, &req.password).await?;

    Ok(match outcome {
        LoginOutcome::Success(user) => ok(user),
        LoginOutcome::Locked => fail("Su cuenta ha sido bloqueada"),
        LoginOutcome::InvalidPassword(attempts) => {
            fail(format!("Contraseña incorrecta, reintentos: {}", attempts))
        }
        LoginOutcome::UserNotFound => fail(format!("El usuario {} no existe", req.username)),
    })
}
