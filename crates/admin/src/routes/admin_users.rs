//! Admin account management. Every endpoint requires the `super_admin` role.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get, routing::patch};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use sonaverse_core::{AdminRole, AdminUserId, Email};

use crate::db::AdminUserRepository;
use crate::error::AppError;
use crate::middleware::RequireSuperAdmin;
use crate::models::admin_user::SafeAdminUser;
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/admin-users",
            get(list).post(create),
        )
        .route("/api/admin-users/{id}", axum::routing::delete(delete_user))
        .route("/api/admin-users/{id}/active", patch(set_active))
}

/// GET /api/admin-users
async fn list(
    State(state): State<AppState>,
    RequireSuperAdmin(_): RequireSuperAdmin,
) -> Result<Json<Vec<SafeAdminUser>>, AppError> {
    let users = AdminUserRepository::new(&state.pool).list_all().await?;
    Ok(Json(users.iter().map(SafeAdminUser::from).collect()))
}

#[derive(Debug, Deserialize)]
struct CreateUserRequest {
    email: String,
    name: String,
    password: String,
    role: AdminRole,
}

/// POST /api/admin-users
async fn create(
    State(state): State<AppState>,
    RequireSuperAdmin(_): RequireSuperAdmin,
    Json(body): Json<CreateUserRequest>,
) -> Result<Json<SafeAdminUser>, AppError> {
    let email = Email::parse(&body.email)
        .map_err(|_| AppError::Validation("올바른 이메일 형식이 아닙니다.".to_owned()))?;
    let hash = services::auth::hash_password(&body.password)?;

    let user = AdminUserRepository::new(&state.pool)
        .create(&email, &body.name, &hash, body.role)
        .await?;

    info!(user_id = user.id.as_i32(), "admin account created");
    Ok(Json(SafeAdminUser::from(&user)))
}

#[derive(Debug, Deserialize)]
struct SetActiveRequest {
    active: bool,
}

/// PATCH /api/admin-users/{id}/active
async fn set_active(
    State(state): State<AppState>,
    RequireSuperAdmin(claims): RequireSuperAdmin,
    Path(id): Path<i32>,
    Json(body): Json<SetActiveRequest>,
) -> Result<Json<Value>, AppError> {
    let id = AdminUserId::new(id);

    if !body.active && claims.user_id() == Some(id) {
        return Err(AppError::Validation(
            "자기 자신의 계정은 비활성화할 수 없습니다.".to_owned(),
        ));
    }

    let repo = AdminUserRepository::new(&state.pool);
    let target = repo.get_by_id(id).await?.ok_or(AppError::NotFound)?;
    if target.protected && !body.active {
        return Err(AppError::Validation(
            "최고 관리자 계정은 비활성화할 수 없습니다.".to_owned(),
        ));
    }

    repo.set_active(id, body.active).await?;
    info!(user_id = id.as_i32(), active = body.active, "admin account toggled");
    Ok(Json(json!({ "success": true })))
}

/// DELETE /api/admin-users/{id}
///
/// The seeded super-admin account is undeletable, and no account may
/// delete itself.
async fn delete_user(
    State(state): State<AppState>,
    RequireSuperAdmin(claims): RequireSuperAdmin,
    Path(id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    let id = AdminUserId::new(id);
    let repo = AdminUserRepository::new(&state.pool);

    let target = repo.get_by_id(id).await?.ok_or(AppError::NotFound)?;

    if target.protected {
        return Err(AppError::Validation(
            "최고 관리자 계정은 삭제할 수 없습니다.".to_owned(),
        ));
    }
    if claims.user_id() == Some(id) {
        return Err(AppError::Validation(
            "자기 자신의 계정은 삭제할 수 없습니다.".to_owned(),
        ));
    }

    repo.delete(id).await?;
    info!(user_id = id.as_i32(), "admin account deleted");
    Ok(Json(json!({ "success": true })))
}
