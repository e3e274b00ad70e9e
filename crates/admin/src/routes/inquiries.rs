//! Inquiry management endpoints. Inquiries are created by the public site;
//! the panel only reads them and moves them through statuses.

use axum::extract::{Path, Query, State};
use axum::{Json, Router, routing::get, routing::patch};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use sonaverse_core::{AdminRole, InquiryId, InquiryStatus};

use crate::db::InquiryRepository;
use crate::error::AppError;
use crate::middleware::CurrentAdmin;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/inquiries", get(list))
        .route("/api/inquiries/{id}", get(get_one))
        .route("/api/inquiries/{id}/status", patch(update_status))
}

#[derive(Debug, Deserialize)]
struct ListParams {
    status: Option<InquiryStatus>,
}

/// GET /api/inquiries?status=new
async fn list(
    State(state): State<AppState>,
    CurrentAdmin(_): CurrentAdmin,
    Query(params): Query<ListParams>,
) -> Result<Json<Value>, AppError> {
    let inquiries = InquiryRepository::new(&state.pool)
        .list(params.status)
        .await?;
    Ok(Json(json!({ "inquiries": inquiries })))
}

/// GET /api/inquiries/{id}: the inquiry plus its status history.
async fn get_one(
    State(state): State<AppState>,
    CurrentAdmin(_): CurrentAdmin,
    Path(id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    let id = InquiryId::new(id);
    let repo = InquiryRepository::new(&state.pool);

    let inquiry = repo.get_by_id(id).await?.ok_or(AppError::NotFound)?;
    let history = repo.history(id).await?;

    Ok(Json(json!({ "inquiry": inquiry, "history": history })))
}

#[derive(Debug, Deserialize)]
struct StatusUpdateRequest {
    status: InquiryStatus,
    note: Option<String>,
}

/// PATCH /api/inquiries/{id}/status
async fn update_status(
    State(state): State<AppState>,
    CurrentAdmin(claims): CurrentAdmin,
    Path(id): Path<i32>,
    Json(body): Json<StatusUpdateRequest>,
) -> Result<Json<Value>, AppError> {
    if claims.role == AdminRole::Viewer {
        return Err(AppError::Forbidden);
    }
    let changed_by = claims.user_id().ok_or(AppError::Unauthorized)?;

    let inquiry = InquiryRepository::new(&state.pool)
        .update_status(InquiryId::new(id), body.status, changed_by, body.note.as_deref())
        .await?;

    info!(inquiry_id = id, status = %body.status, "inquiry status changed");
    Ok(Json(json!({ "inquiry": inquiry })))
}
