//! Global site settings endpoints.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tracing::info;

use sonaverse_core::AdminRole;

use crate::db::SettingsRepository;
use crate::error::AppError;
use crate::middleware::CurrentAdmin;
use crate::models::settings::SiteSettings;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/settings", get(get_settings).put(put_settings))
}

/// GET /api/settings
async fn get_settings(
    State(state): State<AppState>,
    CurrentAdmin(_): CurrentAdmin,
) -> Result<Json<SiteSettings>, AppError> {
    let settings = SettingsRepository::new(&state.pool).get().await?;
    Ok(Json(settings))
}

/// PUT /api/settings: full replacement, last-write-wins.
async fn put_settings(
    State(state): State<AppState>,
    CurrentAdmin(claims): CurrentAdmin,
    Json(settings): Json<SiteSettings>,
) -> Result<Json<Value>, AppError> {
    if claims.role == AdminRole::Viewer {
        return Err(AppError::Forbidden);
    }

    SettingsRepository::new(&state.pool).put(&settings).await?;
    info!("site settings updated");
    Ok(Json(json!({ "success": true })))
}
