//! Generic CRUD endpoints over the content collections.
//!
//! One router instance per [`ContentKind`]; all four collections share the
//! same handler bodies and differ only in table, payload fields, and URL
//! base.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use sonaverse_core::{AdminRole, Bilingual, Slug};

use crate::db::ContentRepository;
use crate::error::AppError;
use crate::middleware::CurrentAdmin;
use crate::models::content::{ContentKind, ContentRecord};
use crate::services::SessionClaims;
use crate::state::AppState;

/// Build the CRUD router for one collection, e.g. `router::<Story>("stories")`.
pub fn router<K: ContentKind>(base: &str) -> Router<AppState> {
    Router::new()
        .route(
            &format!("/api/{base}"),
            get(list::<K>).post(create::<K>),
        )
        .route(
            &format!("/api/{base}/{{slug}}"),
            get(get_one::<K>)
                .put(update::<K>)
                .delete(delete_one::<K>),
        )
        .route(
            &format!("/api/{base}/{{slug}}/published"),
            axum::routing::patch(set_published::<K>),
        )
}

/// Writes require an editing role; viewers are read-only.
fn require_editor(claims: &SessionClaims) -> Result<(), AppError> {
    match claims.role {
        AdminRole::SuperAdmin | AdminRole::Admin => Ok(()),
        AdminRole::Viewer => Err(AppError::Forbidden),
    }
}

fn parse_slug(raw: &str) -> Result<Slug, AppError> {
    Slug::parse(raw).map_err(|_| AppError::Validation("올바르지 않은 슬러그입니다.".to_owned()))
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "K::Fields: serde::de::DeserializeOwned"))]
struct ContentPayload<K: ContentKind> {
    slug: String,
    content: Bilingual<K::Fields>,
    #[serde(default)]
    published: bool,
}

/// GET /api/{base}: all records, drafts included.
async fn list<K: ContentKind>(
    State(state): State<AppState>,
    CurrentAdmin(_): CurrentAdmin,
) -> Result<Json<Vec<ContentRecord<K>>>, AppError> {
    let records = ContentRepository::<K>::new(&state.pool).list_all().await?;
    Ok(Json(records))
}

/// GET /api/{base}/{slug}
async fn get_one<K: ContentKind>(
    State(state): State<AppState>,
    CurrentAdmin(_): CurrentAdmin,
    Path(slug): Path<String>,
) -> Result<Json<ContentRecord<K>>, AppError> {
    let slug = parse_slug(&slug)?;
    let record = ContentRepository::<K>::new(&state.pool)
        .get_by_slug(&slug)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(record))
}

/// POST /api/{base}
async fn create<K: ContentKind>(
    State(state): State<AppState>,
    CurrentAdmin(claims): CurrentAdmin,
    Json(body): Json<ContentPayload<K>>,
) -> Result<Json<ContentRecord<K>>, AppError> {
    require_editor(&claims)?;
    let slug = parse_slug(&body.slug)?;

    let record = ContentRepository::<K>::new(&state.pool)
        .create(&slug, &body.content, body.published)
        .await?;

    info!(resource = K::RESOURCE, slug = %record.slug, "content created");
    Ok(Json(record))
}

/// PUT /api/{base}/{slug}: full replacement of body and publication flag.
async fn update<K: ContentKind>(
    State(state): State<AppState>,
    CurrentAdmin(claims): CurrentAdmin,
    Path(slug): Path<String>,
    Json(body): Json<ContentPayload<K>>,
) -> Result<Json<ContentRecord<K>>, AppError> {
    require_editor(&claims)?;
    let slug = parse_slug(&slug)?;

    let record = ContentRepository::<K>::new(&state.pool)
        .update(&slug, &body.content, body.published)
        .await?;

    info!(resource = K::RESOURCE, slug = %record.slug, "content updated");
    Ok(Json(record))
}

#[derive(Debug, Deserialize)]
struct SetPublishedRequest {
    published: bool,
}

/// PATCH /api/{base}/{slug}/published: publish or unpublish without
/// touching the body.
async fn set_published<K: ContentKind>(
    State(state): State<AppState>,
    CurrentAdmin(claims): CurrentAdmin,
    Path(slug): Path<String>,
    Json(body): Json<SetPublishedRequest>,
) -> Result<Json<Value>, AppError> {
    require_editor(&claims)?;
    let slug = parse_slug(&slug)?;

    ContentRepository::<K>::new(&state.pool)
        .set_published(&slug, body.published)
        .await?;

    info!(
        resource = K::RESOURCE,
        slug = %slug,
        published = body.published,
        "publication flag changed"
    );
    Ok(Json(json!({ "success": true })))
}

/// DELETE /api/{base}/{slug}
async fn delete_one<K: ContentKind>(
    State(state): State<AppState>,
    CurrentAdmin(claims): CurrentAdmin,
    Path(slug): Path<String>,
) -> Result<Json<Value>, AppError> {
    require_editor(&claims)?;
    let slug = parse_slug(&slug)?;

    let deleted = ContentRepository::<K>::new(&state.pool)
        .delete(&slug)
        .await?;
    if !deleted {
        return Err(AppError::NotFound);
    }

    info!(resource = K::RESOURCE, slug = %slug, "content deleted");
    Ok(Json(json!({ "success": true })))
}
