//! Dashboard summary endpoint.

use axum::extract::State;
use axum::{Json, Router, routing::get};

use crate::db::analytics::DashboardSummary;
use crate::db::{AnalyticsRepository, ContentRepository, InquiryRepository};
use crate::error::AppError;
use crate::middleware::CurrentAdmin;
use crate::models::content::{Page, PressRelease, Product, Story};
use crate::state::AppState;

const TOP_PATHS_LIMIT: i64 = 10;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/dashboard/summary", get(summary))
}

/// GET /api/dashboard/summary
async fn summary(
    State(state): State<AppState>,
    CurrentAdmin(_): CurrentAdmin,
) -> Result<Json<DashboardSummary>, AppError> {
    let pool = &state.pool;
    let analytics = AnalyticsRepository::new(pool);

    let summary = DashboardSummary {
        press_releases: ContentRepository::<PressRelease>::new(pool).count().await?,
        stories: ContentRepository::<Story>::new(pool).count().await?,
        products: ContentRepository::<Product>::new(pool).count().await?,
        pages: ContentRepository::<Page>::new(pool).count().await?,
        new_inquiries: InquiryRepository::new(pool).count_new().await?,
        page_views_30d: analytics.page_views_30d().await?,
        top_paths: analytics.top_paths_30d(TOP_PATHS_LIMIT).await?,
    };

    Ok(Json(summary))
}
