//! Dashboard analytics queries.
//!
//! Read-only aggregates over content counts and the `cms.page_view` table
//! that the site binary appends to.

use serde::Serialize;
use sqlx::PgPool;

use super::RepositoryError;

/// A path and its view count over the reporting window.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PathViews {
    pub path: String,
    pub views: i64,
}

/// Aggregate numbers shown on the admin dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub press_releases: i64,
    pub stories: i64,
    pub products: i64,
    pub pages: i64,
    /// Inquiries still in the `new` status.
    pub new_inquiries: i64,
    /// Page views over the last 30 days.
    pub page_views_30d: i64,
    /// Most viewed paths over the last 30 days.
    pub top_paths: Vec<PathViews>,
}

/// Repository for dashboard aggregates.
pub struct AnalyticsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AnalyticsRepository<'a> {
    /// Create a new analytics repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Total page views over the last 30 days.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn page_views_30d(&self) -> Result<i64, RepositoryError> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM cms.page_view WHERE viewed_at > NOW() - INTERVAL '30 days'",
        )
        .fetch_one(self.pool)
        .await?;

        Ok(count.0)
    }

    /// The most viewed paths over the last 30 days, highest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn top_paths_30d(&self, limit: i64) -> Result<Vec<PathViews>, RepositoryError> {
        let rows = sqlx::query_as::<_, PathViews>(
            "SELECT path, COUNT(*) AS views FROM cms.page_view \
             WHERE viewed_at > NOW() - INTERVAL '30 days' \
             GROUP BY path ORDER BY views DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
