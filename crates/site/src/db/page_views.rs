//! Page-view recording. Appended on every public page request; aggregated
//! by the admin dashboard.

use sqlx::PgPool;

/// Write handle for the `cms.page_view` log.
#[derive(Clone)]
pub struct PageViewRecorder {
    pool: PgPool,
}

impl PageViewRecorder {
    /// Create a new page-view recorder. Owns a pool handle so records can
    /// be written from spawned tasks after the response is sent.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append one page view.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the insert fails.
    pub async fn record(
        &self,
        path: &str,
        locale: &str,
        referrer: Option<&str>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO cms.page_view (path, locale, referrer) VALUES ($1, $2, $3)")
            .bind(path)
            .bind(locale)
            .bind(referrer)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
