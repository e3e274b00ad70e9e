//! Read access to the admin-managed settings document.

use sqlx::PgPool;

/// Read-only view of `cms.site_settings`.
pub struct SettingsReader<'a> {
    pool: &'a PgPool,
}

impl<'a> SettingsReader<'a> {
    /// Create a new settings reader.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// The raw settings document, if one has been written.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the query fails.
    pub async fn document(&self) -> Result<Option<serde_json::Value>, sqlx::Error> {
        let row: Option<(serde_json::Value,)> =
            sqlx::query_as("SELECT data FROM cms.site_settings WHERE id = 1")
                .fetch_optional(self.pool)
                .await?;
        Ok(row.map(|(data,)| data))
    }

    /// Whether the inquiry form currently accepts submissions. Defaults to
    /// open when no settings row exists.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the query fails.
    pub async fn inquiries_open(&self) -> Result<bool, sqlx::Error> {
        Ok(self
            .document()
            .await?
            .and_then(|data| data.get("inquiries_open").and_then(serde_json::Value::as_bool))
            .unwrap_or(true))
    }
}
