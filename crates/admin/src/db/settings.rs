//! Site settings repository.
//!
//! Settings live in a single row (`id = 1`) as a JSONB document; reads fall
//! back to the built-in defaults when no row has been written yet.

use sqlx::PgPool;

use super::RepositoryError;
use crate::models::settings::SiteSettings;

/// Repository for the single global settings document.
pub struct SettingsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SettingsRepository<'a> {
    /// Create a new settings repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Load the settings document, or defaults when none is stored.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored document fails to parse.
    pub async fn get(&self) -> Result<SiteSettings, RepositoryError> {
        let row: Option<(serde_json::Value,)> =
            sqlx::query_as("SELECT data FROM cms.site_settings WHERE id = 1")
                .fetch_optional(self.pool)
                .await?;

        match row {
            Some((data,)) => serde_json::from_value(data).map_err(|e| {
                RepositoryError::DataCorruption(format!("invalid settings document: {e}"))
            }),
            None => Ok(SiteSettings::default()),
        }
    }

    /// Replace the settings document (upsert, last-write-wins).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn put(&self, settings: &SiteSettings) -> Result<(), RepositoryError> {
        let data = serde_json::to_value(settings).map_err(|e| {
            RepositoryError::DataCorruption(format!("unserializable settings document: {e}"))
        })?;

        sqlx::query(
            "INSERT INTO cms.site_settings (id, data, updated_at) \
             VALUES (1, $1, NOW()) \
             ON CONFLICT (id) DO UPDATE SET data = EXCLUDED.data, updated_at = NOW()",
        )
        .bind(data)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}
