//! Published content reads.
//!
//! The site deals in raw JSONB bodies: it selects the requested locale's
//! side of the bilingual document and serves it as-is, without knowing the
//! per-collection field shapes the admin binary enforces on write.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;

use sonaverse_core::Locale;

/// The four public content collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Press,
    Stories,
    Products,
    Pages,
}

impl Collection {
    /// Schema-qualified table name. Compile-time constant, never derived
    /// from request data.
    const fn table(self) -> &'static str {
        match self {
            Self::Press => "cms.press_release",
            Self::Stories => "cms.story",
            Self::Products => "cms.product",
            Self::Pages => "cms.page",
        }
    }
}

/// A published entry with the full bilingual body.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PublishedEntry {
    pub slug: String,
    pub content: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One entry reduced to a single locale, as served to the public.
#[derive(Debug, Clone, Serialize)]
pub struct LocalizedEntry {
    pub slug: String,
    pub content: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PublishedEntry {
    /// Pick one locale's side of the bilingual body. Both sides are
    /// required on write, so a missing side means a corrupted document;
    /// the Korean side is the fallback.
    #[must_use]
    pub fn localize(self, locale: Locale) -> LocalizedEntry {
        let content = self
            .content
            .get(locale.code())
            .or_else(|| self.content.get(Locale::Ko.code()))
            .cloned()
            .unwrap_or(serde_json::Value::Null);

        LocalizedEntry {
            slug: self.slug,
            content,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Read-only repository over the published subset of a collection.
pub struct PublicContentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PublicContentRepository<'a> {
    /// Create a new public content repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List published entries of a collection, newest first.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the query fails.
    pub async fn list_published(
        &self,
        collection: Collection,
    ) -> Result<Vec<PublishedEntry>, sqlx::Error> {
        sqlx::query_as::<_, PublishedEntry>(&format!(
            "SELECT slug, content, created_at, updated_at FROM {} \
             WHERE published ORDER BY created_at DESC",
            collection.table()
        ))
        .fetch_all(self.pool)
        .await
    }

    /// Get one published entry by slug. Unpublished entries are invisible.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the query fails.
    pub async fn get_published(
        &self,
        collection: Collection,
        slug: &str,
    ) -> Result<Option<PublishedEntry>, sqlx::Error> {
        sqlx::query_as::<_, PublishedEntry>(&format!(
            "SELECT slug, content, created_at, updated_at FROM {} \
             WHERE slug = $1 AND published",
            collection.table()
        ))
        .bind(slug)
        .fetch_optional(self.pool)
        .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn entry(content: serde_json::Value) -> PublishedEntry {
        PublishedEntry {
            slug: "bodeum".to_string(),
            content,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_localize_picks_requested_side() {
        let entry = entry(json!({
            "ko": {"title": "보듬"},
            "en": {"title": "BODUME"}
        }));

        let localized = entry.localize(Locale::En);
        assert_eq!(localized.content["title"], "BODUME");
    }

    #[test]
    fn test_localize_falls_back_to_korean() {
        let entry = entry(json!({ "ko": {"title": "보듬"} }));

        let localized = entry.localize(Locale::En);
        assert_eq!(localized.content["title"], "보듬");
    }
}
