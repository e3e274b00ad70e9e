//! Generic repository over the four content collections.
//!
//! One repository type instantiated per [`ContentKind`]; the table name comes
//! from the kind's `TABLE` constant, never from request data.

use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use sonaverse_core::{Bilingual, Slug};

use super::RepositoryError;
use crate::models::content::{ContentKind, ContentRecord};

/// Internal row type shared by all content tables.
#[derive(Debug, sqlx::FromRow)]
struct ContentRow {
    id: i32,
    slug: Slug,
    content: serde_json::Value,
    published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl<K: ContentKind> TryFrom<ContentRow> for ContentRecord<K> {
    type Error = RepositoryError;

    fn try_from(row: ContentRow) -> Result<Self, Self::Error> {
        let content: Bilingual<K::Fields> =
            serde_json::from_value(row.content).map_err(|e| {
                RepositoryError::DataCorruption(format!(
                    "invalid {} body for slug '{}': {e}",
                    K::RESOURCE,
                    row.slug
                ))
            })?;

        Ok(Self {
            id: row.id,
            slug: row.slug,
            content,
            published: row.published,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const SELECT_COLUMNS: &str = "id, slug, content, published, created_at, updated_at";

/// Repository for a content collection of kind `K`.
pub struct ContentRepository<'a, K: ContentKind> {
    pool: &'a PgPool,
    _kind: PhantomData<K>,
}

impl<'a, K: ContentKind> ContentRepository<'a, K> {
    /// Create a new content repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            pool,
            _kind: PhantomData,
        }
    }

    fn serialize_body(content: &Bilingual<K::Fields>) -> Result<serde_json::Value, RepositoryError> {
        serde_json::to_value(content).map_err(|e| {
            RepositoryError::DataCorruption(format!("unserializable {} body: {e}", K::RESOURCE))
        })
    }

    /// List all records, newest first. Includes unpublished records.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored body fails to parse.
    pub async fn list_all(&self) -> Result<Vec<ContentRecord<K>>, RepositoryError> {
        let rows = sqlx::query_as::<_, ContentRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM {} ORDER BY created_at DESC",
            K::TABLE
        ))
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get a record by its slug.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored body fails to parse.
    pub async fn get_by_slug(
        &self,
        slug: &Slug,
    ) -> Result<Option<ContentRecord<K>>, RepositoryError> {
        let row = sqlx::query_as::<_, ContentRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM {} WHERE slug = $1",
            K::TABLE
        ))
        .bind(slug)
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Insert a new record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the slug is already taken.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        slug: &Slug,
        content: &Bilingual<K::Fields>,
        published: bool,
    ) -> Result<ContentRecord<K>, RepositoryError> {
        let body = Self::serialize_body(content)?;

        let row = sqlx::query_as::<_, ContentRow>(&format!(
            "INSERT INTO {} (slug, content, published) \
             VALUES ($1, $2, $3) \
             RETURNING {SELECT_COLUMNS}",
            K::TABLE
        ))
        .bind(slug)
        .bind(body)
        .bind(published)
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::from_sqlx(e, "slug already exists"))?;

        row.try_into()
    }

    /// Replace the body and publication flag of an existing record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no record has this slug.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        slug: &Slug,
        content: &Bilingual<K::Fields>,
        published: bool,
    ) -> Result<ContentRecord<K>, RepositoryError> {
        let body = Self::serialize_body(content)?;

        let row = sqlx::query_as::<_, ContentRow>(&format!(
            "UPDATE {} SET content = $2, published = $3, updated_at = NOW() \
             WHERE slug = $1 \
             RETURNING {SELECT_COLUMNS}",
            K::TABLE
        ))
        .bind(slug)
        .bind(body)
        .bind(published)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        row.try_into()
    }

    /// Flip the publication flag without touching the body.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no record has this slug.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn set_published(
        &self,
        slug: &Slug,
        published: bool,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(&format!(
            "UPDATE {} SET published = $2, updated_at = NOW() WHERE slug = $1",
            K::TABLE
        ))
        .bind(slug)
        .bind(published)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Delete a record by slug.
    ///
    /// # Returns
    ///
    /// Returns `true` if a record was deleted, `false` if none had this slug.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, slug: &Slug) -> Result<bool, RepositoryError> {
        let result = sqlx::query(&format!("DELETE FROM {} WHERE slug = $1", K::TABLE))
            .bind(slug)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count all records of this kind.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count: (i64,) =
            sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", K::TABLE))
                .fetch_one(self.pool)
                .await?;

        Ok(count.0)
    }
}
