//! Customer inquiry repository.
//!
//! Status changes are written transactionally with an append-only history
//! row so the audit trail can never drift from the current status.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use sonaverse_core::{AdminUserId, Email, InquiryId, InquiryStatus};

use super::RepositoryError;
use crate::models::inquiry::{Inquiry, InquiryStatusChange};

#[derive(Debug, sqlx::FromRow)]
struct InquiryRow {
    id: i32,
    name: String,
    email: String,
    phone: Option<String>,
    subject: String,
    message: String,
    status: InquiryStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<InquiryRow> for Inquiry {
    type Error = RepositoryError;

    fn try_from(row: InquiryRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: InquiryId::new(row.id),
            name: row.name,
            email,
            phone: row.phone,
            subject: row.subject,
            message: row.message,
            status: row.status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct StatusHistoryRow {
    inquiry_id: i32,
    status: InquiryStatus,
    changed_by: i32,
    note: Option<String>,
    changed_at: DateTime<Utc>,
}

impl From<StatusHistoryRow> for InquiryStatusChange {
    fn from(row: StatusHistoryRow) -> Self {
        Self {
            inquiry_id: InquiryId::new(row.inquiry_id),
            status: row.status,
            changed_by: AdminUserId::new(row.changed_by),
            note: row.note,
            changed_at: row.changed_at,
        }
    }
}

const SELECT_COLUMNS: &str =
    "id, name, email, phone, subject, message, status, created_at, updated_at";

/// Repository for customer inquiries.
pub struct InquiryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> InquiryRepository<'a> {
    /// Create a new inquiry repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List inquiries, newest first, optionally filtered by status.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn list(
        &self,
        status: Option<InquiryStatus>,
    ) -> Result<Vec<Inquiry>, RepositoryError> {
        let rows = match status {
            Some(status) => {
                sqlx::query_as::<_, InquiryRow>(&format!(
                    "SELECT {SELECT_COLUMNS} FROM cms.inquiry \
                     WHERE status = $1 ORDER BY created_at DESC"
                ))
                .bind(status)
                .fetch_all(self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, InquiryRow>(&format!(
                    "SELECT {SELECT_COLUMNS} FROM cms.inquiry ORDER BY created_at DESC"
                ))
                .fetch_all(self.pool)
                .await?
            }
        };

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get an inquiry by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn get_by_id(&self, id: InquiryId) -> Result<Option<Inquiry>, RepositoryError> {
        let row = sqlx::query_as::<_, InquiryRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM cms.inquiry WHERE id = $1"
        ))
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Get the status history of an inquiry, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn history(
        &self,
        id: InquiryId,
    ) -> Result<Vec<InquiryStatusChange>, RepositoryError> {
        let rows = sqlx::query_as::<_, StatusHistoryRow>(
            "SELECT inquiry_id, status, changed_by, note, changed_at \
             FROM cms.inquiry_status_history \
             WHERE inquiry_id = $1 ORDER BY changed_at ASC",
        )
        .bind(id.as_i32())
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Change an inquiry's status, appending a history entry in the same
    /// transaction.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the inquiry doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update_status(
        &self,
        id: InquiryId,
        status: InquiryStatus,
        changed_by: AdminUserId,
        note: Option<&str>,
    ) -> Result<Inquiry, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, InquiryRow>(&format!(
            "UPDATE cms.inquiry SET status = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {SELECT_COLUMNS}"
        ))
        .bind(id.as_i32())
        .bind(status)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        sqlx::query(
            "INSERT INTO cms.inquiry_status_history (inquiry_id, status, changed_by, note) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(id.as_i32())
        .bind(status)
        .bind(changed_by.as_i32())
        .bind(note)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        row.try_into()
    }

    /// Count inquiries currently in the `New` status.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count_new(&self) -> Result<i64, RepositoryError> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM cms.inquiry WHERE status = $1")
                .bind(InquiryStatus::New)
                .fetch_one(self.pool)
                .await?;

        Ok(count.0)
    }
}
