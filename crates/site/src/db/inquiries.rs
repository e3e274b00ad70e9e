//! Inquiry intake. The site only inserts; triage happens in the admin panel.

use sqlx::PgPool;

/// Validated fields of a new inquiry, ready for insertion.
#[derive(Debug)]
pub struct NewInquiry<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub subject: &'a str,
    pub message: &'a str,
}

/// Write-side access for public inquiry submissions.
pub struct InquiryIntake<'a> {
    pool: &'a PgPool,
}

impl<'a> InquiryIntake<'a> {
    /// Create a new inquiry intake handle.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new inquiry in the `new` status and return its ID.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the insert fails.
    pub async fn submit(&self, inquiry: &NewInquiry<'_>) -> Result<i32, sqlx::Error> {
        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO cms.inquiry (name, email, phone, subject, message) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(inquiry.name)
        .bind(inquiry.email)
        .bind(inquiry.phone)
        .bind(inquiry.subject)
        .bind(inquiry.message)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }
}
