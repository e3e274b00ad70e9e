//! Database operations for the admin `PostgreSQL` connection.
//!
//! # Database: `sonaverse`
//!
//! One database shared with the site binary. Two schemas:
//!
//! - `cms` - Content collections served by the public site and edited here:
//!   `press_release`, `story`, `product`, `page`, `inquiry`,
//!   `inquiry_status_history`, `site_settings`, `page_view`
//! - `admin` - `admin_user` accounts (never touched by the site binary)
//!
//! # Queries
//!
//! Queries use the runtime-checked `sqlx::query_as` form with `FromRow`
//! row structs converted into domain types at this boundary.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/admin/migrations/` and run via:
//! ```bash
//! cargo run -p sonaverse-cli -- migrate
//! ```

pub mod admin_users;
pub mod analytics;
pub mod content;
pub mod inquiries;
pub mod settings;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use admin_users::AdminUserRepository;
pub use analytics::AnalyticsRepository;
pub use content::ContentRepository;
pub use inquiries::InquiryRepository;
pub use settings::SettingsRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email or slug).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

impl RepositoryError {
    /// Map a sqlx error to `Conflict` when it is a unique violation,
    /// otherwise pass it through as `Database`.
    pub(crate) fn from_sqlx(e: sqlx::Error, conflict_msg: &str) -> Self {
        if let sqlx::Error::Database(ref db_err) = e
            && db_err.is_unique_violation()
        {
            return Self::Conflict(conflict_msg.to_owned());
        }
        Self::Database(e)
    }
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
