//! Read-mostly database access for the public site.
//!
//! The site reads published content from the `cms` schema the admin binary
//! writes, and appends inquiries and page views. It never touches the
//! `admin` schema.

pub mod content;
pub mod inquiries;
pub mod page_views;
pub mod settings;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

pub use content::{Collection, PublicContentRepository};
pub use inquiries::InquiryIntake;
pub use page_views::PageViewRecorder;
pub use settings::SettingsReader;

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
