//! Admin user management commands.
//!
//! # Usage
//!
//! ```bash
//! # Create the protected super-admin (done once at deployment)
//! sonaverse-cli admin create -e ceo@sonaverse.kr -n "대표 관리자" -r super_admin \
//!     -p <password> --protected
//!
//! # Create a regular admin
//! sonaverse-cli admin create -e editor@sonaverse.kr -n "편집자" -r admin -p <password>
//! ```
//!
//! # Environment Variables
//!
//! - `ADMIN_DATABASE_URL` (or `DATABASE_URL`) - `PostgreSQL` connection string

use sonaverse_core::{AdminRole, Email};
use sqlx::PgPool;
use thiserror::Error;

/// Errors that can occur during admin operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// Invalid role.
    #[error("Invalid role: {0}. Valid roles: super_admin, admin, viewer")]
    InvalidRole(String),

    /// Invalid email.
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// Password rejected by the hashing service.
    #[error("Invalid password: {0}")]
    InvalidPassword(String),

    /// User already exists.
    #[error("Admin user already exists with email: {0}")]
    UserExists(String),
}

/// Create a new admin user with a hashed password.
///
/// # Returns
///
/// The ID of the created admin user.
///
/// # Errors
///
/// Returns `AdminError` on bad input, a duplicate email, or database failure.
pub async fn create_user(
    email: &str,
    name: &str,
    role: &str,
    password: &str,
    protected: bool,
) -> Result<i32, AdminError> {
    dotenvy::dotenv().ok();

    let role: AdminRole = role
        .parse()
        .map_err(|_| AdminError::InvalidRole(role.to_owned()))?;

    let email = Email::parse(email).map_err(|e| AdminError::InvalidEmail(e.to_string()))?;

    let password_hash = sonaverse_admin::services::auth::hash_password(password)
        .map_err(|e| AdminError::InvalidPassword(e.to_string()))?;

    let database_url = std::env::var("ADMIN_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| AdminError::MissingEnvVar("ADMIN_DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&database_url).await?;

    tracing::info!("Creating admin user: {} ({})", email, role);

    let existing: Option<(i32,)> =
        sqlx::query_as("SELECT id FROM admin.admin_user WHERE email = $1")
            .bind(email.as_str())
            .fetch_optional(&pool)
            .await?;

    if existing.is_some() {
        return Err(AdminError::UserExists(email.as_str().to_owned()));
    }

    let (user_id,): (i32,) = sqlx::query_as(
        "INSERT INTO admin.admin_user (email, name, password_hash, role, protected) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING id",
    )
    .bind(email.as_str())
    .bind(name)
    .bind(&password_hash)
    .bind(role)
    .bind(protected)
    .fetch_one(&pool)
    .await?;

    tracing::info!(
        "Admin user created successfully! ID: {}, Email: {}, Role: {}, Protected: {}",
        user_id,
        email,
        role,
        protected
    );

    Ok(user_id)
}
