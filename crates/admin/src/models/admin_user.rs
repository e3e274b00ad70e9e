//! Admin user domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use sonaverse_core::{AdminUserId, Email};

// Re-export AdminRole from core for convenience
pub use sonaverse_core::AdminRole;

/// An admin user (domain type).
///
/// Carries the password hash; never serialize this type to a client.
/// Use [`SafeAdminUser`] for anything that leaves the server.
#[derive(Debug, Clone)]
pub struct AdminUser {
    /// Unique admin user ID.
    pub id: AdminUserId,
    /// Admin's email address (unique, normalized).
    pub email: Email,
    /// Admin's display name.
    pub name: String,
    /// Argon2id password hash.
    pub password_hash: String,
    /// Admin's role/permission level.
    pub role: AdminRole,
    /// Inactive accounts cannot log in.
    pub active: bool,
    /// The seeded super-admin account cannot be deleted.
    pub protected: bool,
    /// When the admin last logged in, if ever.
    pub last_login_at: Option<DateTime<Utc>>,
    /// When the admin was created.
    pub created_at: DateTime<Utc>,
    /// When the admin was last updated.
    pub updated_at: DateTime<Utc>,
}

/// The safe user projection: the subset of an admin record that may be
/// returned to the client. Excludes the password hash and internal flags.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SafeAdminUser {
    pub id: AdminUserId,
    pub email: Email,
    pub name: String,
    pub role: AdminRole,
}

impl From<&AdminUser> for SafeAdminUser {
    fn from(user: &AdminUser) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_user() -> AdminUser {
        AdminUser {
            id: AdminUserId::new(1),
            email: Email::parse("admin@sonaverse.kr").unwrap(),
            name: "관리자".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_string(),
            role: AdminRole::SuperAdmin,
            active: true,
            protected: true,
            last_login_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_safe_projection_excludes_hash() {
        let user = sample_user();
        let safe = SafeAdminUser::from(&user);
        let json = serde_json::to_string(&safe).unwrap();
        assert!(json.contains("admin@sonaverse.kr"));
        assert!(!json.contains("argon2"));
        assert!(!json.contains("password"));
    }
}
