//! Status and role enums shared across the site and admin binaries.

use serde::{Deserialize, Serialize};

/// Admin role with different permission levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "admin.admin_role", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    /// Full access to all admin features including account management.
    SuperAdmin,
    /// Full access to content management features.
    Admin,
    /// Read-only access to CMS data.
    Viewer,
}

impl std::fmt::Display for AdminRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SuperAdmin => write!(f, "super_admin"),
            Self::Admin => write!(f, "admin"),
            Self::Viewer => write!(f, "viewer"),
        }
    }
}

impl std::str::FromStr for AdminRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(Self::SuperAdmin),
            "admin" => Ok(Self::Admin),
            "viewer" => Ok(Self::Viewer),
            _ => Err(format!("invalid admin role: {s}")),
        }
    }
}

/// Processing status of a customer inquiry.
///
/// Transitions are recorded in an append-only history table rather than
/// overwritten, so the admin panel can show who moved an inquiry and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "cms.inquiry_status", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    /// Just submitted, nobody has looked at it.
    #[default]
    New,
    /// An admin is handling it.
    InProgress,
    /// A reply has been sent.
    Answered,
    /// No further action needed.
    Closed,
}

impl std::fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Answered => write!(f, "answered"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

impl std::str::FromStr for InquiryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "in_progress" => Ok(Self::InProgress),
            "answered" => Ok(Self::Answered),
            "closed" => Ok(Self::Closed),
            _ => Err(format!("invalid inquiry status: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_role_roundtrip() {
        for role in [AdminRole::SuperAdmin, AdminRole::Admin, AdminRole::Viewer] {
            let s = role.to_string();
            assert_eq!(s.parse::<AdminRole>().unwrap(), role);
        }
    }

    #[test]
    fn test_admin_role_invalid() {
        assert!("root".parse::<AdminRole>().is_err());
    }

    #[test]
    fn test_inquiry_status_roundtrip() {
        for status in [
            InquiryStatus::New,
            InquiryStatus::InProgress,
            InquiryStatus::Answered,
            InquiryStatus::Closed,
        ] {
            let s = status.to_string();
            assert_eq!(s.parse::<InquiryStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&AdminRole::SuperAdmin).unwrap();
        assert_eq!(json, "\"super_admin\"");
        let json = serde_json::to_string(&InquiryStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }
}
