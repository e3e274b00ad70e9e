//! Customer inquiry domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use sonaverse_core::{AdminUserId, Email, InquiryId, InquiryStatus};

/// A customer inquiry submitted through the public site.
#[derive(Debug, Clone, Serialize)]
pub struct Inquiry {
    pub id: InquiryId,
    pub name: String,
    pub email: Email,
    /// Optional phone number, as typed.
    pub phone: Option<String>,
    /// Free-form subject line.
    pub subject: String,
    pub message: String,
    pub status: InquiryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One entry of an inquiry's status history (append-only).
#[derive(Debug, Clone, Serialize)]
pub struct InquiryStatusChange {
    pub inquiry_id: InquiryId,
    pub status: InquiryStatus,
    /// The admin who made the change.
    pub changed_by: AdminUserId,
    /// Optional note attached to the change.
    pub note: Option<String>,
    pub changed_at: DateTime<Utc>,
}
