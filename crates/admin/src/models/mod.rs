//! Domain models for the admin CMS.
//!
//! These types represent validated domain objects separate from database
//! row types. Database rows are converted into them at the repository
//! boundary.

pub mod admin_user;
pub mod content;
pub mod inquiry;
pub mod settings;

pub use admin_user::{AdminUser, SafeAdminUser};
pub use content::{
    ContentKind, ContentRecord, Page, PageFields, PressFields, PressRelease, Product,
    ProductFields, Story, StoryFields,
};
pub use inquiry::{Inquiry, InquiryStatusChange};
pub use settings::SiteSettings;
