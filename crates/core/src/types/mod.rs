//! Core types for the Sonaverse CMS.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod locale;
pub mod slug;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use locale::{Bilingual, Locale};
pub use slug::{Slug, SlugError};
pub use status::*;
