//! Sonaverse Core - Shared types library.
//!
//! This crate provides common types used across all Sonaverse CMS components:
//! - `site` - Public bilingual marketing site
//! - `admin` - Authenticated admin CMS panel
//! - `cli` - Command-line tools for migrations and management
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, slugs, locales,
//!   and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
