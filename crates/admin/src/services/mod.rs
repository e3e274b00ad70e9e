//! Business logic services for the admin panel.

pub mod auth;
pub mod token;

pub use auth::AuthError;
pub use token::{SessionClaims, TokenService};
