//! Request middleware: session cookie handling, route guarding, extractors.

pub mod auth;
pub mod cookie;
pub mod guard;

pub use auth::{CurrentAdmin, RequireSuperAdmin};
pub use cookie::{SESSION_COOKIE_NAME, clear_session_cookie, session_cookie};
pub use guard::route_guard;
