//! Session cookie construction.
//!
//! The cookie carries the JWT and nothing else. No `Max-Age`/`Expires` is
//! set: the browser drops it when the session ends, and the token's own
//! `exp` claim bounds its lifetime on the server side regardless.

use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::config::AdminConfig;

/// Name of the session cookie.
pub const SESSION_COOKIE_NAME: &str = "sonaverse_admin_session";

/// Build the session cookie wrapping a freshly issued token.
#[must_use]
pub fn session_cookie(config: &AdminConfig, token: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE_NAME, token);
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Strict);
    cookie.set_path("/");
    cookie.set_secure(config.is_secure());
    if let Some(domain) = &config.cookie_domain {
        cookie.set_domain(domain.clone());
    }
    cookie
}

/// Build a cookie that removes the session cookie.
///
/// Attributes must match the ones the cookie was set with or browsers
/// treat it as a different cookie and leave the original in place.
#[must_use]
pub fn clear_session_cookie(config: &AdminConfig) -> Cookie<'static> {
    let mut cookie = session_cookie(config, String::new());
    cookie.make_removal();
    cookie
}
