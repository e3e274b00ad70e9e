//! Route guard for the `/admin` page shell.
//!
//! Two complementary rules:
//!
//! - Every `/admin/*` page except the login page requires a valid session;
//!   without one the browser is redirected to the login page with the
//!   original path carried in `returnUrl`.
//! - The login page itself redirects an already-authenticated browser back
//!   into the panel, honoring `returnUrl` only when it points inside
//!   `/admin` (anything else would be an open redirect).
//!
//! API routes are not guarded here; they carry their own 401 semantics via
//! the extractors in [`crate::middleware::auth`].

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;

use super::cookie::SESSION_COOKIE_NAME;
use crate::state::AppState;

/// Path of the login page, exempt from the session requirement.
pub const LOGIN_PATH: &str = "/admin/login";

/// Fallback destination after login when no usable `returnUrl` is present.
pub const DEFAULT_AFTER_LOGIN: &str = "/admin";

/// Session-guard middleware applied to the `/admin` page routes.
pub async fn route_guard(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();
    let authenticated = jar
        .get(SESSION_COOKIE_NAME)
        .and_then(|cookie| state.tokens.verify(cookie.value()))
        .is_some();

    if path == LOGIN_PATH {
        if authenticated {
            let target = request
                .uri()
                .query()
                .and_then(|q| query_param(q, "returnUrl"))
                .and_then(|raw| validate_return_url(&raw))
                .unwrap_or_else(|| DEFAULT_AFTER_LOGIN.to_owned());
            return Redirect::to(&target).into_response();
        }
        return next.run(request).await;
    }

    if !authenticated {
        let original = match request.uri().query() {
            Some(query) => format!("{path}?{query}"),
            None => path,
        };
        return Redirect::to(&login_redirect_target(&original)).into_response();
    }

    next.run(request).await
}

/// Build the login redirect carrying the original location, encoded exactly
/// once.
#[must_use]
pub fn login_redirect_target(original: &str) -> String {
    format!("{LOGIN_PATH}?returnUrl={}", urlencoding::encode(original))
}

/// Accept a `returnUrl` only when it stays inside the admin panel.
///
/// The value must be a relative path starting with `/admin`. Absolute URLs,
/// scheme-relative `//host` forms, and header-splitting control characters
/// are all rejected; callers fall back to [`DEFAULT_AFTER_LOGIN`].
#[must_use]
pub fn validate_return_url(raw: &str) -> Option<String> {
    if !raw.starts_with("/admin") {
        return None;
    }
    if raw.contains("://") || raw.contains('\\') {
        return None;
    }
    if raw.chars().any(char::is_control) {
        return None;
    }
    Some(raw.to_owned())
}

/// Extract and percent-decode one query parameter.
fn query_param(query: &str, key: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        if k == key {
            urlencoding::decode(v).ok().map(|s| s.into_owned())
        } else {
            None
        }
    })
}
