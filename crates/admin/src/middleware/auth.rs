//! Session extractors for request handlers.
//!
//! [`CurrentAdmin`] is the authentication seam: handlers that take it can
//! only run with a valid session token in the cookie. [`RequireSuperAdmin`]
//! additionally demands the `super_admin` role.

use axum::extract::{FromRequestParts, OriginalUri};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;

use sonaverse_core::AdminRole;

use super::cookie::SESSION_COOKIE_NAME;
use super::guard::login_redirect_target;
use crate::error::AppError;
use crate::services::SessionClaims;
use crate::state::AppState;

/// The authenticated admin for the current request.
#[derive(Debug, Clone)]
pub struct CurrentAdmin(pub SessionClaims);

/// The authenticated admin, required to hold the `super_admin` role.
#[derive(Debug, Clone)]
pub struct RequireSuperAdmin(pub SessionClaims);

/// Rejection when a session is missing, invalid, or under-privileged.
#[derive(Debug)]
pub enum AuthRejection {
    /// API request without a valid session: plain 401.
    Unauthorized,
    /// Page request without a valid session: bounce to the login page.
    RedirectToLogin(String),
    /// Valid session but wrong role: 403.
    Forbidden,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => AppError::Unauthorized.into_response(),
            Self::RedirectToLogin(target) => Redirect::to(&target).into_response(),
            Self::Forbidden => AppError::Forbidden.into_response(),
        }
    }
}

fn claims_from_parts(parts: &Parts, state: &AppState) -> Option<SessionClaims> {
    let jar = CookieJar::from_headers(&parts.headers);
    let cookie = jar.get(SESSION_COOKIE_NAME)?;
    state.tokens.verify(cookie.value())
}

fn rejection_for(parts: &Parts) -> AuthRejection {
    // Nested routers strip their prefix from `parts.uri`; the original
    // request path survives in the `OriginalUri` extension.
    let uri = parts
        .extensions
        .get::<OriginalUri>()
        .map_or(&parts.uri, |original| &original.0);

    let path = uri.path();
    if path.starts_with("/api/") {
        AuthRejection::Unauthorized
    } else {
        let original = match uri.query() {
            Some(query) => format!("{path}?{query}"),
            None => path.to_owned(),
        };
        AuthRejection::RedirectToLogin(login_redirect_target(&original))
    }
}

impl FromRequestParts<AppState> for CurrentAdmin {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(claims) = claims_from_parts(parts, state) else {
            return Err(rejection_for(parts));
        };

        sentry::configure_scope(|scope| {
            scope.set_user(Some(sentry::User {
                id: Some(claims.sub.clone()),
                email: Some(claims.email.clone()),
                ..Default::default()
            }));
        });

        Ok(Self(claims))
    }
}

impl FromRequestParts<AppState> for RequireSuperAdmin {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentAdmin(claims) = CurrentAdmin::from_request_parts(parts, state).await?;

        if claims.role != AdminRole::SuperAdmin {
            return Err(AuthRejection::Forbidden);
        }

        Ok(Self(claims))
    }
}
