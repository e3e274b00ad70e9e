//! Login, logout, and "who am I" endpoints.

use axum::extract::State;
use axum::response::Redirect;
use axum::{Json, Router, routing::get, routing::post};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use crate::error::AppError;
use crate::db::AdminUserRepository;
use crate::middleware::{CurrentAdmin, clear_session_cookie, session_cookie};
use crate::models::admin_user::SafeAdminUser;
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout).get(logout_redirect))
        .route("/api/auth/me", get(me))
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

/// POST /api/auth/login
///
/// Validates the submitted credentials and, on success, sets the session
/// cookie and returns the safe user projection. All credential failures
/// share one 401 body.
async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> Result<(CookieJar, Json<Value>), AppError> {
    let repo = AdminUserRepository::new(&state.pool);
    let user = services::auth::authenticate(&repo, &body.email, &body.password).await?;

    let token = state
        .tokens
        .issue(&user)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    info!(user_id = user.id.as_i32(), "admin login");
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(user.id.as_i32().to_string()),
            email: Some(user.email.as_str().to_owned()),
            ..Default::default()
        }));
    });

    let jar = jar.add(session_cookie(&state.config, token));
    Ok((jar, Json(json!({ "user": SafeAdminUser::from(&user) }))))
}

/// POST /api/auth/logout
///
/// Clears the session cookie. The token itself stays valid until expiry;
/// there is no server-side revocation.
async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Json<Value>) {
    sentry::configure_scope(|scope| scope.set_user(None));
    let jar = jar.add(clear_session_cookie(&state.config));
    (jar, Json(json!({ "success": true })))
}

/// GET /api/auth/logout
///
/// Same cookie clearing, but redirects to the login page so a plain
/// browser navigation works.
async fn logout_redirect(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    sentry::configure_scope(|scope| scope.set_user(None));
    let jar = jar.add(clear_session_cookie(&state.config));
    (jar, Redirect::to("/admin/login"))
}

/// GET /api/auth/me
///
/// Returns the safe user projection from the session claims, or 401.
async fn me(CurrentAdmin(claims): CurrentAdmin) -> Result<Json<Value>, AppError> {
    let id = claims.user_id().ok_or(AppError::Unauthorized)?;

    Ok(Json(json!({
        "user": {
            "id": id,
            "email": claims.email,
            "name": claims.name,
            "role": claims.role,
        }
    })))
}
