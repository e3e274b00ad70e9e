//! Route assembly for the admin panel.
//!
//! # Route map
//!
//! | Method | Path | Auth |
//! |---|---|---|
//! | POST | `/api/auth/login` | none |
//! | POST/GET | `/api/auth/logout` | none |
//! | GET | `/api/auth/me` | session |
//! | GET/POST | `/api/press`, `/api/stories`, `/api/products`, `/api/pages` | session (writes need editor) |
//! | GET/PUT/DELETE | `/api/{collection}/{slug}` | session (writes need editor) |
//! | PATCH | `/api/{collection}/{slug}/published` | editor |
//! | GET | `/api/inquiries`, `/api/inquiries/{id}` | session |
//! | PATCH | `/api/inquiries/{id}/status` | editor |
//! | GET/PUT | `/api/settings` | session (writes need editor) |
//! | GET/POST | `/api/admin-users` | super admin |
//! | DELETE | `/api/admin-users/{id}` | super admin |
//! | PATCH | `/api/admin-users/{id}/active` | super admin |
//! | GET | `/api/dashboard/summary` | session |
//! | GET | `/admin`, `/admin/login`, `/admin/{*rest}` | route guard |
//! | GET | `/health` | none |

pub mod admin_users;
pub mod auth;
pub mod content;
pub mod dashboard;
pub mod inquiries;
pub mod pages;
pub mod settings;

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::middleware::route_guard;
use crate::models::content::{Page, PressRelease, Product, Story};
use crate::state::AppState;

/// Assemble the full application router.
pub fn build_router(state: AppState) -> Router {
    let guarded_pages = pages::router().layer(axum::middleware::from_fn_with_state(
        state.clone(),
        route_guard,
    ));

    Router::new()
        .merge(auth::router())
        .merge(content::router::<PressRelease>("press"))
        .merge(content::router::<Story>("stories"))
        .merge(content::router::<Product>("products"))
        .merge(content::router::<Page>("pages"))
        .merge(inquiries::router())
        .merge(admin_users::router())
        .merge(settings::router())
        .merge(dashboard::router())
        .merge(guarded_pages)
        .route("/health", get(health))
        .with_state(state)
}

/// Liveness probe.
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
