//! Route assembly for the public site.
//!
//! # Route map
//!
//! | Method | Path | Notes |
//! |---|---|---|
//! | GET | `/api/home` | settings + highlights, `?lang=ko\|en` |
//! | GET | `/api/press[/{slug}]` | published only |
//! | GET | `/api/stories[/{slug}]` | published only |
//! | GET | `/api/products[/{slug}]` | published only |
//! | GET | `/api/pages/{slug}` | published only |
//! | POST | `/api/inquiries` | rate-limited per IP |
//! | GET | `/health` | liveness |

pub mod content;
pub mod home;
pub mod inquiries;

use axum::{Json, Router, routing::get, routing::post};
use serde_json::{Value, json};

use crate::middleware::inquiry_rate_limiter;
use crate::state::AppState;

/// Assemble the full application router.
pub fn build_router(state: AppState) -> Router {
    let inquiry = Router::new()
        .route("/api/inquiries", post(inquiries::submit))
        .layer(inquiry_rate_limiter());

    Router::new()
        .route("/api/home", get(home::home))
        .route("/api/press", get(content::list_press))
        .route("/api/press/{slug}", get(content::get_press))
        .route("/api/stories", get(content::list_stories))
        .route("/api/stories/{slug}", get(content::get_story))
        .route("/api/products", get(content::list_products))
        .route("/api/products/{slug}", get(content::get_product))
        .route("/api/pages", get(content::list_pages))
        .route("/api/pages/{slug}", get(content::get_page))
        .merge(inquiry)
        .route("/health", get(health))
        .with_state(state)
}

/// Liveness probe.
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
