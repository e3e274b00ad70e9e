//! Page-view recording middleware.
//!
//! Every successful GET to a content path is appended to `cms.page_view`
//! for the admin dashboard. Recording happens in a spawned task after the
//! response is produced; a failed insert never affects the response.

use axum::extract::{Request, State};
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use sonaverse_core::Locale;

use crate::state::AppState;

/// Record page views for successful GET requests.
pub async fn page_view_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let should_record = request.method() == Method::GET
        && !request.uri().path().starts_with("/health");

    let path = request.uri().path().to_owned();
    let locale = Locale::from_param(
        request
            .uri()
            .query()
            .and_then(|q| q.split('&').find_map(|pair| pair.strip_prefix("lang="))),
    );
    let referrer = request
        .headers()
        .get("referer")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let response = next.run(request).await;

    if should_record && response.status().is_success() {
        let recorder = state.page_views.clone();
        tokio::spawn(async move {
            if let Err(e) = recorder
                .record(&path, locale.code(), referrer.as_deref())
                .await
            {
                debug!(error = %e, "page view insert failed");
            }
        });
    }

    response
}
