//! Site error taxonomy and HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errors the public site handlers can fail with.
#[derive(Debug, Error)]
pub enum SiteError {
    /// Malformed request (400).
    #[error("{0}")]
    Validation(String),

    /// Missing or unpublished content (404).
    #[error("요청한 콘텐츠를 찾을 수 없습니다.")]
    NotFound,

    /// Storage or unexpected failure (500). Detail logged, never sent.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for SiteError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => Self::NotFound,
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(error = %self, "request failed");
            sentry::capture_message(&self.to_string(), sentry::Level::Error);
        }

        let message = if status.is_server_error() {
            "서버 오류가 발생했습니다.".to_owned()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
