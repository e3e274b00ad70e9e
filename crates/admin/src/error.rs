//! Application error taxonomy and HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::db::RepositoryError;
use crate::services::AuthError;

/// Top-level application error. Everything a handler can fail with maps
/// into one of these, and each variant maps to a status code.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request is malformed or violates a business rule (400).
    #[error("{0}")]
    Validation(String),

    /// Login rejected (401). One message for every credential failure so
    /// responses never confirm whether an email is registered.
    #[error("이메일 또는 비밀번호가 올바르지 않습니다.")]
    LoginFailed,

    /// No valid session (401).
    #[error("인증이 필요합니다.")]
    Unauthorized,

    /// Valid session but insufficient role (403).
    #[error("권한이 없습니다.")]
    Forbidden,

    /// Resource does not exist (404).
    #[error("요청한 리소스를 찾을 수 없습니다.")]
    NotFound,

    /// Uniqueness conflict, e.g. duplicate slug or email (409).
    #[error("{0}")]
    Conflict(String),

    /// Anything unexpected (500). The detail is logged, never sent.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::LoginFailed | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound => Self::NotFound,
            RepositoryError::Conflict(msg) => Self::Conflict(msg),
            RepositoryError::Database(_) | RepositoryError::DataCorruption(_) => {
                Self::Internal(e.to_string())
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::InvalidEmail | AuthError::PasswordTooShort => {
                Self::Validation(e.to_string())
            }
            AuthError::InvalidCredentials => Self::LoginFailed,
            AuthError::Hashing => Self::Internal("password hashing error".to_owned()),
            AuthError::Repository(inner) => inner.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!(error = %self, "request failed");
            sentry::capture_message(&self.to_string(), sentry::Level::Error);
        }

        // Internal details are logged above but never serialized.
        let message = if status.is_server_error() {
            "서버 오류가 발생했습니다.".to_owned()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::Validation("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::LoginFailed.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::Forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Conflict("x".into()).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_credential_failures_share_one_message() {
        let from_auth: AppError = AuthError::InvalidCredentials.into();
        assert_eq!(
            from_auth.to_string(),
            "이메일 또는 비밀번호가 올바르지 않습니다."
        );
        assert!(matches!(from_auth, AppError::LoginFailed));
    }

    #[test]
    fn test_repository_internal_detail_not_in_variant_message() {
        let err: AppError = RepositoryError::DataCorruption("bad row".into()).into();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
