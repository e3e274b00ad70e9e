//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors returned by the authentication service.
///
/// The credential-failure paths (unknown email, wrong password, deactivated
/// account) all collapse into [`AuthError::InvalidCredentials`] before
/// leaving this module, so responses never reveal whether an email is
/// registered.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The submitted email is not a well-formed address. Client-side
    /// validation error, safe to report as such.
    #[error("올바른 이메일 형식이 아닙니다.")]
    InvalidEmail,

    /// The submitted password is shorter than the minimum. Client-side
    /// validation error, safe to report as such.
    #[error("비밀번호는 최소 8자 이상이어야 합니다.")]
    PasswordTooShort,

    /// The credentials do not match an active account.
    #[error("이메일 또는 비밀번호가 올바르지 않습니다.")]
    InvalidCredentials,

    /// Password hashing or verification failed mechanically.
    #[error("password hashing error")]
    Hashing,

    /// Underlying database failure.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
