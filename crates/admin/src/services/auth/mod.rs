//! Authentication service: credential verification and password hashing.
//!
//! Login failures are enumeration-resistant. Unknown email, wrong password,
//! and deactivated account are indistinguishable to the caller, and the
//! argon2 verification work runs even when no account matches so that
//! response timing does not leak which emails exist.

pub mod error;

pub use error::AuthError;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use tracing::warn;

use sonaverse_core::Email;

use crate::db::AdminUserRepository;
use crate::models::admin_user::AdminUser;

/// Minimum password length, enforced at login and at account creation.
pub const MIN_PASSWORD_LENGTH: usize = 8;

// argon2id hash of an unguessable throwaway string. Verified against when no
// account matches so the request does the same amount of work either way.
const DUMMY_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$gZiV/M1gPc22ElAH/Jh1Hw$CWOrkoo7oJBQ/iyh7uJ0LO2aLEfrHwTWllSAxT0zRno";

/// Verify a login attempt and return the authenticated admin.
///
/// On success, `last_login_at` is updated before returning.
///
/// # Errors
///
/// - [`AuthError::InvalidEmail`] / [`AuthError::PasswordTooShort`] for
///   malformed input (these never hit the database)
/// - [`AuthError::InvalidCredentials`] for every credential failure
/// - [`AuthError::Repository`] for database errors
pub async fn authenticate(
    repo: &AdminUserRepository<'_>,
    email: &str,
    password: &str,
) -> Result<AdminUser, AuthError> {
    let email = Email::parse(email).map_err(|_| AuthError::InvalidEmail)?;

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::PasswordTooShort);
    }

    let user = repo.get_by_email(&email).await?;

    let Some(user) = user else {
        // Burn the same hashing work as the found-user path.
        let _ = verify_password(DUMMY_HASH, password);
        return Err(AuthError::InvalidCredentials);
    };

    if !verify_password(&user.password_hash, password) {
        return Err(AuthError::InvalidCredentials);
    }

    if !user.active {
        warn!(user_id = user.id.as_i32(), "login attempt on deactivated account");
        return Err(AuthError::InvalidCredentials);
    }

    repo.touch_last_login(user.id).await?;

    Ok(user)
}

/// Hash a password for storage with argon2id and a fresh random salt.
///
/// # Errors
///
/// Returns [`AuthError::PasswordTooShort`] for passwords under the minimum,
/// or [`AuthError::Hashing`] if hashing fails mechanically.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::PasswordTooShort);
    }

    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::Hashing)
}

/// Check a password against a stored argon2 hash.
///
/// An unparseable stored hash verifies as `false` rather than erroring;
/// the account is effectively locked until the hash is reset.
fn verify_password(stored_hash: &str, password: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        warn!("stored password hash is unparseable");
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("correct horse battery").unwrap();
        assert!(verify_password(&hash, "correct horse battery"));
        assert!(!verify_password(&hash, "wrong password"));
    }

    #[test]
    fn test_hash_rejects_short_password() {
        assert!(matches!(
            hash_password("short"),
            Err(AuthError::PasswordTooShort)
        ));
    }

    #[test]
    fn test_min_length_counts_chars_not_bytes() {
        // 8 Hangul characters is a valid length even though it is 24 bytes.
        assert!(hash_password("비밀번호여덟글자").is_ok());
    }

    #[test]
    fn test_verify_unparseable_hash_is_false() {
        assert!(!verify_password("not-a-phc-string", "whatever"));
        assert!(!verify_password("", "whatever"));
    }

    #[test]
    fn test_dummy_hash_is_parseable() {
        // The enumeration-resistance path depends on this constant staying a
        // valid PHC string.
        assert!(PasswordHash::new(DUMMY_HASH).is_ok());
    }
}
