//! Session token issuance and verification.
//!
//! Sessions are stateless HS256 JWTs carried in an `httpOnly` cookie. There
//! is no server-side session store and no revocation list: a token stays
//! valid until its 8-hour expiry regardless of logout, so the expiry window
//! is the only bound on a leaked token's lifetime.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use sonaverse_core::{AdminRole, AdminUserId};

use crate::models::admin_user::AdminUser;

/// Fixed `iss` claim; tokens from any other issuer are rejected.
pub const ISSUER: &str = "sonaverse";

/// Fixed `aud` claim; tokens minted for any other audience are rejected.
pub const AUDIENCE: &str = "sonaverse-admin";

/// Session lifetime. Expiry is absolute from issuance; tokens are never
/// refreshed or extended mid-session.
pub const SESSION_LIFETIME_SECS: i64 = 8 * 60 * 60;

/// Errors that can occur when issuing a token.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to sign session token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

/// Claims embedded in a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Admin user ID, stringified.
    pub sub: String,
    pub email: String,
    pub name: String,
    pub role: AdminRole,
    /// Issued-at, seconds since epoch.
    pub iat: i64,
    /// Expiry, seconds since epoch.
    pub exp: i64,
    pub iss: String,
    pub aud: String,
}

impl SessionClaims {
    /// The subject parsed back into a typed user ID, if well-formed.
    #[must_use]
    pub fn user_id(&self) -> Option<AdminUserId> {
        self.sub.parse::<i32>().ok().map(AdminUserId::new)
    }
}

/// Signs and verifies session tokens with a shared HS256 secret.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Create a token service from the configured signing secret.
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        // No clock slack: a token expired by one second is expired.
        validation.leeway = 0;
        validation.set_issuer(&[ISSUER]);
        validation.set_audience(&[AUDIENCE]);

        Self {
            encoding_key: EncodingKey::from_secret(bytes),
            decoding_key: DecodingKey::from_secret(bytes),
            validation,
        }
    }

    /// Issue a session token for a freshly authenticated admin.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Signing` if encoding fails.
    pub fn issue(&self, user: &AdminUser) -> Result<String, TokenError> {
        self.issue_at(user, Utc::now())
    }

    /// Issue a token as of a specific instant. Split out so tests can mint
    /// already-expired tokens deterministically.
    pub(crate) fn issue_at(
        &self,
        user: &AdminUser,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = SessionClaims {
            sub: user.id.as_i32().to_string(),
            email: user.email.as_str().to_owned(),
            name: user.name.clone(),
            role: user.role,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(SESSION_LIFETIME_SECS)).timestamp(),
            iss: ISSUER.to_owned(),
            aud: AUDIENCE.to_owned(),
        };

        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )?)
    }

    /// Verify a token and return its claims.
    ///
    /// Returns `None` for anything unacceptable - bad signature, expired,
    /// wrong issuer or audience, garbage input. Verification never
    /// distinguishes the failure modes to callers; an invalid session is an
    /// invalid session.
    #[must_use]
    pub fn verify(&self, token: &str) -> Option<SessionClaims> {
        jsonwebtoken::decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .ok()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Duration;
    use sonaverse_core::Email;

    use super::*;

    fn test_user() -> AdminUser {
        AdminUser {
            id: AdminUserId::new(7),
            email: Email::parse("ceo@sonaverse.kr").unwrap(),
            name: "대표 관리자".to_string(),
            password_hash: "$argon2id$irrelevant".to_string(),
            role: AdminRole::SuperAdmin,
            active: true,
            protected: true,
            last_login_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service() -> TokenService {
        TokenService::new(&SecretString::from(
            "kX9#mP2$vL8@qR4!wN6^zT1&bY5*cF3%".to_string(),
        ))
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let service = service();
        let token = service.issue(&test_user()).unwrap();

        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.email, "ceo@sonaverse.kr");
        assert_eq!(claims.role, AdminRole::SuperAdmin);
        assert_eq!(claims.iss, ISSUER);
        assert_eq!(claims.aud, AUDIENCE);
        assert_eq!(claims.exp - claims.iat, SESSION_LIFETIME_SECS);
        assert_eq!(claims.user_id(), Some(AdminUserId::new(7)));
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = service();
        // Issued 8 hours and 1 second ago, so it expired 1 second ago.
        let issued = Utc::now() - Duration::seconds(SESSION_LIFETIME_SECS + 1);
        let token = service.issue_at(&test_user(), issued).unwrap();

        assert!(service.verify(&token).is_none());
    }

    #[test]
    fn test_token_valid_just_before_expiry() {
        let service = service();
        // 10 seconds of lifetime left.
        let issued = Utc::now() - Duration::seconds(SESSION_LIFETIME_SECS - 10);
        let token = service.issue_at(&test_user(), issued).unwrap();

        assert!(service.verify(&token).is_some());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = service().issue(&test_user()).unwrap();
        let other = TokenService::new(&SecretString::from(
            "dJ4!hG7@sK2#fA9$lM5^xB8&nV3*qW6%".to_string(),
        ));

        assert!(other.verify(&token).is_none());
    }

    #[test]
    fn test_garbage_input_rejected() {
        let service = service();
        assert!(service.verify("").is_none());
        assert!(service.verify("not.a.jwt").is_none());
        assert!(service.verify("eyJhbGciOiJIUzI1NiJ9.e30.").is_none());
    }

    #[test]
    fn test_wrong_issuer_rejected() {
        let secret = SecretString::from("kX9#mP2$vL8@qR4!wN6^zT1&bY5*cF3%".to_string());
        let service = TokenService::new(&secret);

        let now = Utc::now();
        let claims = SessionClaims {
            sub: "7".to_string(),
            email: "ceo@sonaverse.kr".to_string(),
            name: "대표 관리자".to_string(),
            role: AdminRole::SuperAdmin,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(SESSION_LIFETIME_SECS)).timestamp(),
            iss: "someone-else".to_string(),
            aud: AUDIENCE.to_string(),
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
        )
        .unwrap();

        assert!(service.verify(&token).is_none());
    }

    #[test]
    fn test_wrong_audience_rejected() {
        let secret = SecretString::from("kX9#mP2$vL8@qR4!wN6^zT1&bY5*cF3%".to_string());
        let service = TokenService::new(&secret);

        let now = Utc::now();
        let claims = SessionClaims {
            sub: "7".to_string(),
            email: "ceo@sonaverse.kr".to_string(),
            name: "대표 관리자".to_string(),
            role: AdminRole::SuperAdmin,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(SESSION_LIFETIME_SECS)).timestamp(),
            iss: ISSUER.to_string(),
            aud: "sonaverse-site".to_string(),
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
        )
        .unwrap();

        assert!(service.verify(&token).is_none());
    }

    #[test]
    fn test_malformed_sub_yields_no_user_id() {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: "not-a-number".to_string(),
            email: "ceo@sonaverse.kr".to_string(),
            name: "x".to_string(),
            role: AdminRole::Admin,
            iat: now.timestamp(),
            exp: now.timestamp() + 60,
            iss: ISSUER.to_string(),
            aud: AUDIENCE.to_string(),
        };
        assert!(claims.user_id().is_none());
    }
}
