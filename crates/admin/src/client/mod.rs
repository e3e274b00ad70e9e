//! Browser-side auth sequences for the admin panel shell.
//!
//! The server-rendered shell ships a small client runtime; this module is
//! the server-held model of its two auth sequences, kept here so their
//! ordering and failure semantics are typed and testable. The shell binds
//! [`ClientEnvironment`] to real browser facilities; tests bind it to a
//! recording mock.
//!
//! Both sequences are run-to-completion: one invocation per trigger, no
//! concurrent checks, each step independent of the previous step's failure
//! where noted.

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use sonaverse_core::AdminRole;

/// Where both sequences send an unauthenticated browser.
const LOGIN_LOCATION: &str = "/admin/login";

/// Failure of a single client-side step. Steps that fail are logged and
/// skipped, never fatal to the sequence.
#[derive(Debug, Error)]
#[error("client step failed: {0}")]
pub struct ClientError(pub String);

/// The user projection returned by the "who am I" endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionUser {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: AdminRole,
}

/// Browser facilities the auth sequences drive.
///
/// One method per observable side effect, so tests can assert exactly what
/// ran and in what order.
pub trait ClientEnvironment {
    /// Unregister every registered service worker.
    async fn unregister_service_workers(&mut self) -> Result<(), ClientError>;

    /// Drop all cache storage entries.
    async fn clear_caches(&mut self) -> Result<(), ClientError>;

    /// Delete the legacy local-storage backup-token keys left behind by
    /// older panel builds.
    fn remove_legacy_backup_token(&mut self);

    /// The session-scoped "authenticated" hint flag.
    fn authenticated_flag(&self) -> bool;
    fn set_authenticated_flag(&mut self, value: bool);

    /// Call the server's "who am I" endpoint. `Ok(None)` means the server
    /// answered with a non-success status (no session).
    async fn fetch_current_user(&mut self) -> Result<Option<SessionUser>, ClientError>;

    /// Call the server's logout endpoint (clears the `httpOnly` cookie).
    async fn server_logout(&mut self) -> Result<(), ClientError>;

    /// Replace the current browser location.
    fn navigate(&mut self, location: &str);

    /// Wall-clock milliseconds, used for the logout cache-busting parameter.
    fn now_millis(&self) -> i64;
}

/// Outcome of one bootstrap run.
#[derive(Debug, Clone)]
pub enum BootstrapOutcome {
    /// Server confirmed the session; the UI may render with this user.
    Authenticated(SessionUser),
    /// No usable session; the browser was sent to the login page.
    RedirectedToLogin,
    /// A run already completed on this page load; nothing was done.
    AlreadyChecked,
}

/// Page-load auth check. Defense in depth behind the server-side route
/// guard, which has already gated the page itself.
#[derive(Debug, Default)]
pub struct AuthBootstrap {
    checked: bool,
}

impl AuthBootstrap {
    #[must_use]
    pub const fn new() -> Self {
        Self { checked: false }
    }

    /// Run the bootstrap sequence once. Subsequent calls on the same page
    /// load are no-ops.
    pub async fn run<E: ClientEnvironment>(&mut self, env: &mut E) -> BootstrapOutcome {
        if self.checked {
            return BootstrapOutcome::AlreadyChecked;
        }
        self.checked = true;

        // Stale caches are cleared before trusting anything client-side.
        if let Err(e) = env.unregister_service_workers().await {
            warn!(error = %e, "service worker unregistration failed");
        }
        if let Err(e) = env.clear_caches().await {
            warn!(error = %e, "cache clearing failed");
        }
        env.remove_legacy_backup_token();

        if !env.authenticated_flag() {
            env.navigate(LOGIN_LOCATION);
            return BootstrapOutcome::RedirectedToLogin;
        }

        match env.fetch_current_user().await {
            Ok(Some(user)) => BootstrapOutcome::Authenticated(user),
            Ok(None) => {
                env.set_authenticated_flag(false);
                env.navigate(LOGIN_LOCATION);
                BootstrapOutcome::RedirectedToLogin
            }
            Err(e) => {
                warn!(error = %e, "session confirmation failed");
                env.set_authenticated_flag(false);
                env.navigate(LOGIN_LOCATION);
                BootstrapOutcome::RedirectedToLogin
            }
        }
    }
}

/// Best-effort logout teardown.
///
/// Every step may fail without blocking the ones after it, and the final
/// navigation to the login page always happens. The cookie is `httpOnly`,
/// so if the server call fails the cookie may survive until its token
/// expires; the client still visibly logs out.
pub async fn logout<E: ClientEnvironment>(env: &mut E) {
    if let Err(e) = env.server_logout().await {
        warn!(error = %e, "server logout failed, continuing client teardown");
    }

    env.set_authenticated_flag(false);
    env.remove_legacy_backup_token();

    if let Err(e) = env.unregister_service_workers().await {
        warn!(error = %e, "service worker unregistration failed");
    }
    if let Err(e) = env.clear_caches().await {
        warn!(error = %e, "cache clearing failed");
    }

    // Cache-busting parameter forces a fresh login page load.
    env.navigate(&format!("{LOGIN_LOCATION}?ts={}", env.now_millis()));
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockEnv {
        calls: Vec<&'static str>,
        authenticated_flag: bool,
        backup_token_present: bool,
        fail_service_workers: bool,
        fail_caches: bool,
        fail_server_logout: bool,
        me_response: Option<Option<SessionUser>>,
        navigated_to: Option<String>,
    }

    fn user() -> SessionUser {
        SessionUser {
            id: 1,
            email: "admin@sonaverse.kr".to_string(),
            name: "관리자".to_string(),
            role: AdminRole::Admin,
        }
    }

    impl ClientEnvironment for MockEnv {
        async fn unregister_service_workers(&mut self) -> Result<(), ClientError> {
            self.calls.push("unregister_service_workers");
            if self.fail_service_workers {
                return Err(ClientError("sw failure".into()));
            }
            Ok(())
        }

        async fn clear_caches(&mut self) -> Result<(), ClientError> {
            self.calls.push("clear_caches");
            if self.fail_caches {
                return Err(ClientError("cache failure".into()));
            }
            Ok(())
        }

        fn remove_legacy_backup_token(&mut self) {
            self.calls.push("remove_legacy_backup_token");
            self.backup_token_present = false;
        }

        fn authenticated_flag(&self) -> bool {
            self.authenticated_flag
        }

        fn set_authenticated_flag(&mut self, value: bool) {
            self.authenticated_flag = value;
        }

        async fn fetch_current_user(&mut self) -> Result<Option<SessionUser>, ClientError> {
            self.calls.push("fetch_current_user");
            match self.me_response.clone() {
                Some(response) => Ok(response),
                None => Err(ClientError("network down".into())),
            }
        }

        async fn server_logout(&mut self) -> Result<(), ClientError> {
            self.calls.push("server_logout");
            if self.fail_server_logout {
                return Err(ClientError("network down".into()));
            }
            Ok(())
        }

        fn navigate(&mut self, location: &str) {
            self.calls.push("navigate");
            self.navigated_to = Some(location.to_string());
        }

        fn now_millis(&self) -> i64 {
            1_700_000_000_000
        }
    }

    #[tokio::test]
    async fn test_bootstrap_confirms_session() {
        let mut env = MockEnv {
            authenticated_flag: true,
            me_response: Some(Some(user())),
            ..Default::default()
        };

        let outcome = AuthBootstrap::new().run(&mut env).await;

        assert!(matches!(outcome, BootstrapOutcome::Authenticated(u) if u.id == 1));
        assert!(env.navigated_to.is_none());
        // Cleanup always runs before the server check.
        assert_eq!(
            env.calls,
            vec![
                "unregister_service_workers",
                "clear_caches",
                "remove_legacy_backup_token",
                "fetch_current_user",
            ]
        );
    }

    #[tokio::test]
    async fn test_bootstrap_runs_once_per_page_load() {
        let mut env = MockEnv {
            authenticated_flag: true,
            me_response: Some(Some(user())),
            ..Default::default()
        };
        let mut bootstrap = AuthBootstrap::new();

        let first = bootstrap.run(&mut env).await;
        let calls_after_first = env.calls.len();
        let second = bootstrap.run(&mut env).await;

        assert!(matches!(first, BootstrapOutcome::Authenticated(_)));
        assert!(matches!(second, BootstrapOutcome::AlreadyChecked));
        assert_eq!(env.calls.len(), calls_after_first);
    }

    #[tokio::test]
    async fn test_bootstrap_missing_flag_skips_server_check() {
        let mut env = MockEnv {
            authenticated_flag: false,
            me_response: Some(Some(user())),
            ..Default::default()
        };

        let outcome = AuthBootstrap::new().run(&mut env).await;

        assert!(matches!(outcome, BootstrapOutcome::RedirectedToLogin));
        assert_eq!(env.navigated_to.as_deref(), Some("/admin/login"));
        assert!(!env.calls.contains(&"fetch_current_user"));
    }

    #[tokio::test]
    async fn test_bootstrap_server_rejection_clears_flag() {
        let mut env = MockEnv {
            authenticated_flag: true,
            me_response: Some(None),
            ..Default::default()
        };

        let outcome = AuthBootstrap::new().run(&mut env).await;

        assert!(matches!(outcome, BootstrapOutcome::RedirectedToLogin));
        assert!(!env.authenticated_flag);
        assert_eq!(env.navigated_to.as_deref(), Some("/admin/login"));
    }

    #[tokio::test]
    async fn test_bootstrap_network_failure_redirects() {
        let mut env = MockEnv {
            authenticated_flag: true,
            me_response: None,
            ..Default::default()
        };

        let outcome = AuthBootstrap::new().run(&mut env).await;

        assert!(matches!(outcome, BootstrapOutcome::RedirectedToLogin));
        assert!(!env.authenticated_flag);
    }

    #[tokio::test]
    async fn test_bootstrap_cleanup_failures_do_not_abort() {
        let mut env = MockEnv {
            authenticated_flag: true,
            fail_service_workers: true,
            fail_caches: true,
            me_response: Some(Some(user())),
            ..Default::default()
        };

        let outcome = AuthBootstrap::new().run(&mut env).await;

        assert!(matches!(outcome, BootstrapOutcome::Authenticated(_)));
    }

    #[tokio::test]
    async fn test_logout_happy_path() {
        let mut env = MockEnv {
            authenticated_flag: true,
            backup_token_present: true,
            ..Default::default()
        };

        logout(&mut env).await;

        assert!(!env.authenticated_flag);
        assert!(!env.backup_token_present);
        assert_eq!(
            env.navigated_to.as_deref(),
            Some("/admin/login?ts=1700000000000")
        );
    }

    #[tokio::test]
    async fn test_logout_navigates_even_when_server_fails() {
        let mut env = MockEnv {
            authenticated_flag: true,
            fail_server_logout: true,
            fail_service_workers: true,
            fail_caches: true,
            ..Default::default()
        };

        logout(&mut env).await;

        assert!(!env.authenticated_flag);
        assert!(env.navigated_to.is_some());
        // Server failure does not short-circuit the later steps.
        assert_eq!(
            env.calls,
            vec![
                "server_logout",
                "remove_legacy_backup_token",
                "unregister_service_workers",
                "clear_caches",
                "navigate",
            ]
        );
    }
}
