//! Shared application state.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AdminConfig;
use crate::services::TokenService;

/// State shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AdminConfig>,
    pub pool: PgPool,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    /// Assemble application state from loaded config and a live pool.
    #[must_use]
    pub fn new(config: AdminConfig, pool: PgPool) -> Self {
        let tokens = Arc::new(TokenService::new(&config.jwt_secret));
        Self {
            config: Arc::new(config),
            pool,
            tokens,
        }
    }
}
