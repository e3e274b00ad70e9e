//! Shared application state.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use sqlx::PgPool;

use crate::config::SiteConfig;
use crate::db::PageViewRecorder;

/// Published content is cached briefly so content list pages don't hit the
/// database on every request. Short TTL keeps admin edits visible quickly.
const CONTENT_CACHE_TTL: Duration = Duration::from_secs(60);
const CONTENT_CACHE_CAPACITY: u64 = 1_000;

/// State shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub pool: PgPool,
    /// Response payload cache keyed by collection, slug, and locale.
    pub content_cache: Cache<String, Arc<serde_json::Value>>,
    pub page_views: PageViewRecorder,
}

impl AppState {
    /// Assemble application state from loaded config and a live pool.
    #[must_use]
    pub fn new(config: SiteConfig, pool: PgPool) -> Self {
        let content_cache = Cache::builder()
            .max_capacity(CONTENT_CACHE_CAPACITY)
            .time_to_live(CONTENT_CACHE_TTL)
            .build();

        Self {
            config: Arc::new(config),
            page_views: PageViewRecorder::new(pool.clone()),
            pool,
            content_cache,
        }
    }
}
