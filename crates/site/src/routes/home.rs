//! Home payload: site settings plus the freshest published highlights.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use serde_json::{Value, json};

use sonaverse_core::Locale;

use crate::db::{Collection, PublicContentRepository, SettingsReader};
use crate::error::SiteError;
use crate::routes::content::LangQuery;
use crate::state::AppState;

const HIGHLIGHT_COUNT: usize = 3;

/// GET /api/home
pub async fn home(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> Result<Json<Value>, SiteError> {
    let locale = query.locale();
    let key = format!("home:*:{}", locale.code());
    if let Some(cached) = state.content_cache.get(&key).await {
        return Ok(Json((*cached).clone()));
    }

    let repo = PublicContentRepository::new(&state.pool);
    let settings = SettingsReader::new(&state.pool).document().await?;

    let stories = highlights(&repo, Collection::Stories, locale).await?;
    let press = highlights(&repo, Collection::Press, locale).await?;
    let products: Vec<_> = repo
        .list_published(Collection::Products)
        .await?
        .into_iter()
        .map(|entry| entry.localize(locale))
        .collect();

    let payload = Arc::new(json!({
        "settings": settings,
        "stories": stories,
        "press": press,
        "products": products,
    }));
    state.content_cache.insert(key, Arc::clone(&payload)).await;
    Ok(Json((*payload).clone()))
}

async fn highlights(
    repo: &PublicContentRepository<'_>,
    collection: Collection,
    locale: Locale,
) -> Result<Vec<crate::db::content::LocalizedEntry>, SiteError> {
    Ok(repo
        .list_published(collection)
        .await?
        .into_iter()
        .take(HIGHLIGHT_COUNT)
        .map(|entry| entry.localize(locale))
        .collect())
}
