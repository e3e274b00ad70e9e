//! Published content endpoints, locale-selected and cached.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use serde_json::{Value, json};

use sonaverse_core::Locale;

use crate::db::{Collection, PublicContentRepository};
use crate::error::SiteError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LangQuery {
    lang: Option<String>,
}

impl LangQuery {
    pub(crate) fn locale(&self) -> Locale {
        Locale::from_param(self.lang.as_deref())
    }
}

const fn cache_prefix(collection: Collection) -> &'static str {
    match collection {
        Collection::Press => "press",
        Collection::Stories => "stories",
        Collection::Products => "products",
        Collection::Pages => "pages",
    }
}

/// Shared list handler: published entries of one collection in one locale.
async fn list(
    state: &AppState,
    collection: Collection,
    locale: Locale,
) -> Result<Json<Value>, SiteError> {
    let key = format!("{}:*:{}", cache_prefix(collection), locale.code());
    if let Some(cached) = state.content_cache.get(&key).await {
        return Ok(Json((*cached).clone()));
    }

    let entries = PublicContentRepository::new(&state.pool)
        .list_published(collection)
        .await?;
    let localized: Vec<_> = entries
        .into_iter()
        .map(|entry| entry.localize(locale))
        .collect();

    let payload = Arc::new(json!({ "entries": localized }));
    state.content_cache.insert(key, Arc::clone(&payload)).await;
    Ok(Json((*payload).clone()))
}

/// Shared detail handler: one published entry by slug. Unpublished slugs
/// are indistinguishable from missing ones.
async fn get_one(
    state: &AppState,
    collection: Collection,
    slug: &str,
    locale: Locale,
) -> Result<Json<Value>, SiteError> {
    let key = format!("{}:{slug}:{}", cache_prefix(collection), locale.code());
    if let Some(cached) = state.content_cache.get(&key).await {
        return Ok(Json((*cached).clone()));
    }

    let entry = PublicContentRepository::new(&state.pool)
        .get_published(collection, slug)
        .await?
        .ok_or(SiteError::NotFound)?;

    let payload = Arc::new(json!({ "entry": entry.localize(locale) }));
    state.content_cache.insert(key, Arc::clone(&payload)).await;
    Ok(Json((*payload).clone()))
}

macro_rules! collection_handlers {
    ($list:ident, $get:ident, $collection:expr) => {
        pub async fn $list(
            State(state): State<AppState>,
            Query(query): Query<LangQuery>,
        ) -> Result<Json<Value>, SiteError> {
            list(&state, $collection, query.locale()).await
        }

        pub async fn $get(
            State(state): State<AppState>,
            Path(slug): Path<String>,
            Query(query): Query<LangQuery>,
        ) -> Result<Json<Value>, SiteError> {
            get_one(&state, $collection, &slug, query.locale()).await
        }
    };
}

collection_handlers!(list_press, get_press, Collection::Press);
collection_handlers!(list_stories, get_story, Collection::Stories);
collection_handlers!(list_products, get_product, Collection::Products);
collection_handlers!(list_pages, get_page, Collection::Pages);
