//! Content entity domain types.
//!
//! All four public content collections (press releases, Sonaverse stories,
//! products, static pages) share a common shape: a slug key, a tagged
//! bilingual body, a publication flag, and timestamps. The bodies differ
//! per entity, so each entity declares a field struct and a [`ContentKind`]
//! marker tying it to its table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use sonaverse_core::{Bilingual, Slug};

/// Marker trait linking a content entity to its table and body type.
///
/// Implemented by zero-sized kind markers; the generic repository and the
/// generic CRUD handlers are instantiated once per kind.
pub trait ContentKind: Send + Sync + 'static {
    /// Schema-qualified table name. Only ever a compile-time constant;
    /// never interpolate user input here.
    const TABLE: &'static str;
    /// Resource name used in logs and error messages (e.g. "press release").
    const RESOURCE: &'static str;
    /// The per-locale body fields for this entity.
    type Fields: Serialize + DeserializeOwned + Clone + Send + Sync;
}

/// A stored content entity of kind `K`.
#[derive(Debug, Clone, Serialize)]
pub struct ContentRecord<K: ContentKind> {
    pub id: i32,
    pub slug: Slug,
    /// Bilingual body, both locales required.
    pub content: Bilingual<K::Fields>,
    /// Unpublished records are invisible to the public site.
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Press releases
// =============================================================================

/// Kind marker for press releases.
pub struct PressRelease;

/// Per-locale fields of a press release.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PressFields {
    pub title: String,
    /// Name of the publishing outlet (e.g. "조선일보").
    pub outlet: String,
    pub body: String,
    /// Link to the original article, if hosted elsewhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
}

impl ContentKind for PressRelease {
    const TABLE: &'static str = "cms.press_release";
    const RESOURCE: &'static str = "press release";
    type Fields = PressFields;
}

// =============================================================================
// Sonaverse stories
// =============================================================================

/// Kind marker for Sonaverse stories (company blog posts).
pub struct Story;

/// Per-locale fields of a story.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoryFields {
    pub title: String,
    /// Short teaser shown in listings.
    pub summary: String,
    pub body: String,
}

impl ContentKind for Story {
    const TABLE: &'static str = "cms.story";
    const RESOURCE: &'static str = "story";
    type Fields = StoryFields;
}

// =============================================================================
// Products
// =============================================================================

/// Kind marker for products.
pub struct Product;

/// Per-locale fields of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    /// Bullet-point selling features, in display order.
    #[serde(default)]
    pub features: Vec<String>,
    /// Product category label (e.g. "성인용 기저귀").
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl ContentKind for Product {
    const TABLE: &'static str = "cms.product";
    const RESOURCE: &'static str = "product";
    type Fields = ProductFields;
}

// =============================================================================
// Static pages
// =============================================================================

/// Kind marker for static marketing pages.
pub struct Page;

/// Per-locale fields of a static page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageFields {
    pub title: String,
    pub body: String,
}

impl ContentKind for Page {
    const TABLE: &'static str = "cms.page";
    const RESOURCE: &'static str = "page";
    type Fields = PageFields;
}
