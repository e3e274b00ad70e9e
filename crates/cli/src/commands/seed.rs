//! Sample content seeding for local development.
//!
//! Inserts one published entry into each content collection and writes the
//! default settings document. Idempotent: existing slugs are left alone.

use serde_json::json;
use sqlx::PgPool;
use thiserror::Error;

/// Errors that can occur during seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Seed the database with sample bilingual content.
///
/// # Errors
///
/// Returns `SeedError` if the connection or an insert fails.
pub async fn run() -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("ADMIN_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| SeedError::MissingEnvVar("ADMIN_DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&database_url).await?;

    seed_entry(
        &pool,
        "cms.product",
        "bodeum-diaper",
        json!({
            "ko": {
                "name": "보듬 기저귀",
                "description": "성인용 프리미엄 기저귀",
                "features": ["통기성 원단", "샘 방지 이중 구조"],
                "category": "성인용 기저귀"
            },
            "en": {
                "name": "BODUME Diaper",
                "description": "Premium adult diaper",
                "features": ["Breathable fabric", "Double leak guard"],
                "category": "Adult diapers"
            }
        }),
    )
    .await?;

    seed_entry(
        &pool,
        "cms.press_release",
        "bodeum-launch",
        json!({
            "ko": {
                "title": "소나버스, 보듬 기저귀 출시",
                "outlet": "헬스케어 뉴스",
                "body": "소나버스가 시니어 케어 제품 보듬을 출시했다."
            },
            "en": {
                "title": "Sonaverse launches BODUME diapers",
                "outlet": "Healthcare News",
                "body": "Sonaverse has launched its senior-care product BODUME."
            }
        }),
    )
    .await?;

    seed_entry(
        &pool,
        "cms.story",
        "our-mission",
        json!({
            "ko": {
                "title": "우리의 미션",
                "summary": "시니어의 존엄한 일상을 위하여",
                "body": "소나버스는 시니어 케어 제품을 만듭니다."
            },
            "en": {
                "title": "Our mission",
                "summary": "For a dignified daily life of seniors",
                "body": "Sonaverse builds senior-care products."
            }
        }),
    )
    .await?;

    seed_entry(
        &pool,
        "cms.page",
        "about",
        json!({
            "ko": {"title": "회사 소개", "body": "소나버스 소개 페이지"},
            "en": {"title": "About us", "body": "About Sonaverse"}
        }),
    )
    .await?;

    sqlx::query(
        "INSERT INTO cms.site_settings (id, data) VALUES (1, $1) \
         ON CONFLICT (id) DO NOTHING",
    )
    .bind(json!({
        "site_title": {"ko": "소나버스", "en": "Sonaverse"},
        "contact_email": "contact@sonaverse.kr",
        "contact_phone": "",
        "address": {"ko": "", "en": ""},
        "inquiries_open": true
    }))
    .execute(&pool)
    .await?;

    tracing::info!("Seeding complete!");
    Ok(())
}

/// Insert one published entry, skipping slugs that already exist.
async fn seed_entry(
    pool: &PgPool,
    table: &str,
    slug: &str,
    content: serde_json::Value,
) -> Result<(), SeedError> {
    let result = sqlx::query(&format!(
        "INSERT INTO {table} (slug, content, published) VALUES ($1, $2, TRUE) \
         ON CONFLICT (slug) DO NOTHING"
    ))
    .bind(slug)
    .bind(content)
    .execute(pool)
    .await?;

    if result.rows_affected() > 0 {
        tracing::info!("Seeded {} '{}'", table, slug);
    } else {
        tracing::info!("Skipped {} '{}' (already present)", table, slug);
    }
    Ok(())
}
