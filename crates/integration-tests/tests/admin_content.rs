//! Content CRUD tests against a running admin panel.
//!
//! Creates, updates, and deletes a throwaway press release. The test slug is
//! suffixed with the current timestamp so reruns do not collide.

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use std::time::{SystemTime, UNIX_EPOCH};

fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_owned())
}

fn unique_slug(prefix: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before epoch")
        .as_millis();
    format!("{prefix}-{millis}")
}

async fn logged_in_client() -> Client {
    let email = std::env::var("ADMIN_TEST_EMAIL").expect("ADMIN_TEST_EMAIL must be set");
    let password = std::env::var("ADMIN_TEST_PASSWORD").expect("ADMIN_TEST_PASSWORD must be set");

    let client = Client::builder()
        .cookie_store(true)
        .build()
        .expect("failed to build HTTP client");

    let response = client
        .post(format!("{}/api/auth/login", admin_base_url()))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("login request failed");
    assert_eq!(response.status(), StatusCode::OK, "login failed");

    client
}

fn press_payload(slug: &str, published: bool) -> Value {
    json!({
        "slug": slug,
        "content": {
            "ko": {
                "title": "통합 테스트 보도자료",
                "outlet": "테스트 뉴스",
                "body": "본문"
            },
            "en": {
                "title": "Integration test press release",
                "outlet": "Test News",
                "body": "Body"
            }
        },
        "published": published
    })
}

#[tokio::test]
#[ignore = "Requires running admin server and a seeded database"]
async fn test_press_release_crud_roundtrip() {
    let client = logged_in_client().await;
    let base = admin_base_url();
    let slug = unique_slug("it-press");

    // Create as a draft.
    let response = client
        .post(format!("{base}/api/press"))
        .json(&press_payload(&slug, false))
        .send()
        .await
        .expect("create request failed");
    assert_eq!(response.status(), StatusCode::OK);
    let created: Value = response.json().await.expect("invalid create response");
    assert_eq!(created["slug"], slug);
    assert_eq!(created["published"], false);

    // Read back.
    let fetched: Value = client
        .get(format!("{base}/api/press/{slug}"))
        .send()
        .await
        .expect("get request failed")
        .json()
        .await
        .expect("invalid get response");
    assert_eq!(fetched["content"]["en"]["title"], "Integration test press release");

    // Publish via full update.
    let response = client
        .put(format!("{base}/api/press/{slug}"))
        .json(&press_payload(&slug, true))
        .send()
        .await
        .expect("update request failed");
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = response.json().await.expect("invalid update response");
    assert_eq!(updated["published"], true);

    // Delete, then confirm it is gone.
    let response = client
        .delete(format!("{base}/api/press/{slug}"))
        .send()
        .await
        .expect("delete request failed");
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .get(format!("{base}/api/press/{slug}"))
        .send()
        .await
        .expect("get request failed");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running admin server and a seeded database"]
async fn test_duplicate_slug_conflicts() {
    let client = logged_in_client().await;
    let base = admin_base_url();
    let slug = unique_slug("it-dup");

    let response = client
        .post(format!("{base}/api/press"))
        .json(&press_payload(&slug, false))
        .send()
        .await
        .expect("create request failed");
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .post(format!("{base}/api/press"))
        .json(&press_payload(&slug, false))
        .send()
        .await
        .expect("create request failed");
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Cleanup.
    client
        .delete(format!("{base}/api/press/{slug}"))
        .send()
        .await
        .expect("delete request failed");
}

#[tokio::test]
#[ignore = "Requires running admin server and a seeded database"]
async fn test_invalid_slug_rejected() {
    let client = logged_in_client().await;

    let response = client
        .post(format!("{}/api/press", admin_base_url()))
        .json(&press_payload("Invalid Slug!", false))
        .send()
        .await
        .expect("create request failed");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("invalid error response");
    assert_eq!(body["error"], "올바르지 않은 슬러그입니다.");
}

#[tokio::test]
#[ignore = "Requires running admin server and a seeded database"]
async fn test_draft_invisible_on_public_site() {
    let client = logged_in_client().await;
    let base = admin_base_url();
    let site = std::env::var("SITE_BASE_URL")
        .unwrap_or_else(|_| "http://localhost:3000".to_owned());
    let slug = unique_slug("it-draft");

    let response = client
        .post(format!("{base}/api/press"))
        .json(&press_payload(&slug, false))
        .send()
        .await
        .expect("create request failed");
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .get(format!("{site}/api/press/{slug}"))
        .send()
        .await
        .expect("site request failed");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Cleanup.
    client
        .delete(format!("{base}/api/press/{slug}"))
        .send()
        .await
        .expect("delete request failed");
}
