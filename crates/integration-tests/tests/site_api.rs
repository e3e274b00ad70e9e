//! Public site API tests against a running site server.
//!
//! Run with the seed data loaded (`sonaverse-cli seed`) and the site
//! listening on `SITE_BASE_URL` (default `http://localhost:3000`).

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

fn site_base_url() -> String {
    std::env::var("SITE_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned())
}

fn client() -> Client {
    Client::builder()
        .build()
        .expect("failed to build HTTP client")
}

#[tokio::test]
#[ignore = "Requires running site server"]
async fn test_health_endpoint() {
    let response = client()
        .get(format!("{}/health", site_base_url()))
        .send()
        .await
        .expect("health request failed");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running site server and seed data"]
async fn test_press_list_localizes_per_lang() {
    let client = client();
    let base = site_base_url();

    let ko: Value = client
        .get(format!("{base}/api/press"))
        .send()
        .await
        .expect("press request failed")
        .json()
        .await
        .expect("invalid press response");
    let ko_entries = ko["entries"].as_array().expect("expected an entries array");
    assert!(!ko_entries.is_empty(), "seed data missing");

    let en: Value = client
        .get(format!("{base}/api/press?lang=en"))
        .send()
        .await
        .expect("press request failed")
        .json()
        .await
        .expect("invalid press response");
    let en_entries = en["entries"].as_array().expect("expected an entries array");
    assert_eq!(ko_entries.len(), en_entries.len());

    // Same slugs, different language sides.
    assert_eq!(ko_entries[0]["slug"], en_entries[0]["slug"]);
    assert_ne!(ko_entries[0]["content"], en_entries[0]["content"]);
}

#[tokio::test]
#[ignore = "Requires running site server and seed data"]
async fn test_single_entry_and_missing_slug() {
    let client = client();
    let base = site_base_url();

    let entry: Value = client
        .get(format!("{base}/api/press/bodeum-launch"))
        .send()
        .await
        .expect("press request failed")
        .json()
        .await
        .expect("invalid press response");
    assert_eq!(entry["entry"]["slug"], "bodeum-launch");

    let response = client
        .get(format!("{base}/api/press/no-such-slug"))
        .send()
        .await
        .expect("press request failed");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("invalid error response");
    assert_eq!(body["error"], "요청한 콘텐츠를 찾을 수 없습니다.");
}

#[tokio::test]
#[ignore = "Requires running site server and seed data"]
async fn test_home_payload_shape() {
    let home: Value = client()
        .get(format!("{}/api/home", site_base_url()))
        .send()
        .await
        .expect("home request failed")
        .json()
        .await
        .expect("invalid home response");

    assert!(home["settings"].is_object());
    assert!(home["stories"].is_array());
    assert!(home["press"].is_array());
    assert!(home["products"].is_array());
}

#[tokio::test]
#[ignore = "Requires running site server"]
async fn test_inquiry_submission_accepted() {
    let response = client()
        .post(format!("{}/api/inquiries", site_base_url()))
        .json(&json!({
            "name": "통합 테스트",
            "email": "visitor@example.com",
            "phone": "010-0000-0000",
            "subject": "제품 문의",
            "message": "보듬 기저귀 대량 구매 문의드립니다."
        }))
        .send()
        .await
        .expect("inquiry request failed");

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let body: Value = response.json().await.expect("invalid inquiry response");
    assert_eq!(body["success"], true);
    assert!(body["id"].is_number());
}

#[tokio::test]
#[ignore = "Requires running site server"]
async fn test_inquiry_rejects_bad_email() {
    let response = client()
        .post(format!("{}/api/inquiries", site_base_url()))
        .json(&json!({
            "name": "통합 테스트",
            "email": "not-an-email",
            "subject": "제품 문의",
            "message": "문의 내용"
        }))
        .send()
        .await
        .expect("inquiry request failed");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("invalid error response");
    assert_eq!(body["error"], "올바른 이메일 형식이 아닙니다.");
}

#[tokio::test]
#[ignore = "Requires running site server"]
async fn test_security_headers_present() {
    let response = client()
        .get(format!("{}/health", site_base_url()))
        .send()
        .await
        .expect("health request failed");

    let headers = response.headers();
    assert_eq!(
        headers.get("x-frame-options").and_then(|v| v.to_str().ok()),
        Some("DENY")
    );
    assert_eq!(
        headers
            .get("x-content-type-options")
            .and_then(|v| v.to_str().ok()),
        Some("nosniff")
    );
}
