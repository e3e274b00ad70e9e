//! Account management tests against a running admin panel.
//!
//! `ADMIN_TEST_EMAIL` must belong to a `super_admin`; the seeded database
//! must contain the protected super-admin account.

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use std::time::{SystemTime, UNIX_EPOCH};

fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_owned())
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

#[tokio::test]
#[ignore = "Requires running admin server and a seeded database"]
async fn test_protected_account_cannot_be_deleted() {
    let client = logged_in_client().await;
    let base = admin_base_url();

    let me: Value = client
        .get(format!("{base}/api/auth/me"))
        .send()
        .await
        .expect("me request failed")
        .json()
        .await
        .expect("invalid me response");
    let my_id = me["user"]["id"].as_i64().expect("missing user id");

    // The session belongs to the protected super-admin in the default
    // seeding, so deleting it must fail on the protected check.
    let response = client
        .delete(format!("{base}/api/admin-users/{my_id}"))
        .send()
        .await
        .expect("delete request failed");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("invalid error response");
    assert_eq!(body["error"], "최고 관리자 계정은 삭제할 수 없습니다.");
}

#[tokio::test]
#[ignore = "Requires running admin server and a seeded database"]
async fn test_create_and_delete_viewer_account() {
    let client = logged_in_client().await;
    let base = admin_base_url();
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before epoch")
        .as_millis();
    let email = format!("it-viewer-{millis}@sonaverse.kr");

    let response = client
        .post(format!("{base}/api/admin-users"))
        .json(&json!({
            "email": email,
            "name": "통합 테스트 뷰어",
            "password": "viewer-password-1",
            "role": "viewer"
        }))
        .send()
        .await
        .expect("create request failed");
    assert_eq!(response.status(), StatusCode::OK);
    let created: Value = response.json().await.expect("invalid create response");
    assert_eq!(created["email"], email);
    assert_eq!(created["role"], "viewer");
    let id = created["id"].as_i64().expect("missing id");

    let response = client
        .delete(format!("{base}/api/admin-users/{id}"))
        .send()
        .await
        .expect("delete request failed");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running admin server and a seeded database"]
async fn test_duplicate_admin_email_conflicts() {
    let client = logged_in_client().await;
    let email = std::env::var("ADMIN_TEST_EMAIL").expect("ADMIN_TEST_EMAIL must be set");

    let response = client
        .post(format!("{}/api/admin-users", admin_base_url()))
        .json(&json!({
            "email": email,
            "name": "중복 계정",
            "password": "any-password-1",
            "role": "admin"
        }))
        .send()
        .await
        .expect("create request failed");

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "Requires running admin server and a seeded database"]
async fn test_self_deactivation_rejected() {
    let client = logged_in_client().await;
    let base = admin_base_url();

    let me: Value = client
        .get(format!("{base}/api/auth/me"))
        .send()
        .await
        .expect("me request failed")
        .json()
        .await
        .expect("invalid me response");
    let my_id = me["user"]["id"].as_i64().expect("missing user id");

    let response = client
        .patch(format!("{base}/api/admin-users/{my_id}/active"))
        .json(&json!({ "active": false }))
        .send()
        .await
        .expect("patch request failed");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("invalid error response");
    assert_eq!(body["error"], "자기 자신의 계정은 비활성화할 수 없습니다.");
}
