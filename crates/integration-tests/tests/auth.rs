//! Login, logout and auth-rejection flows.

use orderdash_integration_tests::{TestClient, base_url};
use serde_json::json;

#[tokio::test]
#[ignore = "requires a running admin server"]
async fn login_with_bad_credentials_is_rejected() {
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/auth/login", base_url()))
        .json(&json!({
            "email": "nobody@orderdash.dev",
            "password": "definitely-wrong",
            "loginType": "admin",
        }))
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), 401);
    let body: serde_json::Value = response.json().await.expect("not JSON");
    assert_eq!(body["success"], false);
    assert!(body["message"].is_string());
}

#[tokio::test]
#[ignore = "requires a running admin server"]
async fn admin_routes_require_a_token() {
    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/api/admin/users", base_url()))
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), 401);
    let body: serde_json::Value = response.json().await.expect("not JSON");
    assert_eq!(body["success"], false);
}

#[tokio::test]
#[ignore = "requires a running admin server"]
async fn admin_routes_reject_unknown_tokens() {
    let client = TestClient::new();
    let (status, body) = client.get("/api/admin/users", "not-a-real-token").await;

    assert_eq!(status, 401);
    assert_eq!(body["success"], false);
}

#[tokio::test]
#[ignore = "requires a running admin server"]
async fn preflight_from_browser_origin_is_allowed() {
    let client = reqwest::Client::new();
    let response = client
        .request(
            reqwest::Method::OPTIONS,
            format!("{}/api/auth/login", base_url()),
        )
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "authorization,content-type")
        .send()
        .await
        .expect("request failed");

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
#[ignore = "requires a running admin server and seeded admin"]
async fn login_logout_roundtrip() {
    let client = TestClient::new();
    let token = client.admin_token().await;

    // Token works.
    let (status, body) = client.get("/api/admin/users", &token).await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);

    // Logout invalidates it.
    let (status, body) = client
        .post("/api/auth/logout", &token, &json!({ "reason": "manual" }))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);

    let (status, _) = client.get("/api/admin/users", &token).await;
    assert_eq!(status, 401);
}
