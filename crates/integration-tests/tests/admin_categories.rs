//! Category CRUD flow and dashboard overview.

use orderdash_integration_tests::TestClient;
use serde_json::json;

#[tokio::test]
#[ignore = "requires a running admin server and seeded admin"]
async fn category_crud_roundtrip() {
    let client = TestClient::new();
    let token = client.admin_token().await;

    let name = format!("it-category-{}", std::process::id());

    let (status, body) = client
        .post(
            "/api/admin/categories",
            &token,
            &json!({ "name": name, "description": "integration", "is_active": true }),
        )
        .await;
    assert_eq!(status, 200, "create failed: {body}");
    let id = body["category"]["id"].as_i64().expect("category id");

    // Blank names are rejected.
    let (status, _) = client
        .post("/api/admin/categories", &token, &json!({ "name": "  " }))
        .await;
    assert_eq!(status, 400);

    let (status, body) = client
        .put(
            &format!("/api/admin/categories/{id}"),
            &token,
            &json!({ "name": name, "is_active": false }),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["category"]["is_active"], false);

    let (status, _) = client
        .delete(&format!("/api/admin/categories/{id}"), &token)
        .await;
    assert_eq!(status, 200);
}

#[tokio::test]
#[ignore = "requires a running admin server and seeded admin"]
async fn dashboard_overview_joins_sources() {
    let client = TestClient::new();
    let token = client.admin_token().await;

    let (status, body) = client.get("/api/admin/dashboard", &token).await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert!(body["users"].is_array());
    assert!(body["shops"].is_array());
    assert!(body["partial"].is_boolean());

    for shop in body["shops"].as_array().expect("shops array") {
        assert!(shop["order_count"].as_u64().is_some());
    }
}
