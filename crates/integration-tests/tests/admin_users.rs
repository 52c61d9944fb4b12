//! User CRUD flow through the admin API.

use orderdash_integration_tests::TestClient;
use serde_json::json;

#[tokio::test]
#[ignore = "requires a running admin server and seeded admin"]
async fn user_crud_roundtrip() {
    let client = TestClient::new();
    let token = client.admin_token().await;

    let email = format!("it-user-{}@orderdash.dev", std::process::id());

    // Create
    let (status, body) = client
        .post(
            "/api/admin/users",
            &token,
            &json!({
                "email": email,
                "password": "integration-pass",
                "user_type": "driver",
            }),
        )
        .await;
    assert_eq!(status, 200, "create failed: {body}");
    assert_eq!(body["success"], true);
    let id = body["user"]["id"].as_i64().expect("user id");

    // Duplicate email is a 400 conflict.
    let (status, body) = client
        .post(
            "/api/admin/users",
            &token,
            &json!({
                "email": email,
                "password": "integration-pass",
                "user_type": "driver",
            }),
        )
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["success"], false);

    // Appears in the list.
    let (status, body) = client.get("/api/admin/users", &token).await;
    assert_eq!(status, 200);
    let listed = body["users"]
        .as_array()
        .expect("users array")
        .iter()
        .any(|u| u["id"].as_i64() == Some(id));
    assert!(listed, "created user missing from list");

    // Update
    let (status, body) = client
        .put(
            &format!("/api/admin/users/{id}"),
            &token,
            &json!({ "email": email, "user_type": "shop" }),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["user"]["user_type"], "shop");

    // Password change
    let (status, _) = client
        .put(
            &format!("/api/admin/users/{id}/password"),
            &token,
            &json!({ "password": "another-pass" }),
        )
        .await;
    assert_eq!(status, 200);

    // Too-short password is rejected.
    let (status, _) = client
        .put(
            &format!("/api/admin/users/{id}/password"),
            &token,
            &json!({ "password": "short" }),
        )
        .await;
    assert_eq!(status, 400);

    // Delete
    let (status, _) = client.delete(&format!("/api/admin/users/{id}"), &token).await;
    assert_eq!(status, 200);

    // Deleting again is a 404.
    let (status, _) = client.delete(&format!("/api/admin/users/{id}"), &token).await;
    assert_eq!(status, 404);
}
