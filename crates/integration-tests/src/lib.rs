//! Shared helpers for HTTP integration tests.
//!
//! These tests run against a live admin server and are `#[ignore]`d by
//! default. Start the server, seed an admin user, then:
//!
//! ```bash
//! ORDERDASH_ADMIN_URL=http://127.0.0.1:3001 \
//! ORDERDASH_TEST_ADMIN_EMAIL=admin@orderdash.dev \
//! ORDERDASH_TEST_ADMIN_PASSWORD=... \
//!     cargo test -p orderdash-integration-tests -- --ignored
//! ```

use serde_json::{Value, json};

/// Base URL of the admin server under test.
#[must_use]
pub fn base_url() -> String {
    std::env::var("ORDERDASH_ADMIN_URL").unwrap_or_else(|_| "http://127.0.0.1:3001".to_owned())
}

/// Test client wrapping reqwest with the envelope conventions.
pub struct TestClient {
    client: reqwest::Client,
    base: String,
}

impl TestClient {
    /// Create a client against [`base_url`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base_url(),
        }
    }

    /// Log in as the configured test admin and return the session token.
    ///
    /// # Panics
    ///
    /// Panics if the credentials env vars are missing or login fails;
    /// these tests cannot proceed without a session.
    pub async fn admin_token(&self) -> String {
        let email = std::env::var("ORDERDASH_TEST_ADMIN_EMAIL")
            .expect("ORDERDASH_TEST_ADMIN_EMAIL must be set");
        let password = std::env::var("ORDERDASH_TEST_ADMIN_PASSWORD")
            .expect("ORDERDASH_TEST_ADMIN_PASSWORD must be set");

        let body: Value = self
            .client
            .post(format!("{}/api/auth/login", self.base))
            .json(&json!({
                "email": email,
                "password": password,
                "loginType": "admin",
            }))
            .send()
            .await
            .expect("login request failed")
            .json()
            .await
            .expect("login response was not JSON");

        assert_eq!(body["success"], true, "login failed: {body}");
        body["sessionToken"]
            .as_str()
            .expect("login response missing sessionToken")
            .to_owned()
    }

    /// GET a path with a bearer token, returning the parsed envelope.
    pub async fn get(&self, path: &str, token: &str) -> (reqwest::StatusCode, Value) {
        let response = self
            .client
            .get(format!("{}{path}", self.base))
            .bearer_auth(token)
            .send()
            .await
            .expect("request failed");
        let status = response.status();
        let body = response.json().await.expect("response was not JSON");
        (status, body)
    }

    /// POST a JSON body with a bearer token.
    pub async fn post(&self, path: &str, token: &str, body: &Value) -> (reqwest::StatusCode, Value) {
        let response = self
            .client
            .post(format!("{}{path}", self.base))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .expect("request failed");
        let status = response.status();
        let body = response.json().await.expect("response was not JSON");
        (status, body)
    }

    /// PUT a JSON body with a bearer token.
    pub async fn put(&self, path: &str, token: &str, body: &Value) -> (reqwest::StatusCode, Value) {
        let response = self
            .client
            .put(format!("{}{path}", self.base))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .expect("request failed");
        let status = response.status();
        let body = response.json().await.expect("response was not JSON");
        (status, body)
    }

    /// DELETE a path with a bearer token.
    pub async fn delete(&self, path: &str, token: &str) -> (reqwest::StatusCode, Value) {
        let response = self
            .client
            .delete(format!("{}{path}", self.base))
            .bearer_auth(token)
            .send()
            .await
            .expect("request failed");
        let status = response.status();
        let body = response.json().await.expect("response was not JSON");
        (status, body)
    }
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}
