//! HTTP routes for the admin API.
//!
//! Every response uses the `{success, ...}` envelope. All `/api/admin/*`
//! routes require a bearer session token via the `RequireAdmin` extractor.

pub mod access_logs;
pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod health;
pub mod orders;
pub mod shop_accounts;
pub mod users;

use axum::Router;
use axum::routing::{get, post, put};

use crate::state::AppState;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .nest("/api/auth", auth_routes())
        .nest("/api/admin", admin_routes())
        .with_state(state)
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard::overview))
        .route("/users", get(users::list).post(users::create))
        .route("/users/{id}", put(users::update).delete(users::remove))
        .route("/users/{id}/password", put(users::change_password))
        .route(
            "/shop-accounts",
            get(shop_accounts::list).post(shop_accounts::create),
        )
        .route(
            "/shop-accounts/{id}",
            put(shop_accounts::update).delete(shop_accounts::remove),
        )
        .route(
            "/shop-accounts/{id}/password",
            put(shop_accounts::change_password),
        )
        .route("/categories", get(categories::list).post(categories::create))
        .route(
            "/categories/{id}",
            put(categories::update).delete(categories::remove),
        )
        .route("/orders", get(orders::list))
        .route(
            "/access-logs",
            get(access_logs::list).post(access_logs::record),
        )
}
