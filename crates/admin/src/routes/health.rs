//! Liveness and readiness probes.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::json;

use crate::state::AppState;

/// Process is up.
pub async fn liveness() -> Json<serde_json::Value> {
    Json(json!({ "success": true, "status": "ok" }))
}

/// Process is up and the database answers.
pub async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    match sqlx::query("SELECT 1").execute(state.pool()).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({ "success": true, "status": "ready" })),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "success": false, "status": "database unavailable" })),
            )
        }
    }
}
