//! Access log endpoints.
//!
//! POST is the fire-and-forget audit sink the dashboard calls during
//! forced logout; it always answers success as long as the row lands.

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::db::AccessLogRepository;
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

const DEFAULT_LIMIT: i64 = 100;
const MAX_LIMIT: i64 = 1000;

#[derive(Debug, Serialize)]
pub struct AccessLogList {
    pub success: bool,
    pub logs: Vec<crate::models::AccessLog>,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct RecordPayload {
    pub actor: String,
    pub action: String,
    pub detail: Option<String>,
}

/// `GET /api/admin/access-logs`
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Query(params): Query<ListParams>,
) -> Result<Json<AccessLogList>, AppError> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let logs = AccessLogRepository::new(state.pool())
        .list_recent(limit)
        .await?;
    Ok(Json(AccessLogList {
        success: true,
        logs,
    }))
}

/// `POST /api/admin/access-logs`
pub async fn record(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Json(payload): Json<RecordPayload>,
) -> Result<Json<Value>, AppError> {
    let entry = AccessLogRepository::new(state.pool())
        .insert(&payload.actor, &payload.action, payload.detail.as_deref())
        .await?;

    Ok(Json(json!({ "success": true, "log": entry })))
}
