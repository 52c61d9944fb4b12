//! Login and logout endpoints.

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use serde::Deserialize;
use serde_json::{Value, json};

use orderdash_core::LoginType;

use crate::db::AccessLogRepository;
use crate::error::{AppError, set_sentry_user};
use crate::middleware::RequireAdmin;
use crate::services::AuthService;
use crate::services::auth::LoginOutcome;
use crate::state::AppState;

/// Login request body. Field names match the dashboard client.
#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
    #[serde(rename = "loginType")]
    pub login_type: LoginType,
}

/// Optional logout request body.
#[derive(Debug, Default, Deserialize)]
pub struct LogoutPayload {
    pub reason: Option<String>,
}

/// `POST /api/auth/login`
///
/// Authenticates against the table matching `loginType`. Only admin
/// logins receive a `sessionToken`; drivers and shops are verified and
/// pointed at their own apps.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<Value>, AppError> {
    let service = AuthService::new(state.pool(), state.config().session);
    let outcome = service
        .login(&payload.email, &payload.password, payload.login_type)
        .await?;

    record_audit(&state, &payload.email, "login", Some(payload.login_type.to_string())).await;

    let body = match outcome {
        LoginOutcome::Admin { admin, session } => {
            set_sentry_user(admin.id.as_i32(), Some(admin.email.as_str()));
            json!({
                "success": true,
                "user": admin,
                "sessionToken": session.token,
                "userType": "admin",
                "redirectUrl": "/admin/dashboard",
            })
        }
        LoginOutcome::Driver(user) => json!({
            "success": true,
            "user": user,
            "sessionToken": Value::Null,
            "userType": "driver",
            "redirectUrl": "/driver",
        }),
        LoginOutcome::Shop(shop) => json!({
            "success": true,
            "user": shop,
            "sessionToken": Value::Null,
            "userType": "shop",
            "redirectUrl": "/shop",
        }),
    };

    Ok(Json(body))
}

/// `POST /api/auth/logout`
///
/// Deletes the caller's session. The optional `reason` lands in the
/// access log; the dashboard sends `"closed"`, `"inactivity"`, etc.
pub async fn logout(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    headers: HeaderMap,
    payload: Option<Json<LogoutPayload>>,
) -> Result<Json<Value>, AppError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("missing session token".to_owned()))?;

    let service = AuthService::new(state.pool(), state.config().session);
    service.logout(token).await?;

    let reason = payload.and_then(|Json(p)| p.reason);
    record_audit(&state, admin.email.as_str(), "logout", reason).await;

    Ok(Json(json!({ "success": true, "message": "logged out" })))
}

/// Best-effort audit write. Failures are logged, never surfaced.
async fn record_audit(state: &AppState, actor: &str, action: &str, detail: Option<String>) {
    let repo = AccessLogRepository::new(state.pool());
    if let Err(e) = repo.insert(actor, action, detail.as_deref()).await {
        tracing::warn!(error = %e, actor, action, "access log write failed");
    }
}
