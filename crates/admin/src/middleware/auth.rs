//! Bearer-token authentication extractor for admin routes.
//!
//! Reads `Authorization: Bearer <token>`, resolves the session row, rejects
//! expired tokens, and slides the expiry forward on every authenticated
//! request so activity keeps the session alive.

use axum::extract::FromRequestParts;
use axum::http::{StatusCode, header, request::Parts};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde_json::json;

use crate::db::{AdminUserRepository, SessionRepository};
use crate::models::CurrentAdmin;
use crate::state::AppState;

/// Extractor that requires a valid admin session.
///
/// Handlers take `RequireAdmin(admin)` to get the authenticated identity.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub CurrentAdmin);

/// Why an admin request was rejected.
#[derive(Debug)]
pub enum AuthRejection {
    /// No `Authorization: Bearer` header present.
    MissingToken,
    /// Token doesn't match any session.
    InvalidToken,
    /// Session exists but has passed its expiry.
    Expired,
    /// Session lookup failed.
    Internal,
}

impl AuthRejection {
    const fn message(&self) -> &'static str {
        match self {
            Self::MissingToken => "missing session token",
            Self::InvalidToken => "invalid session token",
            Self::Expired => "session expired",
            Self::Internal => "internal server error",
        }
    }

    const fn status(&self) -> StatusCode {
        match self {
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "message": self.message(),
        }));
        (self.status(), body).into_response()
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .ok_or(AuthRejection::MissingToken)?
            .to_owned();

        let sessions = SessionRepository::new(state.pool());
        let session = sessions
            .get(&token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "session lookup failed");
                AuthRejection::Internal
            })?
            .ok_or(AuthRejection::InvalidToken)?;

        let now = Utc::now();
        if session.is_expired(now) {
            // Stale row; remove it so the sweeper doesn't have to.
            if let Err(e) = sessions.delete(&token).await {
                tracing::warn!(error = %e, "failed to delete expired session");
            }
            return Err(AuthRejection::Expired);
        }

        // Activity slides the expiry forward.
        let idle = state.config().session.idle_timeout;
        let new_expiry = now
            + chrono::Duration::from_std(idle).unwrap_or_else(|_| chrono::Duration::minutes(15));
        if let Err(e) = sessions.touch(&token, new_expiry).await {
            tracing::warn!(error = %e, "failed to refresh session expiry");
        }

        let admin = AdminUserRepository::new(state.pool())
            .get_by_id(session.admin_user_id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "admin lookup failed");
                AuthRejection::Internal
            })?
            .ok_or(AuthRejection::InvalidToken)?;

        Ok(Self(CurrentAdmin {
            id: admin.id,
            email: admin.email,
            name: admin.name,
            role: admin.role,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with_auth(value: &str) -> Parts {
        let (parts, ()) = Request::builder()
            .header(header::AUTHORIZATION, value)
            .body(())
            .expect("valid request")
            .into_parts();
        parts
    }

    #[test]
    fn test_bearer_token_extracted() {
        let parts = parts_with_auth("Bearer abc-123");
        assert_eq!(bearer_token(&parts), Some("abc-123"));
    }

    #[test]
    fn test_bearer_token_rejects_other_schemes() {
        let parts = parts_with_auth("Basic dXNlcjpwYXNz");
        assert_eq!(bearer_token(&parts), None);
    }

    #[test]
    fn test_bearer_token_missing_header() {
        let (parts, ()) = Request::builder()
            .body(())
            .expect("valid request")
            .into_parts();
        assert_eq!(bearer_token(&parts), None);
    }

    #[test]
    fn test_rejection_statuses() {
        assert_eq!(
            AuthRejection::MissingToken.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AuthRejection::Expired.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AuthRejection::Internal.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
