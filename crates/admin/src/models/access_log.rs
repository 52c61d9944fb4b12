//! Access log model (audit trail).

use chrono::{DateTime, Utc};
use serde::Serialize;

use orderdash_core::AccessLogId;

/// A single audit trail entry.
///
/// Written server-side on login/logout and by the dashboard client's
/// fire-and-forget logout call.
#[derive(Debug, Clone, Serialize)]
pub struct AccessLog {
    /// Database ID.
    pub id: AccessLogId,
    /// Who performed the action (email or username).
    pub actor: String,
    /// Action name, e.g. "login" or "logout".
    pub action: String,
    /// Optional detail, e.g. the logout reason.
    pub detail: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
