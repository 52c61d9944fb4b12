//! Dashboard operator model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use orderdash_core::{AdminRole, AdminUserId, Email};

/// A dashboard operator.
///
/// Admin users are created via the CLI, never through the public API.
#[derive(Debug, Clone, Serialize)]
pub struct AdminUser {
    /// Database ID.
    pub id: AdminUserId,
    /// Unique login email.
    pub email: Email,
    /// Display name.
    pub name: String,
    /// Permission level.
    pub role: AdminRole,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
