//! Platform user model (drivers and shop members).

use chrono::{DateTime, Utc};
use serde::Serialize;

use orderdash_core::{Email, UserId, UserType};

/// A platform user.
///
/// The password hash never leaves the repository layer; this struct is safe
/// to serialize straight into list/mutation envelopes.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Database ID.
    pub id: UserId,
    /// Unique email address.
    pub email: Email,
    /// Account type (driver or shop member).
    pub user_type: UserType,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
