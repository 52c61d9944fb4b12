//! Session-related types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use orderdash_core::{AdminRole, AdminUserId, Email};

/// A server-side admin session row.
///
/// Backs the `sessionToken` returned by login; the token itself is an
/// opaque UUID string held by the dashboard client.
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// Opaque session token.
    pub token: String,
    /// Owning admin user.
    pub admin_user_id: AdminUserId,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// Absolute time after which the session is stale.
    pub expires_at: DateTime<Utc>,
}

impl AdminSession {
    /// Whether the session is expired at `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// The authenticated admin attached to a request.
///
/// Minimal identity resolved by the auth extractor; handlers use it for
/// audit attribution.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentAdmin {
    /// Admin's database ID.
    pub id: AdminUserId,
    /// Admin's email address.
    pub email: Email,
    /// Display name.
    pub name: String,
    /// Permission level.
    pub role: AdminRole,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn test_is_expired() {
        let now = Utc::now();
        let session = AdminSession {
            token: "t".to_owned(),
            admin_user_id: AdminUserId::new(1),
            created_at: now,
            expires_at: now + TimeDelta::minutes(15),
        };

        assert!(!session.is_expired(now));
        assert!(!session.is_expired(now + TimeDelta::minutes(15)));
        assert!(session.is_expired(now + TimeDelta::minutes(16)));
    }
}
