//! Announcement model.
//!
//! Announcements live in the key-value announcement store, not in the
//! relational database, so this type is `Deserialize` as well.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orderdash_core::{AnnouncementId, Importance};

/// A dashboard announcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    /// Store-assigned ID.
    pub id: AnnouncementId,
    /// Announcement text.
    pub message: String,
    /// Importance level.
    pub importance: Importance,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
