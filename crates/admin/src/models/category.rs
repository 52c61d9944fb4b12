//! Shop category model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use orderdash_core::CategoryId;

/// A shop category shown in the dashboard and the shop directory.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    /// Database ID.
    pub id: CategoryId,
    /// Unique category name.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Icon identifier used by the dashboard client.
    pub icon: Option<String>,
    /// Display color (CSS value).
    pub color: Option<String>,
    /// Whether the category is currently offered.
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
