//! Shop account model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use orderdash_core::{CategoryId, Email, ShopAccountId, ShopStatus};

/// A shop registered on the platform.
#[derive(Debug, Clone, Serialize)]
pub struct ShopAccount {
    /// Database ID.
    pub id: ShopAccountId,
    /// Display name of the shop.
    pub shop_name: String,
    /// Unique login email.
    pub email: Email,
    /// Contact person name.
    pub contact_person: String,
    /// Contact phone number.
    pub phone: String,
    /// Street address.
    pub address: String,
    /// Greek tax registration number (AFM).
    pub afm: String,
    /// Category the shop belongs to, if any.
    pub category_id: Option<CategoryId>,
    /// Account lifecycle status.
    pub status: ShopStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
