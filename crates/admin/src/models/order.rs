//! Delivery order model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use orderdash_core::{Money, OrderId, ShopAccountId, UserId};

/// A completed delivery order.
///
/// The admin surface is read-only: orders are written by the delivery
/// apps, the dashboard only lists and aggregates them.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    /// Database ID.
    pub id: OrderId,
    /// Driver who delivered the order.
    pub user_id: UserId,
    /// Shop the order was placed with.
    pub shop_id: ShopAccountId,
    /// Order total.
    pub price: Money,
    /// Driver earnings for the delivery.
    pub earnings: Money,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
