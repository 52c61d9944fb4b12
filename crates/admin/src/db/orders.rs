//! Order repository for database operations.
//!
//! The admin API only reads orders; `create` exists for the CLI seeder.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use orderdash_core::{Money, OrderId, ShopAccountId, UserId};

use super::RepositoryError;
use crate::models::Order;

/// Internal row type for `PostgreSQL` order queries.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: i32,
    user_id: i32,
    shop_id: i32,
    price: Decimal,
    earnings: Decimal,
    created_at: DateTime<Utc>,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Self {
            id: OrderId::new(row.id),
            user_id: UserId::new(row.user_id),
            shop_id: ShopAccountId::new(row.shop_id),
            price: Money::new(row.price),
            earnings: Money::new(row.earnings),
            created_at: row.created_at,
        }
    }
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r"
            SELECT id, user_id, shop_id, price, earnings, created_at
            FROM orders
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Insert an order (used by the CLI seeder).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        user_id: UserId,
        shop_id: ShopAccountId,
        price: Money,
        earnings: Money,
    ) -> Result<Order, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r"
            INSERT INTO orders (user_id, shop_id, price, earnings)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, shop_id, price, earnings, created_at
            ",
        )
        .bind(user_id.as_i32())
        .bind(shop_id.as_i32())
        .bind(price.amount())
        .bind(earnings.amount())
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }
}
