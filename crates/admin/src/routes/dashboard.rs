//! Dashboard overview endpoint.
//!
//! Users and shop accounts load concurrently and join before the response
//! is built. Each source is fail-soft: a failed fetch degrades to an empty
//! list and flips the `partial` flag instead of failing the whole page.

use axum::Json;
use axum::extract::State;
use serde::Serialize;
use tokio::join;

use orderdash_core::ShopAccountId;

use crate::db::{OrderRepository, ShopAccountRepository, UserRepository};
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::models::{Order, ShopAccount, User};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub success: bool,
    /// True when at least one source failed and was replaced by an empty
    /// list.
    pub partial: bool,
    pub users: Vec<User>,
    pub shops: Vec<ShopSummary>,
    pub total_orders: usize,
}

/// A shop account with its order count for the overview table.
#[derive(Debug, Serialize)]
pub struct ShopSummary {
    #[serde(flatten)]
    pub shop: ShopAccount,
    pub order_count: usize,
}

/// `GET /api/admin/dashboard`
pub async fn overview(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
) -> Result<Json<DashboardResponse>, AppError> {
    let users_repo = UserRepository::new(state.pool());
    let shops_repo = ShopAccountRepository::new(state.pool());
    let orders_repo = OrderRepository::new(state.pool());

    let (users, shops, orders) = join!(
        users_repo.list_all(),
        shops_repo.list_all(),
        orders_repo.list_all(),
    );

    let mut partial = false;
    let users = soften("users", users, &mut partial);
    let shops = soften("shop accounts", shops, &mut partial);
    let orders = soften("orders", orders, &mut partial);

    let total_orders = orders.len();
    let shops = shops
        .into_iter()
        .map(|shop| {
            let order_count = count_orders(&orders, shop.id);
            ShopSummary { shop, order_count }
        })
        .collect();

    Ok(Json(DashboardResponse {
        success: true,
        partial,
        users,
        shops,
        total_orders,
    }))
}

fn soften<T, E: std::fmt::Display>(source: &str, result: Result<Vec<T>, E>, partial: &mut bool) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(error = %e, source, "dashboard source failed, serving partial data");
            *partial = true;
            Vec::new()
        }
    }
}

fn count_orders(orders: &[Order], shop_id: ShopAccountId) -> usize {
    orders.iter().filter(|o| o.shop_id == shop_id).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use orderdash_core::{Money, OrderId, UserId};

    fn order(id: i32, shop: i32) -> Order {
        Order {
            id: OrderId::new(id),
            user_id: UserId::new(1),
            shop_id: ShopAccountId::new(shop),
            price: Money::from_cents(1999),
            earnings: Money::from_cents(250),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_count_orders_filters_by_shop() {
        let orders = vec![order(1, 10), order(2, 10), order(3, 11)];
        assert_eq!(count_orders(&orders, ShopAccountId::new(10)), 2);
        assert_eq!(count_orders(&orders, ShopAccountId::new(11)), 1);
        assert_eq!(count_orders(&orders, ShopAccountId::new(12)), 0);
    }

    #[test]
    fn test_soften_replaces_failure_with_empty() {
        let mut partial = false;
        let ok: Result<Vec<i32>, String> = Ok(vec![1, 2]);
        assert_eq!(soften("a", ok, &mut partial), vec![1, 2]);
        assert!(!partial);

        let err: Result<Vec<i32>, String> = Err("boom".to_owned());
        assert!(soften("b", err, &mut partial).is_empty());
        assert!(partial);
    }
}
