//! Order read endpoints. Orders are created by the apps, not the dashboard.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::db::OrderRepository;
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct OrderList {
    pub success: bool,
    pub orders: Vec<crate::models::Order>,
}

/// `GET /api/admin/orders`
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
) -> Result<Json<OrderList>, AppError> {
    let orders = OrderRepository::new(state.pool()).list_all().await?;
    Ok(Json(OrderList {
        success: true,
        orders,
    }))
}
