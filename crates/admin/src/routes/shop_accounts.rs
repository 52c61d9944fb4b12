//! Shop account CRUD endpoints.

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use orderdash_core::{CategoryId, Email, ShopAccountId, ShopStatus};

use crate::db::ShopAccountRepository;
use crate::db::shop_accounts::ShopAccountFields;
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::services::auth::{self, AuthError};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ShopAccountList {
    pub success: bool,
    pub shops: Vec<crate::models::ShopAccount>,
}

#[derive(Debug, Deserialize)]
pub struct CreateShopPayload {
    pub shop_name: String,
    pub email: String,
    pub password: String,
    pub contact_person: String,
    pub phone: String,
    pub address: String,
    pub afm: String,
    pub category_id: Option<i32>,
    #[serde(default)]
    pub status: ShopStatus,
}

#[derive(Debug, Deserialize)]
pub struct UpdateShopPayload {
    pub shop_name: String,
    pub email: String,
    pub contact_person: String,
    pub phone: String,
    pub address: String,
    pub afm: String,
    pub category_id: Option<i32>,
    pub status: ShopStatus,
}

#[derive(Debug, Deserialize)]
pub struct PasswordPayload {
    pub password: String,
}

/// `GET /api/admin/shop-accounts`
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
) -> Result<Json<ShopAccountList>, AppError> {
    let shops = ShopAccountRepository::new(state.pool()).list_all().await?;
    Ok(Json(ShopAccountList {
        success: true,
        shops,
    }))
}

/// `POST /api/admin/shop-accounts`
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Json(payload): Json<CreateShopPayload>,
) -> Result<Json<Value>, AppError> {
    let email = Email::parse(&payload.email).map_err(AuthError::from)?;
    auth::validate_password(&payload.password)?;
    let hash = auth::hash_password(&payload.password)?;

    let fields = ShopAccountFields {
        shop_name: &payload.shop_name,
        email: &email,
        contact_person: &payload.contact_person,
        phone: &payload.phone,
        address: &payload.address,
        afm: &payload.afm,
        category_id: payload.category_id.map(CategoryId::new),
        status: payload.status,
    };

    let shop = ShopAccountRepository::new(state.pool())
        .create(&fields, &hash)
        .await?;

    Ok(Json(json!({ "success": true, "shop": shop })))
}

/// `PUT /api/admin/shop-accounts/{id}`
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateShopPayload>,
) -> Result<Json<Value>, AppError> {
    let email = Email::parse(&payload.email).map_err(AuthError::from)?;

    let fields = ShopAccountFields {
        shop_name: &payload.shop_name,
        email: &email,
        contact_person: &payload.contact_person,
        phone: &payload.phone,
        address: &payload.address,
        afm: &payload.afm,
        category_id: payload.category_id.map(CategoryId::new),
        status: payload.status,
    };

    let shop = ShopAccountRepository::new(state.pool())
        .update(ShopAccountId::new(id), &fields)
        .await?;

    Ok(Json(json!({ "success": true, "shop": shop })))
}

/// `PUT /api/admin/shop-accounts/{id}/password`
pub async fn change_password(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Path(id): Path<i32>,
    Json(payload): Json<PasswordPayload>,
) -> Result<Json<Value>, AppError> {
    auth::validate_password(&payload.password)?;
    let hash = auth::hash_password(&payload.password)?;

    ShopAccountRepository::new(state.pool())
        .update_password(ShopAccountId::new(id), &hash)
        .await?;

    Ok(Json(json!({ "success": true, "message": "password updated" })))
}

/// `DELETE /api/admin/shop-accounts/{id}`
pub async fn remove(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Path(id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    ShopAccountRepository::new(state.pool())
        .delete(ShopAccountId::new(id))
        .await?;

    Ok(Json(json!({ "success": true, "message": "shop deleted" })))
}
