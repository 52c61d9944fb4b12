//! Category CRUD endpoints.

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use orderdash_core::CategoryId;

use crate::db::CategoryRepository;
use crate::db::categories::CategoryFields;
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CategoryList {
    pub success: bool,
    pub categories: Vec<crate::models::Category>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

const fn default_active() -> bool {
    true
}

impl CategoryPayload {
    fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest("category name is required".to_owned()));
        }
        Ok(())
    }

    fn as_fields(&self) -> CategoryFields<'_> {
        CategoryFields {
            name: &self.name,
            description: self.description.as_deref(),
            icon: self.icon.as_deref(),
            color: self.color.as_deref(),
            is_active: self.is_active,
        }
    }
}

/// `GET /api/admin/categories`
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
) -> Result<Json<CategoryList>, AppError> {
    let categories = CategoryRepository::new(state.pool()).list_all().await?;
    Ok(Json(CategoryList {
        success: true,
        categories,
    }))
}

/// `POST /api/admin/categories`
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Json(payload): Json<CategoryPayload>,
) -> Result<Json<Value>, AppError> {
    payload.validate()?;

    let category = CategoryRepository::new(state.pool())
        .create(&payload.as_fields())
        .await?;

    Ok(Json(json!({ "success": true, "category": category })))
}

/// `PUT /api/admin/categories/{id}`
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Path(id): Path<i32>,
    Json(payload): Json<CategoryPayload>,
) -> Result<Json<Value>, AppError> {
    payload.validate()?;

    let category = CategoryRepository::new(state.pool())
        .update(CategoryId::new(id), &payload.as_fields())
        .await?;

    Ok(Json(json!({ "success": true, "category": category })))
}

/// `DELETE /api/admin/categories/{id}`
pub async fn remove(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Path(id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    CategoryRepository::new(state.pool())
        .delete(CategoryId::new(id))
        .await?;

    Ok(Json(json!({ "success": true, "message": "category deleted" })))
}
