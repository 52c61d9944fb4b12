//! Platform user CRUD endpoints.

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use orderdash_core::{Email, UserId, UserType};

use crate::db::UserRepository;
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::services::auth::{self, AuthError};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UserList {
    pub success: bool,
    pub users: Vec<crate::models::User>,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserPayload {
    pub email: String,
    pub password: String,
    pub user_type: UserType,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserPayload {
    pub email: String,
    pub user_type: UserType,
}

#[derive(Debug, Deserialize)]
pub struct PasswordPayload {
    pub password: String,
}

/// `GET /api/admin/users`
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
) -> Result<Json<UserList>, AppError> {
    let users = UserRepository::new(state.pool()).list_all().await?;
    Ok(Json(UserList {
        success: true,
        users,
    }))
}

/// `POST /api/admin/users`
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Json(payload): Json<CreateUserPayload>,
) -> Result<Json<Value>, AppError> {
    let email = Email::parse(&payload.email).map_err(AuthError::from)?;
    auth::validate_password(&payload.password)?;
    let hash = auth::hash_password(&payload.password)?;

    let user = UserRepository::new(state.pool())
        .create(&email, &hash, payload.user_type)
        .await?;

    Ok(Json(json!({ "success": true, "user": user })))
}

/// `PUT /api/admin/users/{id}`
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserPayload>,
) -> Result<Json<Value>, AppError> {
    let email = Email::parse(&payload.email).map_err(AuthError::from)?;

    let user = UserRepository::new(state.pool())
        .update(UserId::new(id), &email, payload.user_type)
        .await?;

    Ok(Json(json!({ "success": true, "user": user })))
}

/// `PUT /api/admin/users/{id}/password`
pub async fn change_password(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Path(id): Path<i32>,
    Json(payload): Json<PasswordPayload>,
) -> Result<Json<Value>, AppError> {
    auth::validate_password(&payload.password)?;
    let hash = auth::hash_password(&payload.password)?;

    UserRepository::new(state.pool())
        .update_password(UserId::new(id), &hash)
        .await?;

    Ok(Json(json!({ "success": true, "message": "password updated" })))
}

/// `DELETE /api/admin/users/{id}`
pub async fn remove(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Path(id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    UserRepository::new(state.pool())
        .delete(UserId::new(id))
        .await?;

    Ok(Json(json!({ "success": true, "message": "user deleted" })))
}
