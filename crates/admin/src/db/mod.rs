//! Database operations for the admin `PostgreSQL` database.
//!
//! # Tables
//!
//! - `users` - Platform users (drivers and shop members)
//! - `shop_account` - Registered shops
//! - `category` - Shop categories
//! - `orders` - Completed delivery orders (read-only surface)
//! - `access_log` - Audit trail
//! - `admin_user` - Dashboard operators
//! - `admin_session` - Session token storage
//!
//! Queries use the runtime `sqlx::query_as` API with private row types
//! converted into domain models via `TryFrom`, so the crate builds without
//! a live database.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/admin/migrations/` and run via:
//! ```bash
//! cargo run -p orderdash-cli -- migrate
//! ```

pub mod access_logs;
pub mod admin_users;
pub mod categories;
pub mod orders;
pub mod sessions;
pub mod shop_accounts;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use access_logs::AccessLogRepository;
pub use admin_users::AdminUserRepository;
pub use categories::CategoryRepository;
pub use orders::OrderRepository;
pub use sessions::SessionRepository;
pub use shop_accounts::ShopAccountRepository;
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Map a unique-constraint violation to `Conflict`, everything else to
/// `Database`.
pub(crate) fn map_unique_violation(e: sqlx::Error, conflict_msg: &str) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_unique_violation()
    {
        return RepositoryError::Conflict(conflict_msg.to_owned());
    }
    RepositoryError::Database(e)
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
