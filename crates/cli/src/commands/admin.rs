//! Admin user management commands.
//!
//! # Usage
//!
//! ```bash
//! orderdash admin create -e admin@example.com -n "Admin Name" -p <password> -r super_admin
//! ```

use orderdash_core::{AdminRole, Email};

use orderdash_admin::db::AdminUserRepository;
use orderdash_admin::services::auth;

use super::{CommandError, connect};

/// Create a new admin user with a password.
///
/// # Errors
///
/// Returns `CommandError` on invalid input, a duplicate email, or a
/// database failure.
pub async fn create_user(
    email: &str,
    name: &str,
    password: &str,
    role: &str,
) -> Result<i32, CommandError> {
    let role: AdminRole = role
        .parse()
        .map_err(|_| CommandError::InvalidRole(role.to_owned()))?;
    let email = Email::parse(email).map_err(auth::AuthError::from)?;
    auth::validate_password(password)?;
    let password_hash = auth::hash_password(password)?;

    let pool = connect().await?;

    tracing::info!("Creating admin user: {} ({})", email, role);
    let admin = AdminUserRepository::new(&pool)
        .create(&email, name, &password_hash, role)
        .await?;

    tracing::info!(
        "Admin user created successfully! ID: {}, Email: {}, Role: {}",
        admin.id,
        admin.email,
        admin.role
    );

    Ok(admin.id.as_i32())
}
