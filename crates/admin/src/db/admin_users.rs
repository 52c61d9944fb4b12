//! Admin user repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use orderdash_core::{AdminRole, AdminUserId, Email};

use super::{RepositoryError, map_unique_violation};
use crate::models::AdminUser;

/// Internal row type for `PostgreSQL` admin user queries.
#[derive(Debug, sqlx::FromRow)]
struct AdminUserRow {
    id: i32,
    email: String,
    name: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AdminUserRow> for AdminUser {
    type Error = RepositoryError;

    fn try_from(row: AdminUserRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;
        let role: AdminRole = row.role.parse().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid admin role in database: {e}"))
        })?;

        Ok(Self {
            id: AdminUserId::new(row.id),
            email,
            name: row.name,
            role,
            created_at: row.created_at,
        })
    }
}

/// Repository for admin user database operations.
pub struct AdminUserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AdminUserRepository<'a> {
    /// Create a new admin user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all admin users, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<AdminUser>, RepositoryError> {
        let rows = sqlx::query_as::<_, AdminUserRow>(
            r"
            SELECT id, email, name, role, created_at
            FROM admin_user
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get an admin user by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: AdminUserId) -> Result<Option<AdminUser>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminUserRow>(
            r"
            SELECT id, email, name, role, created_at
            FROM admin_user
            WHERE id = $1
            ",
        )
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Get an admin user by email address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<AdminUser>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminUserRow>(
            r"
            SELECT id, email, name, role, created_at
            FROM admin_user
            WHERE email = $1
            ",
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Get an admin user and their password hash by email, for login.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_password_hash(
        &self,
        email: &Email,
    ) -> Result<Option<(AdminUser, String)>, RepositoryError> {
        let row = sqlx::query_as::<_, (i32, String, String, String, String, DateTime<Utc>)>(
            r"
            SELECT id, email, name, password_hash, role, created_at
            FROM admin_user
            WHERE email = $1
            ",
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        match row {
            Some((id, email, name, password_hash, role, created_at)) => {
                let admin = AdminUserRow {
                    id,
                    email,
                    name,
                    role,
                    created_at,
                }
                .try_into()?;
                Ok(Some((admin, password_hash)))
            }
            None => Ok(None),
        }
    }

    /// Create a new admin user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        email: &Email,
        name: &str,
        password_hash: &str,
        role: AdminRole,
    ) -> Result<AdminUser, RepositoryError> {
        let row = sqlx::query_as::<_, AdminUserRow>(
            r"
            INSERT INTO admin_user (email, name, password_hash, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, name, role, created_at
            ",
        )
        .bind(email.as_str())
        .bind(name)
        .bind(password_hash)
        .bind(role.to_string())
        .fetch_one(self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "email already exists"))?;

        row.try_into()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_row_conversion() {
        let row = AdminUserRow {
            id: 1,
            email: "admin@example.com".to_string(),
            name: "Ops Admin".to_string(),
            role: "super_admin".to_string(),
            created_at: Utc::now(),
        };

        let admin: AdminUser = row.try_into().unwrap();
        assert_eq!(admin.id, AdminUserId::new(1));
        assert_eq!(admin.role, AdminRole::SuperAdmin);
    }

    #[test]
    fn test_row_conversion_rejects_bad_role() {
        let row = AdminUserRow {
            id: 1,
            email: "admin@example.com".to_string(),
            name: "Ops Admin".to_string(),
            role: "root".to_string(),
            created_at: Utc::now(),
        };

        let result: Result<AdminUser, _> = row.try_into();
        assert!(matches!(result, Err(RepositoryError::DataCorruption(_))));
    }
}
