//! User repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use orderdash_core::{Email, UserId, UserType};

use super::{RepositoryError, map_unique_violation};
use crate::models::User;

/// Internal row type for `PostgreSQL` user queries.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i32,
    email: String,
    user_type: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;
        let user_type: UserType = row.user_type.parse().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid user type in database: {e}"))
        })?;

        Ok(Self {
            id: UserId::new(row.id),
            email,
            user_type,
            created_at: row.created_at,
        })
    }
}

/// Repository for platform user database operations.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all users, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn list_all(&self) -> Result<Vec<User>, RepositoryError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, email, user_type, created_at
            FROM users
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get a user by their ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, email, user_type, created_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Get a user by email address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, email, user_type, created_at
            FROM users
            WHERE email = $1
            ",
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Get a user's password hash by email, for login verification.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_password_hash(
        &self,
        email: &Email,
    ) -> Result<Option<(User, String)>, RepositoryError> {
        let row = sqlx::query_as::<_, (i32, String, String, String, DateTime<Utc>)>(
            r"
            SELECT id, email, password_hash, user_type, created_at
            FROM users
            WHERE email = $1
            ",
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        match row {
            Some((id, email, password_hash, user_type, created_at)) => {
                let user = UserRow {
                    id,
                    email,
                    user_type,
                    created_at,
                }
                .try_into()?;
                Ok(Some((user, password_hash)))
            }
            None => Ok(None),
        }
    }

    /// Create a new user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        email: &Email,
        password_hash: &str,
        user_type: UserType,
    ) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            INSERT INTO users (email, password_hash, user_type)
            VALUES ($1, $2, $3)
            RETURNING id, email, user_type, created_at
            ",
        )
        .bind(email.as_str())
        .bind(password_hash)
        .bind(user_type.to_string())
        .fetch_one(self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "email already exists"))?;

        row.try_into()
    }

    /// Update a user's email and account type.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the user doesn't exist.
    /// Returns `RepositoryError::Conflict` if the email is already taken.
    pub async fn update(
        &self,
        id: UserId,
        email: &Email,
        user_type: UserType,
    ) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            UPDATE users
            SET email = $1, user_type = $2
            WHERE id = $3
            RETURNING id, email, user_type, created_at
            ",
        )
        .bind(email.as_str())
        .bind(user_type.to_string())
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "email already exists"))?
        .ok_or(RepositoryError::NotFound)?;

        row.try_into()
    }

    /// Replace a user's password hash.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the user doesn't exist.
    pub async fn update_password(
        &self,
        id: UserId,
        password_hash: &str,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET password_hash = $1
            WHERE id = $2
            ",
        )
        .bind(password_hash)
        .bind(id.as_i32())
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Delete a user by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the user doesn't exist.
    pub async fn delete(&self, id: UserId) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM users
            WHERE id = $1
            ",
        )
        .bind(id.as_i32())
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_row_conversion() {
        let row = UserRow {
            id: 1,
            email: "driver@example.com".to_string(),
            user_type: "driver".to_string(),
            created_at: Utc::now(),
        };

        let user: User = row.try_into().unwrap();
        assert_eq!(user.id, UserId::new(1));
        assert_eq!(user.user_type, UserType::Driver);
    }

    #[test]
    fn test_row_conversion_rejects_bad_user_type() {
        let row = UserRow {
            id: 1,
            email: "driver@example.com".to_string(),
            user_type: "alien".to_string(),
            created_at: Utc::now(),
        };

        let result: Result<User, _> = row.try_into();
        assert!(matches!(result, Err(RepositoryError::DataCorruption(_))));
    }
}
