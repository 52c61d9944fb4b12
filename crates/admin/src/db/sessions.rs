//! Admin session repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use orderdash_core::AdminUserId;

use super::RepositoryError;
use crate::models::AdminSession;

/// Internal row type for `PostgreSQL` session queries.
#[derive(Debug, sqlx::FromRow)]
struct SessionRow {
    token: String,
    admin_user_id: i32,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl From<SessionRow> for AdminSession {
    fn from(row: SessionRow) -> Self {
        Self {
            token: row.token,
            admin_user_id: AdminUserId::new(row.admin_user_id),
            created_at: row.created_at,
            expires_at: row.expires_at,
        }
    }
}

/// Repository for admin session database operations.
pub struct SessionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SessionRepository<'a> {
    /// Create a new session repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a session for a newly logged-in admin.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        token: &str,
        admin_user_id: AdminUserId,
        expires_at: DateTime<Utc>,
    ) -> Result<AdminSession, RepositoryError> {
        let row = sqlx::query_as::<_, SessionRow>(
            r"
            INSERT INTO admin_session (token, admin_user_id, expires_at)
            VALUES ($1, $2, $3)
            RETURNING token, admin_user_id, created_at, expires_at
            ",
        )
        .bind(token)
        .bind(admin_user_id.as_i32())
        .bind(expires_at)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Look up a session by its token.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, token: &str) -> Result<Option<AdminSession>, RepositoryError> {
        let row = sqlx::query_as::<_, SessionRow>(
            r"
            SELECT token, admin_user_id, created_at, expires_at
            FROM admin_session
            WHERE token = $1
            ",
        )
        .bind(token)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Slide a session's expiry forward after activity.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the session doesn't exist.
    pub async fn touch(
        &self,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE admin_session
            SET expires_at = $1
            WHERE token = $2
            ",
        )
        .bind(expires_at)
        .bind(token)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Remove a session on logout. Deleting a missing token is not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, token: &str) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            DELETE FROM admin_session
            WHERE token = $1
            ",
        )
        .bind(token)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Remove all sessions that expired before `now`. Returns the count.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM admin_session
            WHERE expires_at < $1
            ",
        )
        .bind(now)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
