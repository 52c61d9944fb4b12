//! Access log repository (audit trail).

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use orderdash_core::AccessLogId;

use super::RepositoryError;
use crate::models::AccessLog;

/// Internal row type for `PostgreSQL` access log queries.
#[derive(Debug, sqlx::FromRow)]
struct AccessLogRow {
    id: i32,
    actor: String,
    action: String,
    detail: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<AccessLogRow> for AccessLog {
    fn from(row: AccessLogRow) -> Self {
        Self {
            id: AccessLogId::new(row.id),
            actor: row.actor,
            action: row.action,
            detail: row.detail,
            created_at: row.created_at,
        }
    }
}

/// Repository for access log database operations.
pub struct AccessLogRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AccessLogRepository<'a> {
    /// Create a new access log repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the most recent entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<AccessLog>, RepositoryError> {
        let rows = sqlx::query_as::<_, AccessLogRow>(
            r"
            SELECT id, actor, action, detail, created_at
            FROM access_log
            ORDER BY created_at DESC
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Insert an audit entry.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(
        &self,
        actor: &str,
        action: &str,
        detail: Option<&str>,
    ) -> Result<AccessLog, RepositoryError> {
        let row = sqlx::query_as::<_, AccessLogRow>(
            r"
            INSERT INTO access_log (actor, action, detail)
            VALUES ($1, $2, $3)
            RETURNING id, actor, action, detail, created_at
            ",
        )
        .bind(actor)
        .bind(action)
        .bind(detail)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }
}
