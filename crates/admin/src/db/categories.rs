//! Category repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use orderdash_core::CategoryId;

use super::{RepositoryError, map_unique_violation};
use crate::models::Category;

/// Internal row type for `PostgreSQL` category queries.
#[derive(Debug, sqlx::FromRow)]
struct CategoryRow {
    id: i32,
    name: String,
    description: Option<String>,
    icon: Option<String>,
    color: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: CategoryId::new(row.id),
            name: row.name,
            description: row.description,
            icon: row.icon,
            color: row.color,
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}

/// Fields accepted when creating or updating a category.
#[derive(Debug, Clone)]
pub struct CategoryFields<'f> {
    pub name: &'f str,
    pub description: Option<&'f str>,
    pub icon: Option<&'f str>,
    pub color: Option<&'f str>,
    pub is_active: bool,
}

/// Repository for category database operations.
pub struct CategoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepository<'a> {
    /// Create a new category repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all categories, alphabetically.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r"
            SELECT id, name, description, icon, color, is_active, created_at
            FROM category
            ORDER BY name ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get a category by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: CategoryId) -> Result<Option<Category>, RepositoryError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r"
            SELECT id, name, description, icon, color, is_active, created_at
            FROM category
            WHERE id = $1
            ",
        )
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Create a new category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the name already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, fields: &CategoryFields<'_>) -> Result<Category, RepositoryError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r"
            INSERT INTO category (name, description, icon, color, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, icon, color, is_active, created_at
            ",
        )
        .bind(fields.name)
        .bind(fields.description)
        .bind(fields.icon)
        .bind(fields.color)
        .bind(fields.is_active)
        .fetch_one(self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "category name already exists"))?;

        Ok(row.into())
    }

    /// Update a category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the category doesn't exist.
    /// Returns `RepositoryError::Conflict` if the name is already taken.
    pub async fn update(
        &self,
        id: CategoryId,
        fields: &CategoryFields<'_>,
    ) -> Result<Category, RepositoryError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r"
            UPDATE category
            SET name = $1, description = $2, icon = $3, color = $4, is_active = $5
            WHERE id = $6
            RETURNING id, name, description, icon, color, is_active, created_at
            ",
        )
        .bind(fields.name)
        .bind(fields.description)
        .bind(fields.icon)
        .bind(fields.color)
        .bind(fields.is_active)
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "category name already exists"))?
        .ok_or(RepositoryError::NotFound)?;

        Ok(row.into())
    }

    /// Delete a category by ID.
    ///
    /// Shops referencing it keep working; the foreign key is set null.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the category doesn't exist.
    pub async fn delete(&self, id: CategoryId) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM category
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
