//! Shop account repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use orderdash_core::{CategoryId, Email, ShopAccountId, ShopStatus};

use super::{RepositoryError, map_unique_violation};
use crate::models::ShopAccount;

/// Internal row type for `PostgreSQL` shop account queries.
#[derive(Debug, sqlx::FromRow)]
struct ShopAccountRow {
    id: i32,
    shop_name: String,
    email: String,
    contact_person: String,
    phone: String,
    address: String,
    afm: String,
    category_id: Option<i32>,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ShopAccountRow> for ShopAccount {
    type Error = RepositoryError;

    fn try_from(row: ShopAccountRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;
        let status: ShopStatus = row.status.parse().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid shop status in database: {e}"))
        })?;

        Ok(Self {
            id: ShopAccountId::new(row.id),
            shop_name: row.shop_name,
            email,
            contact_person: row.contact_person,
            phone: row.phone,
            address: row.address,
            afm: row.afm,
            category_id: row.category_id.map(CategoryId::new),
            status,
            created_at: row.created_at,
        })
    }
}

/// Fields accepted when creating or updating a shop account.
#[derive(Debug, Clone)]
pub struct ShopAccountFields<'f> {
    pub shop_name: &'f str,
    pub email: &'f Email,
    pub contact_person: &'f str,
    pub phone: &'f str,
    pub address: &'f str,
    pub afm: &'f str,
    pub category_id: Option<CategoryId>,
    pub status: ShopStatus,
}

const SELECT_COLUMNS: &str = "id, shop_name, email, contact_person, phone, \
                              address, afm, category_id, status, created_at";

/// Repository for shop account database operations.
pub struct ShopAccountRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ShopAccountRepository<'a> {
    /// Create a new shop account repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all shop accounts, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn list_all(&self) -> Result<Vec<ShopAccount>, RepositoryError> {
        let rows = sqlx::query_as::<_, ShopAccountRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM shop_account ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get a shop account by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: ShopAccountId) -> Result<Option<ShopAccount>, RepositoryError> {
        let row = sqlx::query_as::<_, ShopAccountRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM shop_account WHERE id = $1"
        ))
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Get a shop account and its password hash by email, for login.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_password_hash(
        &self,
        email: &Email,
    ) -> Result<Option<(ShopAccount, String)>, RepositoryError> {
        let row = sqlx::query_as::<_, (i32, String)>(
            r"
            SELECT id, password_hash
            FROM shop_account
            WHERE email = $1
            ",
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        match row {
            Some((id, password_hash)) => {
                let shop = self
                    .get_by_id(ShopAccountId::new(id))
                    .await?
                    .ok_or(RepositoryError::NotFound)?;
                Ok(Some((shop, password_hash)))
            }
            None => Ok(None),
        }
    }

    /// Create a new shop account.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        fields: &ShopAccountFields<'_>,
        password_hash: &str,
    ) -> Result<ShopAccount, RepositoryError> {
        let row = sqlx::query_as::<_, ShopAccountRow>(&format!(
            "INSERT INTO shop_account \
             (shop_name, email, password_hash, contact_person, phone, address, afm, category_id, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {SELECT_COLUMNS}"
        ))
        .bind(fields.shop_name)
        .bind(fields.email.as_str())
        .bind(password_hash)
        .bind(fields.contact_person)
        .bind(fields.phone)
        .bind(fields.address)
        .bind(fields.afm)
        .bind(fields.category_id.map(|id| id.as_i32()))
        .bind(fields.status.to_string())
        .fetch_one(self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "email already exists"))?;

        row.try_into()
    }

    /// Update a shop account's profile fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the shop doesn't exist.
    /// Returns `RepositoryError::Conflict` if the email is already taken.
    pub async fn update(
        &self,
        id: ShopAccountId,
        fields: &ShopAccountFields<'_>,
    ) -> Result<ShopAccount, RepositoryError> {
        let row = sqlx::query_as::<_, ShopAccountRow>(&format!(
            "UPDATE shop_account \
             SET shop_name = $1, email = $2, contact_person = $3, phone = $4, \
                 address = $5, afm = $6, category_id = $7, status = $8 \
             WHERE id = $9 \
             RETURNING {SELECT_COLUMNS}"
        ))
        .bind(fields.shop_name)
        .bind(fields.email.as_str())
        .bind(fields.contact_person)
        .bind(fields.phone)
        .bind(fields.address)
        .bind(fields.afm)
        .bind(fields.category_id.map(|id| id.as_i32()))
        .bind(fields.status.to_string())
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "email already exists"))?
        .ok_or(RepositoryError::NotFound)?;

        row.try_into()
    }

    /// Replace a shop account's password hash.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the shop doesn't exist.
    pub async fn update_password(
        &self,
        id: ShopAccountId,
        password_hash: &str,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE shop_account
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

    /// Delete a shop account by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the shop doesn't exist.
    pub async fn delete(&self, id: ShopAccountId) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM shop_account
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
        let row = ShopAccountRow {
            id: 5,
            shop_name: "Souvlaki House".to_string(),
            email: "shop@example.com".to_string(),
            contact_person: "Maria".to_string(),
            phone: "+302101234567".to_string(),
            address: "Ermou 1, Athens".to_string(),
            afm: "123456789".to_string(),
            category_id: Some(2),
            status: "pending".to_string(),
            created_at: Utc::now(),
        };

        let shop: ShopAccount = row.try_into().unwrap();
        assert_eq!(shop.id, ShopAccountId::new(5));
        assert_eq!(shop.category_id, Some(CategoryId::new(2)));
        assert_eq!(shop.status, ShopStatus::Pending);
    }

    #[test]
    fn test_row_conversion_rejects_bad_status() {
        let row = ShopAccountRow {
            id: 5,
            shop_name: "Souvlaki House".to_string(),
            email: "shop@example.com".to_string(),
            contact_person: "Maria".to_string(),
            phone: "+302101234567".to_string(),
            address: "Ermou 1, Athens".to_string(),
            afm: "123456789".to_string(),
            category_id: None,
            status: "closed".to_string(),
            created_at: Utc::now(),
        };

        let result: Result<ShopAccount, _> = row.try_into();
        assert!(matches!(result, Err(RepositoryError::DataCorruption(_))));
    }

    #[test]
    fn test_fields_category_binds_as_optional_i32() {
        let email = Email::parse("shop@example.com").unwrap();
        let fields = ShopAccountFields {
            shop_name: "Souvlaki House",
            email: &email,
            contact_person: "Maria",
            phone: "+302101234567",
            address: "Ermou 1, Athens",
            afm: "123456789",
            category_id: Some(CategoryId::new(2)),
            status: ShopStatus::Active,
        };

        assert_eq!(fields.category_id.map(|id| id.as_i32()), Some(2));

        let without_category = ShopAccountFields {
            category_id: None,
            ..fields
        };
        assert_eq!(without_category.category_id.map(|id| id.as_i32()), None);
    }
}
