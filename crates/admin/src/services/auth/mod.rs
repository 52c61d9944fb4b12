//! Authentication service.
//!
//! Handles password hashing (Argon2id), credential verification for all
//! three login types, and admin session lifecycle. Only admin logins get a
//! server-side session token; driver and shop logins are verified and
//! redirected to their own apps.

mod error;

pub use error::AuthError;

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng};
use argon2::Argon2;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use orderdash_core::{Email, LoginType, ShopStatus};

use crate::config::SessionConfig;
use crate::db::{AdminUserRepository, SessionRepository, ShopAccountRepository, UserRepository};
use crate::models::{AdminSession, AdminUser, ShopAccount, User};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Result of a successful login, by account kind.
#[derive(Debug)]
pub enum LoginOutcome {
    /// Dashboard admin, with a freshly issued session.
    Admin {
        admin: AdminUser,
        session: AdminSession,
    },
    /// Delivery driver; no dashboard session is issued.
    Driver(User),
    /// Shop owner; no dashboard session is issued.
    Shop(ShopAccount),
}

/// Hash a password using Argon2id with default parameters.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| AuthError::PasswordHash)?;
    Ok(hash.to_string())
}

/// Verify a password against a stored Argon2 hash.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if the stored hash is malformed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(hash).map_err(|_| AuthError::PasswordHash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Check that a new password meets the minimum requirements.
///
/// # Errors
///
/// Returns `AuthError::WeakPassword` if the password is too short.
pub fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword {
            min_length: MIN_PASSWORD_LENGTH,
        });
    }
    Ok(())
}

/// Authentication service over the repositories.
pub struct AuthService<'a> {
    pool: &'a PgPool,
    session: SessionConfig,
}

impl<'a> AuthService<'a> {
    /// Create a new auth service.
    #[must_use]
    pub const fn new(pool: &'a PgPool, session: SessionConfig) -> Self {
        Self { pool, session }
    }

    /// Authenticate a login attempt for the given account kind.
    ///
    /// Unknown emails and wrong passwords both map to `InvalidCredentials`
    /// so the response doesn't leak which accounts exist.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` on bad email/password,
    /// `AuthError::AccountNotActive` for shops that aren't approved yet,
    /// or `AuthError::Repository` on database failure.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        login_type: LoginType,
    ) -> Result<LoginOutcome, AuthError> {
        let email = Email::parse(email)?;

        match login_type {
            LoginType::Admin => self.login_admin(&email, password).await,
            LoginType::Driver => self.login_driver(&email, password).await,
            LoginType::Shop => self.login_shop(&email, password).await,
        }
    }

    async fn login_admin(&self, email: &Email, password: &str) -> Result<LoginOutcome, AuthError> {
        let repo = AdminUserRepository::new(self.pool);
        let Some((admin, hash)) = repo.get_password_hash(email).await? else {
            return Err(AuthError::InvalidCredentials);
        };

        if !verify_password(password, &hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        let session = self.create_session(&admin).await?;
        Ok(LoginOutcome::Admin { admin, session })
    }

    async fn login_driver(&self, email: &Email, password: &str) -> Result<LoginOutcome, AuthError> {
        let repo = UserRepository::new(self.pool);
        let Some((user, hash)) = repo.get_password_hash(email).await? else {
            return Err(AuthError::InvalidCredentials);
        };

        if !verify_password(password, &hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(LoginOutcome::Driver(user))
    }

    async fn login_shop(&self, email: &Email, password: &str) -> Result<LoginOutcome, AuthError> {
        let repo = ShopAccountRepository::new(self.pool);
        let Some((shop, hash)) = repo.get_password_hash(email).await? else {
            return Err(AuthError::InvalidCredentials);
        };

        if !verify_password(password, &hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        if shop.status != ShopStatus::Active {
            return Err(AuthError::AccountNotActive);
        }

        Ok(LoginOutcome::Shop(shop))
    }

    /// Issue a new session for an admin, expiring after the idle timeout.
    async fn create_session(&self, admin: &AdminUser) -> Result<AdminSession, AuthError> {
        let token = Uuid::new_v4().to_string();
        let expires_at = Utc::now()
            + chrono::Duration::from_std(self.session.idle_timeout)
                .unwrap_or_else(|_| chrono::Duration::minutes(15));

        let session = SessionRepository::new(self.pool)
            .create(&token, admin.id, expires_at)
            .await?;
        Ok(session)
    }

    /// Delete a session token. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` on database failure.
    pub async fn logout(&self, token: &str) -> Result<(), AuthError> {
        SessionRepository::new(self.pool).delete(token).await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("correct horse battery").unwrap();
        assert!(verify_password("correct horse battery", &hash).unwrap());
        assert!(!verify_password("wrong password", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("same-password").unwrap();
        let b = hash_password("same-password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        let result = verify_password("anything", "not-a-phc-string");
        assert!(matches!(result, Err(AuthError::PasswordHash)));
    }

    #[test]
    fn test_validate_password_too_short() {
        assert!(matches!(
            validate_password("short"),
            Err(AuthError::WeakPassword { min_length: 8 })
        ));
    }

    #[test]
    fn test_validate_password_ok() {
        assert!(validate_password("long enough").is_ok());
    }
}
