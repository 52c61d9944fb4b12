//! Authentication error types.

use thiserror::Error;

use orderdash_core::EmailError;

use crate::db::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email or password did not match any account.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The password doesn't meet the minimum requirements.
    #[error("password must be at least {min_length} characters")]
    WeakPassword { min_length: usize },

    /// The supplied email address is malformed.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The account exists but is not allowed to log in yet.
    #[error("account is not active")]
    AccountNotActive,

    /// Password hashing or verification failed.
    #[error("password hash error")]
    PasswordHash,

    /// A database operation failed.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}
