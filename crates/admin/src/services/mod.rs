//! Business logic services for the admin backend.

pub mod auth;

pub use auth::AuthService;
