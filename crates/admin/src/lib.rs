//! Orderdash Admin - administration API for the delivery platform.
//!
//! Library surface for the admin binary and the CLI tools: configuration,
//! repositories, auth service, session lifecycle, announcement store, and
//! the axum router.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod session;
pub mod state;
pub mod store;
