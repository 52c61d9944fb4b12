//! Admin session lifecycle.
//!
//! The dashboard keeps a client-side view of the session (token, expiry,
//! username) in a key-value store and enforces an idle timeout. This module
//! implements that lifecycle headlessly: storage is injected behind
//! [`KeyValueStore`], logout decisions are pure functions over explicit
//! timestamps, and [`SessionTracker`] sequences the transitions without
//! owning any real timers. The server-side counterpart is the expiry
//! sweeper, which prunes stale `admin_session` rows.

pub mod expiry;
pub mod storage;
pub mod tracker;

pub use expiry::{
    IDLE_TIMEOUT, LogoutReason, REDIRECT_DELAY, UnloadKind, VALIDATION_INTERVAL, Validation,
    should_logout, validate,
};
pub use storage::{KeyValueStore, MemoryStore};
pub use tracker::{LogoutHandler, SessionTracker, spawn_expiry_sweeper};
