//! Injected key-value storage for session state.
//!
//! The tracker never touches a concrete store directly; anything that can
//! get/set/remove string keys works. [`MemoryStore`] is the in-process
//! implementation used by the dashboard shell and the tests.

use std::collections::HashMap;

/// Key holding the opaque session token.
pub const KEY_SESSION_TOKEN: &str = "admin_session_token";

/// Key holding the persisted expiry timestamp (unix millis).
pub const KEY_SESSION_EXPIRY: &str = "admin_session_expiry";

/// Key holding the logged-in admin's display name.
pub const KEY_USERNAME: &str = "admin_username";

/// Key holding the announcement log (JSON array).
pub const KEY_ANNOUNCEMENTS: &str = "announcements";

/// Key holding per-announcement view counts (JSON object).
pub const KEY_ANNOUNCEMENT_VIEWS: &str = "announcement_views";

/// String key-value storage, the shape of browser local storage.
pub trait KeyValueStore {
    /// Read a key, `None` if absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a key, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);

    /// Remove a key. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str);
}

/// In-memory key-value store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(KEY_SESSION_TOKEN), None);

        store.set(KEY_SESSION_TOKEN, "abc");
        assert_eq!(store.get(KEY_SESSION_TOKEN), Some("abc".to_owned()));

        store.set(KEY_SESSION_TOKEN, "def");
        assert_eq!(store.get(KEY_SESSION_TOKEN), Some("def".to_owned()));

        store.remove(KEY_SESSION_TOKEN);
        assert_eq!(store.get(KEY_SESSION_TOKEN), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_absent_key_is_noop() {
        let mut store = MemoryStore::new();
        store.remove("never-set");
        assert!(store.is_empty());
    }
}
