//! Announcement log over key-value storage.
//!
//! Announcements are dashboard-local: a JSON array under one key, with
//! per-announcement view counts under another. They never touch the
//! server database.

use std::collections::HashMap;

use chrono::Utc;
use thiserror::Error;

use orderdash_core::{AnnouncementId, Importance};

use crate::models::Announcement;
use crate::session::storage::{KEY_ANNOUNCEMENT_VIEWS, KEY_ANNOUNCEMENTS, KeyValueStore};

/// Errors from the announcement store.
#[derive(Debug, Error)]
pub enum AnnouncementError {
    /// Stored JSON could not be decoded.
    #[error("corrupt announcement data: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// No announcement with the given ID.
    #[error("announcement not found")]
    NotFound,
}

/// Announcement log over an injected key-value store.
pub struct AnnouncementStore<S> {
    storage: S,
}

impl<S: KeyValueStore> AnnouncementStore<S> {
    /// Wrap a key-value store.
    #[must_use]
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The underlying storage.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// List announcements, newest first. An absent key is an empty log.
    ///
    /// # Errors
    ///
    /// Returns `AnnouncementError::Corrupt` if the stored JSON is invalid.
    pub fn list(&self) -> Result<Vec<Announcement>, AnnouncementError> {
        let mut items = self.read_log()?;
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    /// Append a new announcement and return it.
    ///
    /// # Errors
    ///
    /// Returns `AnnouncementError::Corrupt` if the stored JSON is invalid.
    pub fn add(
        &mut self,
        message: &str,
        importance: Importance,
    ) -> Result<Announcement, AnnouncementError> {
        let mut items = self.read_log()?;
        let id = items
            .iter()
            .map(|a| a.id)
            .max()
            .map_or(AnnouncementId::new(1), |max| max.next());
        let announcement = Announcement {
            id,
            message: message.to_owned(),
            importance,
            created_at: Utc::now(),
        };
        items.push(announcement.clone());
        self.write_log(&items)?;
        Ok(announcement)
    }

    /// Remove an announcement and its view count.
    ///
    /// # Errors
    ///
    /// Returns `AnnouncementError::NotFound` if the ID doesn't exist.
    pub fn remove(&mut self, id: AnnouncementId) -> Result<(), AnnouncementError> {
        let mut items = self.read_log()?;
        let before = items.len();
        items.retain(|a| a.id != id);
        if items.len() == before {
            return Err(AnnouncementError::NotFound);
        }
        self.write_log(&items)?;

        let mut views = self.read_views()?;
        if views.remove(&id.as_i64().to_string()).is_some() {
            self.write_views(&views)?;
        }
        Ok(())
    }

    /// Increment the view count for an announcement and return the new count.
    ///
    /// # Errors
    ///
    /// Returns `AnnouncementError::Corrupt` if the stored JSON is invalid.
    pub fn record_view(&mut self, id: AnnouncementId) -> Result<u64, AnnouncementError> {
        let mut views = self.read_views()?;
        let count = views.entry(id.as_i64().to_string()).or_insert(0);
        *count += 1;
        let count = *count;
        self.write_views(&views)?;
        Ok(count)
    }

    /// Current view count for an announcement. Absent means zero.
    ///
    /// # Errors
    ///
    /// Returns `AnnouncementError::Corrupt` if the stored JSON is invalid.
    pub fn views(&self, id: AnnouncementId) -> Result<u64, AnnouncementError> {
        let views = self.read_views()?;
        Ok(views.get(&id.as_i64().to_string()).copied().unwrap_or(0))
    }

    /// Drop the whole log and all view counts.
    pub fn clear(&mut self) {
        self.storage.remove(KEY_ANNOUNCEMENTS);
        self.storage.remove(KEY_ANNOUNCEMENT_VIEWS);
    }

    fn read_log(&self) -> Result<Vec<Announcement>, AnnouncementError> {
        match self.storage.get(KEY_ANNOUNCEMENTS) {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn write_log(&mut self, items: &[Announcement]) -> Result<(), AnnouncementError> {
        let raw = serde_json::to_string(items)?;
        self.storage.set(KEY_ANNOUNCEMENTS, &raw);
        Ok(())
    }

    fn read_views(&self) -> Result<HashMap<String, u64>, AnnouncementError> {
        match self.storage.get(KEY_ANNOUNCEMENT_VIEWS) {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(HashMap::new()),
        }
    }

    fn write_views(&mut self, views: &HashMap<String, u64>) -> Result<(), AnnouncementError> {
        let raw = serde_json::to_string(views)?;
        self.storage.set(KEY_ANNOUNCEMENT_VIEWS, &raw);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::session::storage::MemoryStore;

    fn store() -> AnnouncementStore<MemoryStore> {
        AnnouncementStore::new(MemoryStore::new())
    }

    #[test]
    fn test_empty_storage_is_empty_log() {
        let store = store();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_add_and_list_newest_first() {
        let mut store = store();
        let first = store.add("maintenance tonight", Importance::High).unwrap();
        let second = store.add("new category added", Importance::Low).unwrap();

        let items = store.list().unwrap();
        assert_eq!(items.len(), 2);
        // Same created_at second is possible; IDs must at least differ.
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_remove_drops_views_too() {
        let mut store = store();
        let a = store.add("hello", Importance::Medium).unwrap();
        store.record_view(a.id).unwrap();
        assert_eq!(store.views(a.id).unwrap(), 1);

        store.remove(a.id).unwrap();
        assert!(store.list().unwrap().is_empty());
        assert_eq!(store.views(a.id).unwrap(), 0);
    }

    #[test]
    fn test_remove_unknown_id_is_not_found() {
        let mut store = store();
        let result = store.remove(AnnouncementId::new(404));
        assert!(matches!(result, Err(AnnouncementError::NotFound)));
    }

    #[test]
    fn test_view_counts_accumulate() {
        let mut store = store();
        let a = store.add("hello", Importance::Medium).unwrap();
        assert_eq!(store.record_view(a.id).unwrap(), 1);
        assert_eq!(store.record_view(a.id).unwrap(), 2);
        assert_eq!(store.record_view(a.id).unwrap(), 3);
    }

    #[test]
    fn test_corrupt_json_is_reported() {
        let mut backing = MemoryStore::new();
        backing.set(KEY_ANNOUNCEMENTS, "not json");
        let store = AnnouncementStore::new(backing);
        assert!(matches!(store.list(), Err(AnnouncementError::Corrupt(_))));
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut store = store();
        let a = store.add("hello", Importance::Medium).unwrap();
        store.record_view(a.id).unwrap();

        store.clear();
        assert!(store.list().unwrap().is_empty());
        assert_eq!(store.views(a.id).unwrap(), 0);
    }
}
