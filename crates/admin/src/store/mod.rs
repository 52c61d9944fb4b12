//! Client-local data stores layered over key-value storage.

pub mod announcements;

pub use announcements::AnnouncementStore;
