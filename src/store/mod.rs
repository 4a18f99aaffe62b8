//! Persistence layer for the two tracked collections
//!
//! This module defines the repository interface over the player and match
//! collections, a file-backed key-value implementation, and an in-memory
//! implementation used by tests.

pub mod json_file;
pub mod memory;
pub mod repository;

// Re-export commonly used types
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use repository::{TrackerStore, MATCHES_KEY, PLAYERS_KEY};
