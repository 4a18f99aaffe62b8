//! Shared fixtures for integration tests

use mus_tracker::store::MemoryStore;
use mus_tracker::tracker::{DeletionGate, TrackerManager};
use mus_tracker::types::PlayerId;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Deletion code used by all test managers
pub const TEST_CODE: &str = "1234";

/// Manager backed by a fresh in-memory store
pub fn create_memory_manager() -> TrackerManager {
    TrackerManager::new(Arc::new(MemoryStore::new()), DeletionGate::new(TEST_CODE))
}

/// Register players by name and return their ids in order
pub fn register_players(manager: &TrackerManager, names: &[&str]) -> Vec<PlayerId> {
    names
        .iter()
        .map(|name| manager.add_player(name).expect("failed to add player").id)
        .collect()
}

/// Unique temporary data directory, removed on drop
pub struct TempDataDir {
    path: PathBuf,
}

impl TempDataDir {
    pub fn new() -> Self {
        let path = std::env::temp_dir().join(format!("mus-tracker-it-{}", uuid::Uuid::new_v4()));
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDataDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}
