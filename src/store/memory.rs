//! In-memory store implementation
//!
//! Used by tests; records save calls so callers can assert how persistence
//! was exercised.

use crate::error::TrackerError;
use crate::store::repository::TrackerStore;
use crate::types::{Match, Player};
use std::sync::RwLock;

/// In-memory tracker store
#[derive(Debug, Default)]
pub struct MemoryStore {
    players: RwLock<Vec<Player>>,
    matches: RwLock<Vec<Match>>,
    player_saves: RwLock<usize>,
    match_saves: RwLock<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `save_players` calls made (for testing)
    pub fn player_save_count(&self) -> usize {
        self.player_saves.read().map(|n| *n).unwrap_or_default()
    }

    /// Number of `save_matches` calls made (for testing)
    pub fn match_save_count(&self) -> usize {
        self.match_saves.read().map(|n| *n).unwrap_or_default()
    }

    /// Preset both collections (for testing)
    pub fn preset(
        &self,
        players: Vec<Player>,
        matches: Vec<Match>,
    ) -> crate::error::Result<()> {
        *self.players.write().map_err(|_| lock_error())? = players;
        *self.matches.write().map_err(|_| lock_error())? = matches;
        Ok(())
    }
}

fn lock_error() -> TrackerError {
    TrackerError::StorageError {
        message: "failed to acquire store lock".to_string(),
    }
}

impl TrackerStore for MemoryStore {
    fn load_players(&self) -> crate::error::Result<Vec<Player>> {
        Ok(self.players.read().map_err(|_| lock_error())?.clone())
    }

    fn save_players(&self, players: &[Player]) -> crate::error::Result<()> {
        *self.players.write().map_err(|_| lock_error())? = players.to_vec();
        *self.player_saves.write().map_err(|_| lock_error())? += 1;
        Ok(())
    }

    fn load_matches(&self) -> crate::error::Result<Vec<Match>> {
        Ok(self.matches.read().map_err(|_| lock_error())?.clone())
    }

    fn save_matches(&self, matches: &[Match]) -> crate::error::Result<()> {
        *self.matches.write().map_err(|_| lock_error())? = matches.to_vec();
        *self.match_saves.write().map_err(|_| lock_error())? += 1;
        Ok(())
    }
}
