//! File-backed key-value store for the persisted collections
//!
//! Each fixed key maps to `<key>.json` inside a data directory, holding one
//! JSON array shaped like the in-memory model.

use crate::error::TrackerError;
use crate::store::repository::{TrackerStore, MATCHES_KEY, PLAYERS_KEY};
use crate::types::{Match, Player};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Store persisting each collection as a JSON array file in `data_dir`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `data_dir`, creating the directory if needed
    pub fn open(data_dir: impl Into<PathBuf>) -> crate::error::Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).map_err(|e| TrackerError::StorageError {
            message: format!(
                "failed to create data directory {}: {}",
                data_dir.display(),
                e
            ),
        })?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }

    /// Read the JSON array under `key`, defaulting to empty when absent
    fn read_key<T: DeserializeOwned>(&self, key: &str) -> crate::error::Result<Vec<T>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&path).map_err(|e| TrackerError::StorageError {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;

        let items = serde_json::from_str(&raw).map_err(|e| TrackerError::StorageError {
            message: format!("corrupt '{key}' collection in {}: {}", path.display(), e),
        })?;

        Ok(items)
    }

    /// Rewrite the whole JSON array under `key`
    fn write_key<T: Serialize>(&self, key: &str, items: &[T]) -> crate::error::Result<()> {
        let raw =
            serde_json::to_string_pretty(items).map_err(|e| TrackerError::StorageError {
                message: format!("failed to serialize '{key}' collection: {e}"),
            })?;

        let path = self.key_path(key);
        fs::write(&path, raw).map_err(|e| TrackerError::StorageError {
            message: format!("failed to write {}: {}", path.display(), e),
        })?;

        Ok(())
    }
}

impl TrackerStore for JsonFileStore {
    fn load_players(&self) -> crate::error::Result<Vec<Player>> {
        self.read_key(PLAYERS_KEY)
    }

    fn save_players(&self, players: &[Player]) -> crate::error::Result<()> {
        self.write_key(PLAYERS_KEY, players)
    }

    fn load_matches(&self) -> crate::error::Result<Vec<Match>> {
        self.read_key(MATCHES_KEY)
    }

    fn save_matches(&self, matches: &[Match]) -> crate::error::Result<()> {
        self.write_key(MATCHES_KEY, matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Team;
    use crate::utils;

    struct TempDir(PathBuf);

    impl TempDir {
        fn new() -> Self {
            let path = std::env::temp_dir().join(format!("mus-tracker-store-{}", uuid::Uuid::new_v4()));
            Self(path)
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn test_absent_keys_load_as_empty() {
        let dir = TempDir::new();
        let store = JsonFileStore::open(&dir.0).unwrap();

        assert!(store.load_players().unwrap().is_empty());
        assert!(store.load_matches().unwrap().is_empty());
    }

    #[test]
    fn test_players_roundtrip() {
        let dir = TempDir::new();
        let store = JsonFileStore::open(&dir.0).unwrap();

        let players = vec![
            Player::new("Marcos".to_string()),
            Player::new("Ana".to_string()),
        ];
        store.save_players(&players).unwrap();

        let loaded = store.load_players().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, players[0].id);
        assert_eq!(loaded[0].name, "Marcos");
        assert_eq!(loaded[1].name, "Ana");
    }

    #[test]
    fn test_matches_roundtrip_under_fixed_key() {
        let dir = TempDir::new();
        let store = JsonFileStore::open(&dir.0).unwrap();

        let m = Match {
            id: utils::generate_match_id(),
            date: utils::current_timestamp(),
            team1: Team {
                players: [utils::generate_player_id(), utils::generate_player_id()],
                score: 10,
            },
            team2: Team {
                players: [utils::generate_player_id(), utils::generate_player_id()],
                score: 5,
            },
            completed: true,
        };
        store.save_matches(std::slice::from_ref(&m)).unwrap();

        // Persisted under the fixed key file
        assert!(dir.0.join("matches.json").exists());

        let loaded = store.load_matches().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, m.id);
        assert_eq!(loaded[0].team1.score, 10);
        assert_eq!(loaded[0].team2.score, 5);
        assert!(loaded[0].completed);
    }

    #[test]
    fn test_save_rewrites_whole_array() {
        let dir = TempDir::new();
        let store = JsonFileStore::open(&dir.0).unwrap();

        store
            .save_players(&[Player::new("Marcos".to_string())])
            .unwrap();
        store.save_players(&[]).unwrap();

        assert!(store.load_players().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_collection_is_an_error() {
        let dir = TempDir::new();
        let store = JsonFileStore::open(&dir.0).unwrap();

        fs::write(dir.0.join("players.json"), "not json").unwrap();
        assert!(store.load_players().is_err());
    }
}
