//! Repository interface for tracker persistence
//!
//! Both collections are persisted as whole JSON arrays under fixed string
//! keys. Entities are mutated only by rewriting the full array; a key that
//! was never written loads as an empty collection.

use crate::types::{Match, Player};

/// Fixed key under which the player collection is persisted
pub const PLAYERS_KEY: &str = "players";

/// Fixed key under which the match collection is persisted
pub const MATCHES_KEY: &str = "matches";

/// Trait for tracker storage operations
pub trait TrackerStore: Send + Sync {
    /// Load the full player collection, empty when never written
    fn load_players(&self) -> crate::error::Result<Vec<Player>>;

    /// Rewrite the full player collection
    fn save_players(&self, players: &[Player]) -> crate::error::Result<()>;

    /// Load the full match collection, empty when never written
    fn load_matches(&self) -> crate::error::Result<Vec<Match>>;

    /// Rewrite the full match collection
    fn save_matches(&self, matches: &[Match]) -> crate::error::Result<()>;
}
