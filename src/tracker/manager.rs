//! Tracker manager: all operations over the persisted collections
//!
//! The manager owns the store and the deletion gate. Every write is a full
//! rewrite of the affected collection; every displayed statistic comes from
//! the shared standings derivation.

use crate::error::TrackerError;
use crate::standings::{derive_standings, summarize, Summary};
use crate::store::TrackerStore;
use crate::tracker::gate::DeletionGate;
use crate::types::{Match, MatchId, Player, PlayerId, Standing, Team, MATCH_PLAYERS};
use crate::utils;
use std::sync::Arc;
use tracing::{debug, info};

/// Placeholder name shown for ids with no matching player
pub const UNKNOWN_PLAYER: &str = "Unknown";

/// Central handle for tracker operations
pub struct TrackerManager {
    store: Arc<dyn TrackerStore>,
    gate: DeletionGate,
}

impl TrackerManager {
    pub fn new(store: Arc<dyn TrackerStore>, gate: DeletionGate) -> Self {
        Self { store, gate }
    }

    /// Register a new player. The name is trimmed; empty names are
    /// rejected.
    pub fn add_player(&self, name: &str) -> crate::error::Result<Player> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackerError::InvalidPlayerName {
                reason: "name cannot be empty".to_string(),
            }
            .into());
        }

        let mut players = self.store.load_players()?;
        let player = Player::new(name.to_string());
        players.push(player.clone());
        self.store.save_players(&players)?;

        info!("Registered player '{}' ({})", player.name, player.id);
        Ok(player)
    }

    /// Record a finished match: the first two selected ids form team 1, the
    /// last two team 2. The match is stamped with the current time and the
    /// cached player counters are refreshed from full history.
    ///
    /// Referenced ids are not checked against the player collection;
    /// dangling ids degrade to a placeholder at display time.
    pub fn record_match(
        &self,
        selected: [PlayerId; MATCH_PLAYERS],
        score1: u32,
        score2: u32,
    ) -> crate::error::Result<Match> {
        let recorded = Match {
            id: utils::generate_match_id(),
            date: utils::current_timestamp(),
            team1: Team {
                players: [selected[0], selected[1]],
                score: score1,
            },
            team2: Team {
                players: [selected[2], selected[3]],
                score: score2,
            },
            completed: true,
        };

        let mut matches = self.store.load_matches()?;
        matches.push(recorded.clone());
        self.store.save_matches(&matches)?;

        self.refresh_cached_stats(&matches)?;

        info!(
            "Recorded match {} ({} - {})",
            recorded.id, score1, score2
        );
        Ok(recorded)
    }

    /// Delete a recorded match behind the gate
    pub fn delete_match(&self, match_id: MatchId, code: &str) -> crate::error::Result<()> {
        self.gate.authorize(code)?;

        let mut matches = self.store.load_matches()?;
        let before = matches.len();
        matches.retain(|m| m.id != match_id);
        if matches.len() == before {
            return Err(TrackerError::MatchNotFound {
                match_id: match_id.to_string(),
            }
            .into());
        }

        self.store.save_matches(&matches)?;
        self.refresh_cached_stats(&matches)?;

        info!("Deleted match {}", match_id);
        Ok(())
    }

    /// Delete a player behind the gate. Every match referencing the player
    /// id goes with it.
    pub fn delete_player(&self, player_id: PlayerId, code: &str) -> crate::error::Result<()> {
        self.gate.authorize(code)?;

        let mut players = self.store.load_players()?;
        let before = players.len();
        players.retain(|p| p.id != player_id);
        if players.len() == before {
            return Err(TrackerError::PlayerNotFound {
                player_id: player_id.to_string(),
            }
            .into());
        }

        let mut matches = self.store.load_matches()?;
        let match_count = matches.len();
        matches.retain(|m| !m.involves(&player_id));
        let removed_matches = match_count - matches.len();

        self.store.save_players(&players)?;
        self.store.save_matches(&matches)?;
        self.refresh_cached_stats(&matches)?;

        info!(
            "Deleted player {} and {} matches referencing it",
            player_id, removed_matches
        );
        Ok(())
    }

    /// Registered players in registration order
    pub fn players(&self) -> crate::error::Result<Vec<Player>> {
        self.store.load_players()
    }

    /// Recorded matches, newest first
    pub fn matches(&self) -> crate::error::Result<Vec<Match>> {
        let mut matches = self.store.load_matches()?;
        matches.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(matches)
    }

    /// Full ranking table derived from match history
    pub fn standings(&self) -> crate::error::Result<Vec<Standing>> {
        let players = self.store.load_players()?;
        let matches = self.store.load_matches()?;
        Ok(derive_standings(&players, &matches))
    }

    /// Dashboard view: top `n` players plus the `n` most recent matches
    pub fn summary(&self, n: usize) -> crate::error::Result<Summary> {
        let players = self.store.load_players()?;
        let matches = self.store.load_matches()?;
        Ok(summarize(&players, &matches, n))
    }

    /// Display name for an id, degrading to a placeholder for dangling ids
    pub fn player_name(players: &[Player], id: &PlayerId) -> String {
        players
            .iter()
            .find(|p| p.id == *id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| UNKNOWN_PLAYER.to_string())
    }

    /// Rewrite the advisory counters stored on each player from full match
    /// history, through the same derivation the ranking uses.
    fn refresh_cached_stats(&self, matches: &[Match]) -> crate::error::Result<()> {
        let mut players = self.store.load_players()?;
        let standings = derive_standings(&players, matches);

        for player in &mut players {
            if let Some(row) = standings.iter().find(|s| s.player_id == player.id) {
                player.points = row.points;
                player.games_played = row.games_played;
                player.games_won = row.games_won;
            }
        }

        self.store.save_players(&players)?;
        debug!("Refreshed cached stats for {} players", players.len());
        Ok(())
    }
}
