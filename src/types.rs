//! Common types used throughout the tournament tracker

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for players
pub type PlayerId = Uuid;

/// Unique identifier for matches
pub type MatchId = Uuid;

/// Points awarded to each member of the winning team
pub const WIN_POINTS: u32 = 3;

/// Points awarded to every participant of a drawn match
pub const DRAW_POINTS: u32 = 1;

/// Number of players on one team
pub const TEAM_SIZE: usize = 2;

/// Number of players selected for one match
pub const MATCH_PLAYERS: usize = 4;

/// A registered player.
///
/// The three counters are cached values refreshed after each recorded
/// match; authoritative numbers are always recomputed from match history
/// by the standings deriver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub points: u32,
    pub games_played: u32,
    pub games_won: u32,
}

impl Player {
    /// Create a new player with a fresh id and zeroed counters
    pub fn new(name: String) -> Self {
        Self {
            id: crate::utils::generate_player_id(),
            name,
            points: 0,
            games_played: 0,
            games_won: 0,
        }
    }
}

/// One side of a match: exactly two players and their shared score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub players: [PlayerId; TEAM_SIZE],
    pub score: u32,
}

impl Team {
    pub fn contains(&self, player_id: &PlayerId) -> bool {
        self.players.contains(player_id)
    }
}

/// Which side of a match a player was on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamSide {
    Team1,
    Team2,
}

impl std::fmt::Display for TeamSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamSide::Team1 => write!(f, "team 1"),
            TeamSide::Team2 => write!(f, "team 2"),
        }
    }
}

/// Result of comparing the two team scores of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Team1Win,
    Team2Win,
    Draw,
}

impl MatchOutcome {
    /// The winning side, if the match was not drawn
    pub fn winning_side(&self) -> Option<TeamSide> {
        match self {
            MatchOutcome::Team1Win => Some(TeamSide::Team1),
            MatchOutcome::Team2Win => Some(TeamSide::Team2),
            MatchOutcome::Draw => None,
        }
    }
}

/// A single recorded 2v2 contest with two team scores.
///
/// Referenced player ids are not validated for uniqueness or existence;
/// dangling ids degrade to a placeholder name at display time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub date: DateTime<Utc>,
    pub team1: Team,
    pub team2: Team,
    pub completed: bool,
}

impl Match {
    /// Side the player played on. Team 1 membership is checked first, so a
    /// player listed on both teams counts as team 1.
    pub fn side_of(&self, player_id: &PlayerId) -> Option<TeamSide> {
        if self.team1.contains(player_id) {
            Some(TeamSide::Team1)
        } else if self.team2.contains(player_id) {
            Some(TeamSide::Team2)
        } else {
            None
        }
    }

    /// Whether the player appears on either team
    pub fn involves(&self, player_id: &PlayerId) -> bool {
        self.team1.contains(player_id) || self.team2.contains(player_id)
    }

    /// Recompute the outcome from the two team scores (draw on equality)
    pub fn outcome(&self) -> MatchOutcome {
        match self.team1.score.cmp(&self.team2.score) {
            std::cmp::Ordering::Greater => MatchOutcome::Team1Win,
            std::cmp::Ordering::Less => MatchOutcome::Team2Win,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        }
    }
}

/// A derived ranking row for one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player_id: PlayerId,
    pub name: String,
    pub games_played: u32,
    pub games_won: u32,
    pub points: u32,
}
