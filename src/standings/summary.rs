//! Dashboard summary: top players and recent matches

use super::derive_standings;
use crate::types::{Match, Player, Standing};
use serde::{Deserialize, Serialize};

/// Default number of entries shown on the dashboard
pub const DEFAULT_SUMMARY_SIZE: usize = 3;

/// Derived dashboard view over the full collections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    /// Highest ranked players, at most `n` entries
    pub top_players: Vec<Standing>,
    /// Most recent matches, newest first, at most `n` entries
    pub recent_matches: Vec<Match>,
}

/// Build the dashboard view: the top `n` standings plus the `n` most
/// recently played matches.
pub fn summarize(players: &[Player], matches: &[Match], n: usize) -> Summary {
    let mut top_players = derive_standings(players, matches);
    top_players.truncate(n);

    let mut recent_matches = matches.to_vec();
    recent_matches.sort_by(|a, b| b.date.cmp(&a.date));
    recent_matches.truncate(n);

    Summary {
        top_players,
        recent_matches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Team;
    use crate::utils;
    use chrono::{Duration, Utc};

    fn players(count: usize) -> Vec<Player> {
        (0..count)
            .map(|i| Player::new(format!("player_{i}")))
            .collect()
    }

    fn match_at_offset(players: &[Player], minutes_ago: i64, score1: u32, score2: u32) -> Match {
        Match {
            id: utils::generate_match_id(),
            date: Utc::now() - Duration::minutes(minutes_ago),
            team1: Team {
                players: [players[0].id, players[1].id],
                score: score1,
            },
            team2: Team {
                players: [players[2].id, players[3].id],
                score: score2,
            },
            completed: true,
        }
    }

    #[test]
    fn test_summary_truncates_to_requested_size() {
        let players = players(6);
        let matches = vec![
            match_at_offset(&players, 30, 10, 5),
            match_at_offset(&players, 20, 3, 3),
            match_at_offset(&players, 10, 2, 8),
            match_at_offset(&players, 5, 1, 0),
        ];

        let summary = summarize(&players, &matches, 3);
        assert_eq!(summary.top_players.len(), 3);
        assert_eq!(summary.recent_matches.len(), 3);
    }

    #[test]
    fn test_recent_matches_are_newest_first() {
        let players = players(4);
        let oldest = match_at_offset(&players, 60, 10, 5);
        let middle = match_at_offset(&players, 30, 3, 3);
        let newest = match_at_offset(&players, 1, 2, 8);
        let matches = vec![oldest.clone(), newest.clone(), middle.clone()];

        let summary = summarize(&players, &matches, 2);
        assert_eq!(summary.recent_matches[0].id, newest.id);
        assert_eq!(summary.recent_matches[1].id, middle.id);
    }

    #[test]
    fn test_summary_of_empty_collections() {
        let summary = summarize(&[], &[], DEFAULT_SUMMARY_SIZE);
        assert!(summary.top_players.is_empty());
        assert!(summary.recent_matches.is_empty());
    }

    #[test]
    fn test_top_players_lead_the_ranking() {
        let players = players(4);
        let matches = vec![match_at_offset(&players, 10, 10, 5)];

        let summary = summarize(&players, &matches, 2);
        assert_eq!(summary.top_players.len(), 2);
        assert!(summary.top_players.iter().all(|s| s.points == 3));
    }
}
