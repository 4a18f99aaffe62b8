//! Pure standings derivation from match history
//!
//! The counters stored on `Player` are advisory; this module computes the
//! authoritative values from the match list every time it is called.

use crate::types::{Match, Player, Standing, DRAW_POINTS, WIN_POINTS};

/// Tally one player over the matches the player appears in
fn tally(player: &Player, matches: &[Match]) -> Standing {
    let mut games_played = 0;
    let mut games_won = 0;
    let mut points = 0;

    for m in matches {
        let Some(side) = m.side_of(&player.id) else {
            continue;
        };

        games_played += 1;
        match m.outcome().winning_side() {
            None => points += DRAW_POINTS,
            Some(winner) if winner == side => {
                games_won += 1;
                points += WIN_POINTS;
            }
            Some(_) => {}
        }
    }

    Standing {
        player_id: player.id,
        name: player.name.clone(),
        games_played,
        games_won,
        points,
    }
}

/// Derive the full ranking table from the player and match lists.
///
/// Ordered by points descending, then games won descending. `sort_by` is
/// stable, so fully tied players keep their registration order.
pub fn derive_standings(players: &[Player], matches: &[Match]) -> Vec<Standing> {
    let mut standings: Vec<Standing> = players.iter().map(|p| tally(p, matches)).collect();

    standings.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.games_won.cmp(&a.games_won))
    });

    standings
}
