//! Utility functions for the tournament tracker

use crate::types::{MatchId, PlayerId};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate a new unique player ID
pub fn generate_player_id() -> PlayerId {
    Uuid::new_v4()
}

/// Generate a new unique match ID
pub fn generate_match_id() -> MatchId {
    Uuid::new_v4()
}

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Short date form used in match listings
pub fn format_match_date(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}
