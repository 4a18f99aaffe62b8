//! Error types for the tournament tracker
//!
//! This module defines all error types using anyhow for consistent error
//! handling throughout the application.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific tracker scenarios
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("Player not found: {player_id}")]
    PlayerNotFound { player_id: String },

    #[error("Match not found: {match_id}")]
    MatchNotFound { match_id: String },

    #[error("Incorrect deletion code")]
    IncorrectDeletionCode,

    #[error("Invalid player name: {reason}")]
    InvalidPlayerName { reason: String },

    #[error("Invalid match setup: {reason}")]
    InvalidMatchSetup { reason: String },

    #[error("Storage operation failed: {message}")]
    StorageError { message: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
