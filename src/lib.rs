//! Mus Tracker - local tournament tracking for 2v2 card game matches
//!
//! This crate records players and 2v2 match outcomes in a file-backed
//! key-value store and derives rankings and statistics from match history.

pub mod config;
pub mod error;
pub mod standings;
pub mod store;
pub mod tracker;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Result, TrackerError};
pub use types::*;

// Re-export key components
pub use standings::derive_standings;
pub use store::{JsonFileStore, MemoryStore, TrackerStore};
pub use tracker::{DeletionGate, TrackerManager};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
