//! Ranking and statistics derivation
//!
//! All standings shown anywhere in the tracker come from one pure
//! derivation over the full player and match lists; the counters cached on
//! players are refreshed through the same function.

pub mod derive;
pub mod summary;

// Re-export commonly used items
pub use derive::derive_standings;
pub use summary::{summarize, Summary, DEFAULT_SUMMARY_SIZE};
