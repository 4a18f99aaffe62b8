//! Tracker operations: recording, deletion gating and reads

pub mod gate;
pub mod manager;

// Re-export commonly used types
pub use gate::DeletionGate;
pub use manager::{TrackerManager, UNKNOWN_PLAYER};
