//! Configuration management for the tracker
//!
//! This module handles configuration loading from defaults, environment
//! variables and an optional TOML file, plus validation.

pub mod app;
pub mod gate;
pub mod storage;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, ServiceSettings};
pub use gate::GateSettings;
pub use storage::StorageSettings;
