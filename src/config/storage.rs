//! Storage configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for the file-backed store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory holding the persisted JSON collections
    pub data_dir: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
        }
    }
}
