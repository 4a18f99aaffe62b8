//! Deletion gate configuration

use serde::{Deserialize, Serialize};

/// Settings for the shared deletion code
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GateSettings {
    /// Code required to confirm deletions
    pub deletion_code: String,
}

impl Default for GateSettings {
    fn default() -> Self {
        Self {
            deletion_code: "1234".to_string(),
        }
    }
}
