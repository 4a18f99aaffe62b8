//! Deletion gate
//!
//! Deletions are confirmed by comparing a user-entered code against the
//! configured shared code. This is a confirmation step, not access control.

use crate::error::TrackerError;

/// Gate checked before any destructive operation
#[derive(Debug, Clone)]
pub struct DeletionGate {
    code: String,
}

impl DeletionGate {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// Check an entered code, failing with `IncorrectDeletionCode` on
    /// mismatch
    pub fn authorize(&self, entered: &str) -> crate::error::Result<()> {
        if entered != self.code {
            return Err(TrackerError::IncorrectDeletionCode.into());
        }
        Ok(())
    }
}
