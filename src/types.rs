//! Core types and errors for the username directory.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur while operating the directory.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No availability checks have been recorded yet")]
    EmptyCounter,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Worker failed: {0}")]
    WorkerError(String),
}

pub type Result<T> = std::result::Result<T, DirectoryError>;

/// A username together with the number of availability checks it received.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MostAttempted {
    /// The probed username.
    pub username: String,
    /// How many times it was checked.
    pub attempts: u64,
}

impl fmt::Display for MostAttempted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} attempts)", self.username, self.attempts)
    }
}

/// Point-in-time summary of the directory.
///
/// Counters are read one key at a time, so a snapshot taken while checks are
/// in flight may mix values from before and after those checks.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectoryStats {
    /// Number of registered usernames.
    pub registered: usize,
    /// Number of distinct usernames that were ever checked.
    pub tracked: usize,
    /// Sum of all recorded availability checks.
    pub total_attempts: u64,
}

/// Reject empty identifiers before they reach the maps.
pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(DirectoryError::InvalidArgument(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_attempted_display() {
        let report = MostAttempted {
            username: "admin".to_string(),
            attempts: 10543,
        };
        assert_eq!(report.to_string(), "admin (10543 attempts)");
    }

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("username", "bob").is_ok());

        match require_non_empty("user_id", "") {
            Err(DirectoryError::InvalidArgument(msg)) => assert!(msg.contains("user_id")),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_counter_message() {
        let msg = DirectoryError::EmptyCounter.to_string();
        assert!(msg.contains("No availability checks"));
    }
}
