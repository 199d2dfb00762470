//! The username directory service.
//!
//! Owns two independent concurrent maps:
//! - a registry of taken usernames and their owners
//! - a counter of availability checks per username
//!
//! Every operation touches one key at a time; there is no lock spanning both
//! maps, so a check racing a registration of the same name may see either
//! outcome.

mod attempts;
mod registry;
pub mod suggest;

pub use attempts::AttemptCounter;
pub use registry::Registry;

use crate::types::{require_non_empty, DirectoryError, DirectoryStats, MostAttempted, Result};
use tracing::{debug, trace, warn};

/// In-memory registration directory shared by concurrent callers.
#[derive(Debug, Default)]
pub struct UsernameDirectory {
    registry: Registry,
    attempts: AttemptCounter,
}

impl UsernameDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            attempts: AttemptCounter::new(),
        }
    }

    /// Claim `username` for `user_id`.
    ///
    /// Returns `Ok(false)` without touching the existing owner when the name
    /// is already taken.
    pub fn register_username(&self, username: &str, user_id: &str) -> Result<bool> {
        require_non_empty("username", username)?;
        require_non_empty("user_id", user_id)?;

        let inserted = self.registry.insert_if_absent(username, user_id);
        if inserted {
            debug!("Registered {} for {}", username, user_id);
        } else {
            warn!("Username already taken: {}", username);
        }
        Ok(inserted)
    }

    /// Record a check of `username` and report whether it is free.
    pub fn check_availability(&self, username: &str) -> Result<bool> {
        require_non_empty("username", username)?;
        Ok(self.record_check(username))
    }

    /// Propose usernames to try when `username` is taken.
    ///
    /// A free username is returned on its own. Otherwise numeric suffixes
    /// 1..=5 are checked, then the dotted form if the name has underscores.
    /// Every candidate check counts as an attempt.
    pub fn suggest_alternatives(&self, username: &str) -> Result<Vec<String>> {
        require_non_empty("username", username)?;

        if self.record_check(username) {
            return Ok(vec![username.to_string()]);
        }

        let suggestions: Vec<String> = suggest::candidates(username)
            .into_iter()
            .filter(|candidate| self.record_check(candidate))
            .collect();

        debug!(
            "{} suggestions for taken username {}",
            suggestions.len(),
            username
        );
        Ok(suggestions)
    }

    /// The most checked username and its count.
    ///
    /// Ties go to the lexicographically smallest username. Fails with
    /// [`DirectoryError::EmptyCounter`] before the first check.
    pub fn get_most_attempted(&self) -> Result<MostAttempted> {
        self.attempts.max().ok_or(DirectoryError::EmptyCounter)
    }

    /// The `n` most checked usernames, highest first.
    pub fn top_attempted(&self, n: usize) -> Vec<MostAttempted> {
        self.attempts.top(n)
    }

    /// Owner of `username` without recording an attempt.
    pub fn owner_of(&self, username: &str) -> Option<String> {
        self.registry.owner_of(username)
    }

    /// Whether `username` is taken, without recording an attempt.
    pub fn is_registered(&self, username: &str) -> bool {
        self.registry.contains(username)
    }

    /// Number of checks recorded for `username`.
    pub fn attempts(&self, username: &str) -> u64 {
        self.attempts.get(username)
    }

    pub fn stats(&self) -> DirectoryStats {
        DirectoryStats {
            registered: self.registry.len(),
            tracked: self.attempts.len(),
            total_attempts: self.attempts.total(),
        }
    }

    fn record_check(&self, username: &str) -> bool {
        let count = self.attempts.increment(username);
        let available = !self.registry.contains(username);
        trace!("Checked {} (attempt {}): available={}", username, count, available);
        available
    }
}
