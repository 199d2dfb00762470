//! Per-username availability check counters.

use crate::types::MostAttempted;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe counter of availability checks per username.
#[derive(Debug, Default)]
pub struct AttemptCounter {
    counts: DashMap<String, AtomicU64>,
}

impl AttemptCounter {
    /// Create an empty counter.
    pub fn new() -> Self {
        Self {
            counts: DashMap::new(),
        }
    }

    /// Record one check for `username` and return the new count.
    pub fn increment(&self, username: &str) -> u64 {
        // Existing keys only take a shard read lock.
        if let Some(count) = self.counts.get(username) {
            return count.fetch_add(1, Ordering::Relaxed) + 1;
        }

        self.counts
            .entry(username.to_string())
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed)
            + 1
    }

    /// Current count for `username`, 0 if it was never checked.
    pub fn get(&self, username: &str) -> u64 {
        self.counts
            .get(username)
            .map(|count| count.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Number of distinct usernames checked so far.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts
            .iter()
            .map(|entry| entry.value().load(Ordering::Relaxed))
            .sum()
    }

    /// The `n` most checked usernames, highest count first.
    ///
    /// Equal counts are ordered by username so the result does not depend on
    /// shard iteration order. The scan is not linearizable with concurrent
    /// increments.
    pub fn top(&self, n: usize) -> Vec<MostAttempted> {
        let mut all: Vec<MostAttempted> = self
            .counts
            .iter()
            .map(|entry| MostAttempted {
                username: entry.key().clone(),
                attempts: entry.value().load(Ordering::Relaxed),
            })
            .collect();

        all.sort_by(|a, b| {
            b.attempts
                .cmp(&a.attempts)
                .then_with(|| a.username.cmp(&b.username))
        });
        all.truncate(n);
        all
    }

    /// The single most checked username, if any check was recorded.
    pub fn max(&self) -> Option<MostAttempted> {
        let mut best: Option<MostAttempted> = None;

        for entry in self.counts.iter() {
            let attempts = entry.value().load(Ordering::Relaxed);
            let better = match &best {
                None => true,
                Some(current) => {
                    attempts > current.attempts
                        || (attempts == current.attempts && *entry.key() < current.username)
                }
            };
            if better {
                best = Some(MostAttempted {
                    username: entry.key().clone(),
                    attempts,
                });
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_creates_at_one() {
        let counter = AttemptCounter::new();
        assert_eq!(counter.get("bob"), 0);
        assert_eq!(counter.increment("bob"), 1);
        assert_eq!(counter.increment("bob"), 2);
        assert_eq!(counter.get("bob"), 2);
        assert_eq!(counter.len(), 1);
    }

    #[test]
    fn test_max_breaks_ties_by_name() {
        let counter = AttemptCounter::new();
        counter.increment("zed");
        counter.increment("amy");
        counter.increment("mia");

        let best = counter.max().unwrap();
        assert_eq!(best.username, "amy");
        assert_eq!(best.attempts, 1);
    }

    #[test]
    fn test_max_empty() {
        let counter = AttemptCounter::new();
        assert!(counter.is_empty());
        assert!(counter.max().is_none());
    }

    #[test]
    fn test_top_ordering() {
        let counter = AttemptCounter::new();
        for _ in 0..3 {
            counter.increment("carol");
        }
        for _ in 0..3 {
            counter.increment("bob");
        }
        counter.increment("alice");

        let top = counter.top(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].username, "bob");
        assert_eq!(top[1].username, "carol");
        assert_eq!(counter.total(), 7);
    }

    #[test]
    fn test_concurrent_increments_are_not_lost() {
        let counter = AttemptCounter::new();

        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for _ in 0..1000 {
                        counter.increment("admin");
                    }
                });
            }
        });

        assert_eq!(counter.get("admin"), 8000);
    }
}
