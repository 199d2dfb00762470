//! Authoritative username ownership map.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// Thread-safe mapping of taken usernames to owning user ids.
///
/// Entries are never replaced or removed once inserted.
#[derive(Debug, Default)]
pub struct Registry {
    owners: DashMap<String, String>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            owners: DashMap::new(),
        }
    }

    /// Insert `username -> user_id` unless the username is already taken.
    ///
    /// The check and the insert happen under the same shard lock, so racing
    /// callers on one username see exactly one `true`.
    pub fn insert_if_absent(&self, username: &str, user_id: &str) -> bool {
        match self.owners.entry(username.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(user_id.to_string());
                true
            }
        }
    }

    pub fn contains(&self, username: &str) -> bool {
        self.owners.contains_key(username)
    }

    /// The user id owning `username`, if registered.
    pub fn owner_of(&self, username: &str) -> Option<String> {
        self.owners.get(username).map(|owner| owner.value().clone())
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_if_absent_keeps_first_owner() {
        let registry = Registry::new();
        assert!(registry.insert_if_absent("x", "A"));
        assert!(!registry.insert_if_absent("x", "B"));
        assert_eq!(registry.owner_of("x"), Some("A".to_string()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_missing_owner() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert!(!registry.contains("ghost"));
        assert!(registry.owner_of("ghost").is_none());
    }
}
