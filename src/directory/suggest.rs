//! Fallback candidate generation for taken usernames.

/// Highest numeric suffix tried by the suffix strategy.
pub const MAX_NUMERIC_SUFFIX: u32 = 5;

/// Candidates formed by appending 1..=5 to the username, in order.
pub fn numeric_suffixes(username: &str) -> Vec<String> {
    (1..=MAX_NUMERIC_SUFFIX)
        .map(|i| format!("{}{}", username, i))
        .collect()
}

/// The username with every `_` replaced by `.`, if it has any underscore.
pub fn dotted_variant(username: &str) -> Option<String> {
    if username.contains('_') {
        Some(username.replace('_', "."))
    } else {
        None
    }
}

/// All fallback candidates in the order they are checked.
pub fn candidates(username: &str) -> Vec<String> {
    let mut candidates = numeric_suffixes(username);
    candidates.extend(dotted_variant(username));
    candidates
}
