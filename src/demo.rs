//! Built-in walkthrough of the directory operations.

use crate::directory::UsernameDirectory;
use crate::types::{MostAttempted, Result};
use serde::{Deserialize, Serialize};

/// Checks of "admin" issued before the most-attempted report.
pub const ADMIN_CHECKS: u64 = 10543;

/// Results collected by [`run_demo`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoReport {
    /// Availability answers in the order they were asked.
    pub checks: Vec<(String, bool)>,
    /// Username suggestions were requested for.
    pub suggested_for: String,
    pub suggestions: Vec<String>,
    pub most_attempted: MostAttempted,
}

/// Seed two users, probe a few names, and report the most checked one.
pub fn run_demo(directory: &UsernameDirectory) -> Result<DemoReport> {
    directory.register_username("john_doe", "U1001")?;
    directory.register_username("admin", "U0001")?;

    let mut checks = Vec::new();
    for name in ["john_doe", "jane_smith"] {
        checks.push((name.to_string(), directory.check_availability(name)?));
    }

    let suggested_for = "john_doe".to_string();
    let suggestions = directory.suggest_alternatives(&suggested_for)?;

    for _ in 0..ADMIN_CHECKS {
        directory.check_availability("admin")?;
    }

    Ok(DemoReport {
        checks,
        suggested_for,
        suggestions,
        most_attempted: directory.get_most_attempted()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_reports_admin() {
        let directory = UsernameDirectory::new();
        let report = run_demo(&directory).unwrap();

        assert_eq!(
            report.checks,
            vec![
                ("john_doe".to_string(), false),
                ("jane_smith".to_string(), true)
            ]
        );
        assert_eq!(report.suggestions.len(), 6);
        assert_eq!(report.suggestions.last().map(String::as_str), Some("john.doe"));
        assert_eq!(report.most_attempted.to_string(), "admin (10543 attempts)");
    }

    #[test]
    fn test_demo_twice_on_same_directory() {
        let directory = UsernameDirectory::new();
        run_demo(&directory).unwrap();

        // Seeds are already taken; registration reports false rather than failing.
        let report = run_demo(&directory).unwrap();
        assert_eq!(report.most_attempted.attempts, 2 * ADMIN_CHECKS);
    }
}
