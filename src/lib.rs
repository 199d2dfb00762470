//! usernamedir - Concurrent in-memory username registration directory.
//!
//! This library tracks which usernames are taken and:
//! - Registers usernames atomically (first caller wins)
//! - Answers availability checks while counting every probe
//! - Suggests numeric-suffix and dotted alternatives for taken names
//! - Reports the most frequently checked usernames
//!
//! # Example
//!
//! ```
//! use usernamedir::UsernameDirectory;
//!
//! let directory = UsernameDirectory::new();
//! assert!(directory.register_username("bob", "U1").unwrap());
//! assert!(!directory.check_availability("bob").unwrap());
//!
//! let suggestions = directory.suggest_alternatives("bob").unwrap();
//! assert_eq!(suggestions[0], "bob1");
//! println!("{}", directory.get_most_attempted().unwrap());
//! ```

pub mod config;
pub mod console;
pub mod demo;
pub mod directory;
pub mod simulate;
pub mod types;

pub use config::{Commands, Config, DemoConfig, SimulateConfig};
pub use directory::UsernameDirectory;
pub use simulate::{SimulationReport, Simulator};
pub use types::{DirectoryError, DirectoryStats, MostAttempted, Result};
