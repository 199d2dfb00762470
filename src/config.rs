//! Command-line configuration for the directory driver.

use crate::types::{DirectoryError, Result};
use clap::{Parser, Subcommand};

/// Drive an in-memory username directory from the command line.
#[derive(Parser, Debug, Clone)]
#[command(name = "usernamedir")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the built-in registration, suggestion and analytics walkthrough
    Demo(DemoConfig),
    /// Hammer one username with concurrent availability checks
    Simulate(SimulateConfig),
}

/// Configuration for the demo command.
#[derive(Parser, Debug, Clone, Default)]
pub struct DemoConfig {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Configuration for the simulate command.
#[derive(Parser, Debug, Clone)]
pub struct SimulateConfig {
    /// Username to check repeatedly
    #[arg(short, long, default_value = "admin")]
    pub username: String,

    /// Total number of availability checks
    #[arg(short, long, default_value = "10543")]
    pub checks: u64,

    /// Number of concurrent workers
    #[arg(short, long, env = "USERNAMEDIR_THREADS", default_value = "4")]
    pub threads: usize,

    /// Registrations to seed before the run, as name:user_id
    #[arg(short, long = "register")]
    pub registrations: Vec<String>,

    /// Number of entries in the most-attempted report
    #[arg(long, default_value = "5")]
    pub top: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl Default for SimulateConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            checks: 10543,
            threads: 4,
            registrations: Vec::new(),
            top: 5,
            json: false,
        }
    }
}

impl SimulateConfig {
    /// Parse the seed registrations.
    pub fn seed_registrations(&self) -> Result<Vec<(String, String)>> {
        self.registrations
            .iter()
            .map(|spec| parse_registration(spec))
            .collect()
    }

    /// Split `checks` across workers; earlier workers take the remainder.
    ///
    /// Never plans more workers than there are checks.
    pub fn worker_shares(&self) -> Vec<u64> {
        let workers = (self.threads.max(1) as u64).min(self.checks.max(1));
        let base = self.checks / workers;
        let extra = self.checks % workers;

        (0..workers)
            .map(|i| if i < extra { base + 1 } else { base })
            .filter(|&share| share > 0)
            .collect()
    }
}

/// Parse a `name:user_id` registration spec.
pub fn parse_registration(spec: &str) -> Result<(String, String)> {
    let (name, id) = spec.split_once(':').ok_or_else(|| {
        DirectoryError::ConfigError(format!("expected name:user_id, got '{}'", spec))
    })?;

    let name = name.trim();
    let id = id.trim();
    if name.is_empty() || id.is_empty() {
        return Err(DirectoryError::ConfigError(format!(
            "registration '{}' has an empty name or user id",
            spec
        )));
    }

    Ok((name.to_string(), id.to_string()))
}
