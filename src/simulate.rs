//! Concurrent load driver for the directory.

use crate::config::SimulateConfig;
use crate::directory::UsernameDirectory;
use crate::types::{DirectoryError, DirectoryStats, MostAttempted, Result};
use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Outcome of a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Username that was checked.
    pub username: String,
    /// Whether the username was free when the run finished.
    pub available: bool,
    /// Checks performed by the workers.
    pub checks: u64,
    /// Workers that actually ran.
    pub workers: usize,
    /// Wall-clock duration in seconds.
    pub duration_secs: f64,
    /// Most checked usernames after the run.
    pub top: Vec<MostAttempted>,
    /// Directory summary after the run.
    pub stats: DirectoryStats,
}

/// Runs a configured burst of checks against a shared directory.
pub struct Simulator {
    config: SimulateConfig,
    directory: Arc<UsernameDirectory>,
}

impl Simulator {
    /// Create a simulator over `directory`, seeding the configured registrations.
    pub fn new(config: SimulateConfig, directory: Arc<UsernameDirectory>) -> Result<Self> {
        for (name, id) in config.seed_registrations()? {
            directory.register_username(&name, &id)?;
        }

        Ok(Self { config, directory })
    }

    pub fn directory(&self) -> &Arc<UsernameDirectory> {
        &self.directory
    }

    /// Spread the configured checks over concurrent workers.
    ///
    /// Checks are synchronous, so each worker runs on the blocking pool.
    pub async fn run(&self, progress: Option<&ProgressBar>) -> Result<SimulationReport> {
        let start_time = Instant::now();
        let shares = self.config.worker_shares();
        let workers = shares.len();

        info!(
            "Running {} checks of {} across {} workers",
            self.config.checks, self.config.username, workers
        );

        let results: Vec<Result<u64>> = stream::iter(shares)
            .map(|share| {
                let directory = Arc::clone(&self.directory);
                let username = self.config.username.clone();
                async move {
                    let worker = tokio::task::spawn_blocking(move || -> Result<u64> {
                        for _ in 0..share {
                            directory.check_availability(&username)?;
                        }
                        Ok(share)
                    });

                    match worker.await {
                        Ok(result) => result,
                        Err(e) => Err(DirectoryError::WorkerError(e.to_string())),
                    }
                }
            })
            .buffer_unordered(workers.max(1))
            .inspect(|_| {
                if let Some(pb) = progress {
                    pb.inc(1);
                }
            })
            .collect()
            .await;

        let mut checks = 0;
        for result in results {
            checks += result?;
        }
        debug!("Workers finished {} checks", checks);

        Ok(SimulationReport {
            username: self.config.username.clone(),
            available: !self.directory.is_registered(&self.config.username),
            checks,
            workers,
            duration_secs: start_time.elapsed().as_secs_f64(),
            top: self.directory.top_attempted(self.config.top),
            stats: self.directory.stats(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_simulation_counts_every_check() {
        let config = SimulateConfig {
            username: "admin".to_string(),
            checks: 10543,
            threads: 4,
            registrations: vec!["admin:U0001".to_string()],
            top: 3,
            json: false,
        };
        let simulator = Simulator::new(config, Arc::new(UsernameDirectory::new())).unwrap();

        let report = simulator.run(None).await.unwrap();
        assert_eq!(report.checks, 10543);
        assert_eq!(report.workers, 4);
        assert!(!report.available);
        assert_eq!(report.top[0].username, "admin");
        assert_eq!(report.top[0].attempts, 10543);
        assert_eq!(report.stats.registered, 1);
        assert_eq!(simulator.directory().attempts("admin"), 10543);
    }

    #[tokio::test]
    async fn test_simulation_rejects_bad_seed() {
        let config = SimulateConfig {
            registrations: vec!["broken".to_string()],
            ..Default::default()
        };
        let result = Simulator::new(config, Arc::new(UsernameDirectory::new()));
        assert!(matches!(result, Err(DirectoryError::ConfigError(_))));
    }

    #[tokio::test]
    async fn test_simulation_with_no_checks() {
        let config = SimulateConfig {
            username: "ghost".to_string(),
            checks: 0,
            ..Default::default()
        };
        let simulator = Simulator::new(config, Arc::new(UsernameDirectory::new())).unwrap();

        let report = simulator.run(None).await.unwrap();
        assert_eq!(report.checks, 0);
        assert_eq!(report.workers, 0);
        assert!(report.available);
        assert!(report.top.is_empty());
    }
}
