//! usernamedir - Concurrent in-memory username registration directory.
//!
//! CLI entry point.

use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::error;
use tracing_subscriber::EnvFilter;
use usernamedir::console::ConsoleOutput;
use usernamedir::demo::run_demo;
use usernamedir::{Commands, Config, DemoConfig, SimulateConfig, Simulator, UsernameDirectory};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    // Set up logging
    let filter = if config.verbose {
        EnvFilter::new("usernamedir=debug,info")
    } else {
        EnvFilter::new("usernamedir=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let outcome = match config.command.clone() {
        Commands::Demo(demo_config) => run_demo_command(demo_config, &config),
        Commands::Simulate(sim_config) => run_simulate(sim_config, &config).await,
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => code,
    }
}

fn run_demo_command(demo_config: DemoConfig, global_config: &Config) -> Result<(), ExitCode> {
    let console = ConsoleOutput::new(global_config.verbose, demo_config.json);
    let directory = UsernameDirectory::new();

    match run_demo(&directory) {
        Ok(report) => console.print_demo(&report).map_err(|e| {
            error!("Failed to write output: {}", e);
            ExitCode::FAILURE
        }),
        Err(e) => {
            error!("Demo failed: {}", e);
            Err(ExitCode::FAILURE)
        }
    }
}

async fn run_simulate(sim_config: SimulateConfig, global_config: &Config) -> Result<(), ExitCode> {
    let console = ConsoleOutput::new(global_config.verbose, sim_config.json);
    let workers = sim_config.worker_shares().len() as u64;

    let simulator = match Simulator::new(sim_config, Arc::new(UsernameDirectory::new())) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to set up simulation: {}", e);
            return Err(ExitCode::FAILURE);
        }
    };

    let progress = console.create_progress_bar(workers, "workers done");
    let result = simulator.run(progress.as_ref()).await;
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    match result {
        Ok(report) => console.print_simulation(&report).map_err(|e| {
            error!("Failed to write output: {}", e);
            ExitCode::FAILURE
        }),
        Err(e) => {
            error!("Simulation failed: {}", e);
            Err(ExitCode::FAILURE)
        }
    }
}
