//! Colored console output for directory reports.

use crate::demo::DemoReport;
use crate::simulate::SimulationReport;
use crate::types::{DirectoryStats, MostAttempted, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::io::{self, Write};

/// Console output handler with colors and formatting.
pub struct ConsoleOutput {
    verbose: bool,
    json_mode: bool,
}

impl ConsoleOutput {
    /// Create a new console output handler.
    pub fn new(verbose: bool, json_mode: bool) -> Self {
        Self { verbose, json_mode }
    }

    /// Print an availability answer.
    pub fn print_availability(&self, username: &str, available: bool) {
        if self.json_mode {
            return;
        }

        println!(
            "{} {} -> {}",
            "[*]".bright_blue(),
            username.bright_white(),
            format_availability(available)
        );
    }

    /// Print suggestions for a username.
    pub fn print_suggestions(&self, username: &str, suggestions: &[String]) {
        if self.json_mode {
            return;
        }

        println!(
            "{} Suggestions for {}:",
            "[*]".bright_blue(),
            username.bright_white()
        );
        if suggestions.is_empty() {
            println!("    +-- {}", "none available".yellow());
            return;
        }
        for (i, suggestion) in suggestions.iter().enumerate() {
            let branch = if i + 1 == suggestions.len() { "+--" } else { "|--" };
            println!("    {} {}", branch, suggestion.green());
        }
    }

    /// Print the most-attempted report.
    pub fn print_most_attempted(&self, report: &MostAttempted) {
        if self.json_mode {
            return;
        }

        println!(
            "{} Most attempted: {}",
            "[*]".bright_blue(),
            report.to_string().bold()
        );
    }

    /// Print a ranked list of attempt counts.
    pub fn print_top(&self, top: &[MostAttempted]) {
        if self.json_mode || top.is_empty() {
            return;
        }

        println!();
        println!("{}", "=== Most Attempted ===".bright_cyan());
        for (rank, entry) in top.iter().enumerate() {
            println!(
                "  {:>2}. {:<24} {}",
                rank + 1,
                entry.username,
                entry.attempts.to_string().bright_white()
            );
        }
    }

    /// Print directory stats.
    pub fn print_stats(&self, stats: &DirectoryStats) {
        if self.json_mode {
            return;
        }

        println!();
        println!("{}", "=== Directory Summary ===".bright_cyan());
        println!("  Registered: {}", stats.registered);
        println!("  Tracked:    {}", stats.tracked);
        println!("  Attempts:   {}", stats.total_attempts);
    }

    /// Print the full demo walkthrough.
    pub fn print_demo(&self, report: &DemoReport) -> Result<()> {
        if self.json_mode {
            return write_json(&mut io::stdout().lock(), report);
        }

        for (username, available) in &report.checks {
            self.print_availability(username, *available);
        }
        self.print_suggestions(&report.suggested_for, &report.suggestions);
        self.print_most_attempted(&report.most_attempted);
        Ok(())
    }

    /// Print a simulation summary.
    pub fn print_simulation(&self, report: &SimulationReport) -> Result<()> {
        if self.json_mode {
            return write_json(&mut io::stdout().lock(), report);
        }

        println!();
        println!("{}", "=== Simulation Summary ===".bright_cyan());
        println!("  Username:  {}", report.username);
        println!("  Status:    {}", format_availability(report.available));
        println!("  Checks:    {}", report.checks);
        println!("  Workers:   {}", report.workers);
        println!("  Duration:  {:.2}s", report.duration_secs);
        if self.verbose && report.duration_secs > 0.0 {
            println!(
                "  Rate:      {:.0} checks/s",
                report.checks as f64 / report.duration_secs
            );
        }

        self.print_top(&report.top);
        self.print_stats(&report.stats);
        println!();
        Ok(())
    }

    /// Create a progress bar.
    pub fn create_progress_bar(&self, total: u64, message: &str) -> Option<ProgressBar> {
        if self.json_mode {
            return None;
        }

        let pb = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb.set_message(message.to_string());
        Some(pb)
    }
}

/// Write `value` as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    writeln!(writer, "{}", json)?;
    Ok(())
}

/// Format availability with color.
fn format_availability(available: bool) -> colored::ColoredString {
    if available {
        "available".green()
    } else {
        "taken".red().bold()
    }
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self::new(false, false)
    }
}
