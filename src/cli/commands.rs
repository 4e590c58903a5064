//! Command implementation for the employee processor CLI
//!
//! This module wires the loader to the report generators: set up logging,
//! resolve configuration, load the file, print the report on stdout and a
//! short load summary on stderr.

use crate::app::services::employee_csv_parser::{EmployeeCsvLoader, LoadStats};
use crate::app::services::report_generator::render_report;
use crate::cli::args::Args;
use crate::config::ProcessorConfig;
use crate::constants::LOW_SUCCESS_RATE_PERCENT;
use crate::{Error, Result};
use colored::*;
use std::io::Write;
use tracing::{debug, info};

/// Main command runner for the employee processor
///
/// 1. Set up logging and configuration
/// 2. Load employees, degrading to an empty set if the file is unusable
/// 3. Print the report sections (or the "no data" line)
/// 4. Print the load summary
pub fn run(args: &Args) -> Result<LoadStats> {
    if args.no_color {
        colored::control::set_override(false);
    }

    setup_logging(args)?;
    debug!("Command line arguments: {:?}", args);

    let config = args.to_config()?;
    info!("Processing {}", config.input_path.display());

    let loader = EmployeeCsvLoader::from_config(&config);
    let result = loader.load_or_empty(&config.input_path);

    let report = render_report(&result.employees, config.salary_threshold);
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(report.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|e| Error::io("Failed to write report", e))?;

    if !args.quiet {
        print_load_summary(&config, &result.stats);
    }

    Ok(result.stats)
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("employee_processor={}", log_level)));

    let installed = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_ansi(!args.no_color)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_ansi(!args.no_color)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    installed
        .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Print a one-block load summary to stderr
fn print_load_summary(config: &ProcessorConfig, stats: &LoadStats) {
    eprintln!("\n{}", "Load Summary".bright_green().bold());
    eprintln!("  Source:   {}", config.input_path.display());
    eprintln!(
        "  Records:  {}",
        stats.total_records.to_string().bright_white().bold()
    );
    eprintln!(
        "  Loaded:   {}",
        stats.employees_loaded.to_string().bright_white().bold()
    );

    if stats.is_clean() {
        eprintln!("  Skipped:  {}", stats.records_skipped);
    } else {
        eprintln!(
            "  Skipped:  {}",
            stats.records_skipped.to_string().bright_red().bold()
        );
    }

    let rate = format!("{:.1}%", stats.success_rate());
    if stats.total_records > 0 && stats.success_rate() < LOW_SUCCESS_RATE_PERCENT {
        eprintln!("  Success:  {}", rate.yellow());
    } else {
        eprintln!("  Success:  {}", rate);
    }
}
