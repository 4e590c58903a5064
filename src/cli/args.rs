//! Command-line argument definitions for the employee processor
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::ProcessorConfig;
use crate::constants::{DEFAULT_INPUT_PATH, DEFAULT_SALARY_THRESHOLD};
use crate::{Error, Result};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the employee processor
///
/// Loads employee records from a CSV file, skips rows that fail validation,
/// and prints a full listing, average salary per department and a listing of
/// employees above a salary threshold.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "employee_processor",
    version,
    about = "Load employees from CSV and print salary reports",
    long_about = "Reads an employee CSV file (EmployeeID, FirstName, LastName, Email, PhoneNumber, \
                  DateOfBirth, Salary, Department, DateOfJoining), rejects malformed rows with a \
                  logged warning, and prints a full listing, the average salary per department, \
                  and the employees earning more than a threshold."
)]
pub struct Args {
    /// Employee CSV file to load
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT_PATH)]
    pub input_path: PathBuf,

    /// Salary threshold for the filtered listing (strictly greater than)
    #[arg(
        short = 't',
        long = "salary-threshold",
        value_name = "AMOUNT",
        default_value_t = DEFAULT_SALARY_THRESHOLD
    )]
    pub salary_threshold: i64,

    /// Field delimiter of the input file
    #[arg(short = 'd', long = "delimiter", value_name = "CHAR", default_value_t = ',')]
    pub delimiter: char,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored summary output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl Args {
    /// Get the log level implied by --verbose/--quiet
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build processor configuration from defaults and these arguments
    pub fn to_config(&self) -> Result<ProcessorConfig> {
        if !self.delimiter.is_ascii() {
            return Err(Error::configuration(format!(
                "Delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            )));
        }

        let config = ProcessorConfig::default()
            .with_input_path(self.input_path.clone())
            .with_salary_threshold(self.salary_threshold)
            .with_delimiter(self.delimiter as u8);

        config.validate()?;
        Ok(config)
    }
}
