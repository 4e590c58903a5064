//! CSV loader for employee files
//!
//! This module turns a delimited employee file into typed [`Employee`] values,
//! rejecting malformed rows one at a time without aborting the load.
//!
//! [`Employee`]: crate::app::models::Employee
//!
//! ## Architecture
//!
//! The loader is organized into logical components:
//! - [`parser`] - File reading and per-row orchestration
//! - [`column_mapping`] - Header analysis against the configured schema
//! - [`record_parser`] - Individual record decoding
//! - [`field_parsers`] - Helpers for text, integer and date fields
//! - [`decode_error`] - Row rejection values
//! - [`stats`] - Load statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use employee_processor::app::services::employee_csv_parser::EmployeeCsvLoader;
//!
//! let loader = EmployeeCsvLoader::default();
//! let result = loader.load_or_empty(std::path::Path::new("employees.csv"));
//!
//! println!("Loaded {} employees from {} records",
//!          result.stats.employees_loaded,
//!          result.stats.total_records);
//! ```

pub mod column_mapping;
pub mod decode_error;
pub mod field_parsers;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::ColumnMapping;
pub use decode_error::{DecodeCause, RowDecodeError};
pub use parser::EmployeeCsvLoader;
pub use stats::{LoadResult, LoadStats};
