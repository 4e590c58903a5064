//! Batch loader for employee CSV files
//!
//! This module reads a whole employee file, decodes every row and keeps the
//! ones that convert cleanly. Rejected rows are logged and counted; only a
//! source that cannot be read at all fails the load.

use std::path::Path;
use tracing::{debug, error, info, warn};

use super::column_mapping::ColumnMapping;
use super::record_parser::decode_employee_record;
use super::stats::{LoadResult, LoadStats};
use crate::config::{ColumnSchema, ProcessorConfig};
use crate::constants::DEFAULT_DELIMITER;
use crate::{Error, Result};

/// Loader for employee CSV files
///
/// Holds the immutable column schema and delimiter; a single loader can be
/// reused for any number of files.
#[derive(Debug, Clone)]
pub struct EmployeeCsvLoader {
    schema: ColumnSchema,
    delimiter: u8,
}

impl Default for EmployeeCsvLoader {
    fn default() -> Self {
        Self::new(ColumnSchema::default())
    }
}

impl EmployeeCsvLoader {
    /// Create a new loader for the given column schema
    pub fn new(schema: ColumnSchema) -> Self {
        Self {
            schema,
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Create a loader from processor configuration
    pub fn from_config(config: &ProcessorConfig) -> Self {
        Self::new(config.schema.clone()).with_delimiter(config.delimiter)
    }

    /// Use a different field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Load a file, falling back to an empty result if the source is unusable
    ///
    /// Source-level failures are logged at error level once; the caller then
    /// sees zero employees rather than an error.
    pub fn load_or_empty(&self, file_path: &Path) -> LoadResult {
        match self.load_file(file_path) {
            Ok(result) => result,
            Err(e) => {
                error!("Error reading CSV file: {}", e);
                LoadResult::empty()
            }
        }
    }

    /// Load an employee file and return employees with statistics
    pub fn load_file(&self, file_path: &Path) -> Result<LoadResult> {
        info!("Loading employee file: {}", file_path.display());

        // The file handle is closed before decoding starts
        let content = std::fs::read_to_string(file_path).map_err(|e| {
            Error::source_io(
                file_path.display().to_string(),
                format!("Failed to read file: {}", e),
                e,
            )
        })?;

        self.load_str(&content).map_err(|e| match e {
            Error::SourceUnavailable {
                message, source, ..
            } => Error::SourceUnavailable {
                path: file_path.display().to_string(),
                message,
                source,
            },
            other => other,
        })
    }

    /// Load employees from in-memory CSV content
    pub fn load_str(&self, content: &str) -> Result<LoadResult> {
        let mut stats = LoadStats::new();
        let mut employees = Vec::new();

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.delimiter)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers = csv_reader
            .headers()
            .map_err(|e| {
                Error::source_csv("<memory>", format!("Failed to read CSV headers: {}", e), e)
            })?
            .clone();

        if headers.is_empty() {
            warn!("No header row found; nothing to load");
            return Ok(LoadResult { employees, stats });
        }

        let column_mapping = ColumnMapping::analyze(&headers, &self.schema);
        debug!(
            "Column mapping: {} header columns, {} required columns missing",
            column_mapping.name_to_index.len(),
            column_mapping.missing_columns.len()
        );
        if !column_mapping.is_complete() {
            warn!(
                "Header is missing required columns {:?}; every record will be rejected",
                column_mapping.missing_columns
            );
        }

        for result in csv_reader.records() {
            let record = result.map_err(|e| {
                Error::source_csv(
                    "<memory>",
                    format!(
                        "Unreadable CSV structure after record {}: {}",
                        stats.total_records, e
                    ),
                    e,
                )
            })?;
            stats.total_records += 1;

            match decode_employee_record(&record, &column_mapping, &self.schema, self.delimiter) {
                Ok(employee) => {
                    debug!(
                        "Decoded employee {} ({})",
                        employee.employee_id,
                        employee.full_name()
                    );
                    employees.push(employee);
                    stats.employees_loaded += 1;
                }
                Err(e) => {
                    warn!("Skipping invalid record: [{}] ({})", e.raw_row, e);
                    stats.records_skipped += 1;
                    stats.errors.push(e.to_string());
                }
            }
        }

        info!(
            "Loaded {} employees from {} records ({} skipped)",
            stats.employees_loaded, stats.total_records, stats.records_skipped
        );

        Ok(LoadResult { employees, stats })
    }
}
