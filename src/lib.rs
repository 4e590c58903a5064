//! Employee Processor Library
//!
//! Loads employee records from a delimited text file and renders salary
//! reports over the rows that survived validation.
//!
//! This library provides tools for:
//! - Decoding CSV rows into typed [`Employee`] records
//! - Rejecting malformed rows individually without aborting the load
//! - Tracking load statistics and logging every rejection
//! - Rendering a full listing, department salary averages and filtered listings

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod employee_csv_parser;
        pub mod report_generator;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::Employee;
pub use config::{ColumnSchema, ProcessorConfig};

/// Result type alias for the employee processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for source-level and configuration failures
///
/// Per-row rejections are not represented here; see
/// [`app::services::employee_csv_parser::RowDecodeError`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The input could not be opened or read as a table
    #[error("Source unavailable '{path}': {message}")]
    SourceUnavailable {
        path: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation failed outside the input source (e.g. writing the report)
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create a source unavailable error caused by an I/O failure
    pub fn source_io(
        path: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a source unavailable error caused by unreadable CSV structure
    pub fn source_csv(
        path: impl Into<String>,
        message: impl Into<String>,
        source: csv::Error,
    ) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error means the input itself is unusable
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, Self::SourceUnavailable { .. })
    }
}
