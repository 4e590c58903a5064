//! Row-level decode failures
//!
//! A rejected row is reported as a value, not propagated: the loader matches
//! on it, logs it and moves on to the next row.

use std::num::ParseIntError;
use thiserror::Error;

/// Why a single field could not be converted
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeCause {
    #[error("Required column '{column}' not found in header")]
    MissingColumn { column: String },

    #[error("No value for required column '{column}'")]
    MissingValue { column: String },

    #[error("Invalid integer for {column}: '{value}' ({source})")]
    InvalidInteger {
        column: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Invalid date for {column}: '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { column: String, value: String },
}

impl DecodeCause {
    /// Column whose value caused the rejection
    pub fn column(&self) -> &str {
        match self {
            Self::MissingColumn { column }
            | Self::MissingValue { column }
            | Self::InvalidInteger { column, .. }
            | Self::InvalidDate { column, .. } => column,
        }
    }
}

/// A rejected row: its raw text, where it was, and why it failed
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Record at line {line} rejected: {cause}")]
pub struct RowDecodeError {
    /// Row fields re-joined as delimited text
    pub raw_row: String,

    /// 1-based line where the row starts in the source (0 if unknown)
    pub line: u64,

    #[source]
    pub cause: DecodeCause,
}

impl RowDecodeError {
    pub fn new(raw_row: impl Into<String>, line: u64, cause: DecodeCause) -> Self {
        Self {
            raw_row: raw_row.into(),
            line,
            cause,
        }
    }
}
