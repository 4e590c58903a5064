//! Load statistics and result structures for employee CSV processing
//!
//! This module provides types for tracking how many rows were read, decoded
//! and rejected, alongside the decoded employees themselves.

use crate::app::models::Employee;

/// Load result with employees and basic statistics
#[derive(Debug, Clone, Default)]
pub struct LoadResult {
    /// Successfully decoded employees, in source order
    pub employees: Vec<Employee>,

    /// Basic load statistics
    pub stats: LoadStats,
}

impl LoadResult {
    /// Result of a load that produced nothing (e.g. unreadable source)
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when no employee was decoded
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

/// Simple load statistics
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct LoadStats {
    /// Total number of data records encountered
    pub total_records: usize,

    /// Number of employees successfully decoded
    pub employees_loaded: usize,

    /// Number of records rejected
    pub records_skipped: usize,

    /// One message per rejected record
    pub errors: Vec<String>,
}

impl LoadStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.employees_loaded as f64 / self.total_records as f64) * 100.0
        }
    }

    /// True when no record was rejected
    pub fn is_clean(&self) -> bool {
        self.records_skipped == 0
    }
}
