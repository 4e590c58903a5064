//! Column mapping between the configured schema and a file's header row
//!
//! This module resolves each configured column name to its position in the
//! header of a concrete file and records which required columns are absent.

use crate::config::ColumnSchema;
use csv::StringRecord;
use std::collections::HashMap;

/// Header analysis result for one employee file
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Column name to index mapping (first occurrence wins)
    pub name_to_index: HashMap<String, usize>,

    /// Required columns that the header does not contain
    pub missing_columns: Vec<String>,
}

impl ColumnMapping {
    /// Map header names to indices and check them against the schema
    ///
    /// Names are compared exactly; no trimming or case folding is applied.
    pub fn analyze(headers: &StringRecord, schema: &ColumnSchema) -> Self {
        let mut name_to_index = HashMap::new();

        for (index, header) in headers.iter().enumerate() {
            name_to_index.entry(header.to_string()).or_insert(index);
        }

        let missing_columns = schema
            .names()
            .iter()
            .filter(|name| !name_to_index.contains_key(**name))
            .map(|name| name.to_string())
            .collect();

        ColumnMapping {
            name_to_index,
            missing_columns,
        }
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Check if a column exists in the mapping
    pub fn has_column(&self, column_name: &str) -> bool {
        self.name_to_index.contains_key(column_name)
    }

    /// True when every schema column was found in the header
    pub fn is_complete(&self) -> bool {
        self.missing_columns.is_empty()
    }
}
