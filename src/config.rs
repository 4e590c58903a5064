//! Configuration management and validation.
//!
//! Provides the immutable column schema that tells the decoder which header
//! name holds each employee field, and the processor settings resolved from
//! defaults and command-line overrides.

use crate::constants::{
    DEFAULT_DELIMITER, DEFAULT_INPUT_PATH, DEFAULT_SALARY_THRESHOLD, column_names,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::debug;

/// Header name for each employee field
///
/// The default matches the fixed employee file layout. The schema is built
/// once and shared read-only by the loader and decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSchema {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub date_of_birth: String,
    pub salary: String,
    pub department: String,
    pub date_of_joining: String,
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self {
            employee_id: column_names::EMPLOYEE_ID.to_string(),
            first_name: column_names::FIRST_NAME.to_string(),
            last_name: column_names::LAST_NAME.to_string(),
            email: column_names::EMAIL.to_string(),
            phone_number: column_names::PHONE_NUMBER.to_string(),
            date_of_birth: column_names::DATE_OF_BIRTH.to_string(),
            salary: column_names::SALARY.to_string(),
            department: column_names::DEPARTMENT.to_string(),
            date_of_joining: column_names::DATE_OF_JOINING.to_string(),
        }
    }
}

impl ColumnSchema {
    /// All column names in file order
    pub fn names(&self) -> [&str; 9] {
        [
            self.employee_id.as_str(),
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.email.as_str(),
            self.phone_number.as_str(),
            self.date_of_birth.as_str(),
            self.salary.as_str(),
            self.department.as_str(),
            self.date_of_joining.as_str(),
        ]
    }

    /// Reject empty or duplicated column names
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for name in self.names() {
            if name.is_empty() {
                return Err(Error::configuration("Column names must not be empty"));
            }
            if !seen.insert(name) {
                return Err(Error::configuration(format!(
                    "Column '{}' is mapped to more than one field",
                    name
                )));
            }
        }

        Ok(())
    }
}

/// Settings for one load/report run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// File to load employees from
    pub input_path: PathBuf,

    /// Employees earning strictly more than this appear in the filtered listing
    pub salary_threshold: i64,

    /// Field delimiter of the input file
    pub delimiter: u8,

    /// Header names of the employee fields
    pub schema: ColumnSchema,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            salary_threshold: DEFAULT_SALARY_THRESHOLD,
            delimiter: DEFAULT_DELIMITER,
            schema: ColumnSchema::default(),
        }
    }
}

impl ProcessorConfig {
    /// Create configuration with a custom input path
    pub fn with_input_path(mut self, input_path: impl Into<PathBuf>) -> Self {
        self.input_path = input_path.into();
        self
    }

    /// Create configuration with a custom salary threshold
    pub fn with_salary_threshold(mut self, salary_threshold: i64) -> Self {
        self.salary_threshold = salary_threshold;
        self
    }

    /// Create configuration with a custom field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Validate settings before any file is touched
    pub fn validate(&self) -> Result<()> {
        if self.salary_threshold < 0 {
            return Err(Error::configuration(format!(
                "Salary threshold must not be negative: {}",
                self.salary_threshold
            )));
        }

        if !self.delimiter.is_ascii() || matches!(self.delimiter, b'"' | b'\n' | b'\r') {
            return Err(Error::configuration(format!(
                "Unsupported delimiter: {:?}",
                self.delimiter as char
            )));
        }

        self.schema.validate()?;

        debug!(
            "Configuration valid: input={}, threshold={}, delimiter={:?}",
            self.input_path.display(),
            self.salary_threshold,
            self.delimiter as char
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProcessorConfig::default();

        assert_eq!(config.input_path, PathBuf::from("employees.csv"));
        assert_eq!(config.salary_threshold, 75_000);
        assert_eq!(config.delimiter, b',');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_schema_order() {
        let schema = ColumnSchema::default();

        assert_eq!(
            schema.names(),
            [
                "EmployeeID",
                "FirstName",
                "LastName",
                "Email",
                "PhoneNumber",
                "DateOfBirth",
                "Salary",
                "Department",
                "DateOfJoining",
            ]
        );
    }

    #[test]
    fn test_builder_overrides() {
        let config = ProcessorConfig::default()
            .with_input_path("staff.csv")
            .with_salary_threshold(95_000)
            .with_delimiter(b';');

        assert_eq!(config.input_path, PathBuf::from("staff.csv"));
        assert_eq!(config.salary_threshold, 95_000);
        assert_eq!(config.delimiter, b';');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_threshold() {
        let config = ProcessorConfig::default().with_salary_threshold(-1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_quote_delimiter() {
        let config = ProcessorConfig::default().with_delimiter(b'"');
        assert!(config.validate().is_err());

        let config = ProcessorConfig::default().with_delimiter(0xE9);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_duplicate_columns() {
        let schema = ColumnSchema {
            salary: "EmployeeID".to_string(),
            ..ColumnSchema::default()
        };
        let err = schema.validate().unwrap_err();
        assert!(err.to_string().contains("EmployeeID"));

        let schema = ColumnSchema {
            email: String::new(),
            ..ColumnSchema::default()
        };
        assert!(schema.validate().is_err());
    }
}
