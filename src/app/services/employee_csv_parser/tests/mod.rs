//! Test utilities for employee CSV loader testing
//!
//! This module provides fixtures and helper functions used across the
//! loader test modules.

use csv::StringRecord;
use std::io::Write;
use tempfile::NamedTempFile;

use crate::constants::EMPLOYEE_COLUMNS;

mod record_parser_tests;

/// Header line of a well-formed employee file
pub fn header_line() -> String {
    EMPLOYEE_COLUMNS.join(",")
}

/// Header as a csv record
pub fn header_record() -> StringRecord {
    StringRecord::from(EMPLOYEE_COLUMNS.to_vec())
}

/// Three valid employees: two in Eng, one in Sales
pub fn create_test_employee_csv() -> String {
    format!(
        "{}\n{}\n{}\n{}\n",
        header_line(),
        "1,John,Doe,john.doe@example.com,555-1234,1985-04-12,70000,Eng,2010-06-01",
        "2,Jane,Smith,jane.smith@example.com,555-5678,1990-09-23,80000,Eng,2012-01-15",
        "3,Raj,Patel,raj.patel@example.com,555-9012,1982-11-30,90000,Sales,2008-03-20",
    )
}

/// Valid rows interleaved with one of each kind of bad row
pub fn create_mixed_employee_csv() -> String {
    [
        header_line().as_str(),
        "1,John,Doe,john.doe@example.com,555-1234,1985-04-12,70000,Eng,2010-06-01",
        "X1,Bad,Id,bad.id@example.com,555-0000,1985-04-12,70000,Eng,2010-06-01",
        "2,Jane,Smith,jane.smith@example.com,555-5678,1990-09-23,80000,Eng,2012-01-15",
        "4,Bad,Salary,bad.salary@example.com,555-0000,1985-04-12,lots,Eng,2010-06-01",
        "5,Bad,Date,bad.date@example.com,555-0000,1985/04/12,70000,Eng,2010-06-01",
        "6,Short,Row,short.row@example.com",
        "3,Raj,Patel,raj.patel@example.com,555-9012,1982-11-30,90000,Sales,2008-03-20",
    ]
    .join("\n")
}

/// Build a record with the standard header layout
pub fn record(fields: &[&str]) -> StringRecord {
    StringRecord::from(fields.to_vec())
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
