//! Data models for employee processing
//!
//! This module contains the employee record produced by the CSV decoder and
//! read by every report.

use crate::app::services::employee_csv_parser::field_parsers::format_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// Employee Record
// =============================================================================

/// One fully decoded employee row
///
/// Values are only ever built by the record decoder once every field of the
/// source row converted successfully, and are never mutated afterwards. Text
/// fields hold the source text verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Employee {
    /// Employee identifier (uniqueness is not checked)
    pub employee_id: i32,

    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,

    /// Calendar date of birth, no time zone
    pub date_of_birth: NaiveDate,

    /// Whole-unit salary
    pub salary: i64,

    /// Grouping key for the department report (case-sensitive)
    pub department: String,

    /// Calendar date the employee joined, no time zone
    pub date_of_joining: NaiveDate,
}

impl Employee {
    /// Create a new Employee from already converted field values
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        employee_id: i32,
        first_name: String,
        last_name: String,
        email: String,
        phone_number: String,
        date_of_birth: NaiveDate,
        salary: i64,
        department: String,
        date_of_joining: NaiveDate,
    ) -> Self {
        Self {
            employee_id,
            first_name,
            last_name,
            email,
            phone_number,
            date_of_birth,
            salary,
            department,
            date_of_joining,
        }
    }

    /// First and last name separated by a space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Date of birth rendered as `YYYY-MM-DD`
    pub fn date_of_birth_text(&self) -> String {
        format_date(self.date_of_birth)
    }

    /// Joining date rendered as `YYYY-MM-DD`
    pub fn date_of_joining_text(&self) -> String {
        format_date(self.date_of_joining)
    }
}
