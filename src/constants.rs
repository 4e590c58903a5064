//! Application constants for the employee processor
//!
//! This module contains the column layout, formats, default values and
//! report labels used throughout the employee processor application.

// =============================================================================
// Input Layout
// =============================================================================

/// Required columns of the employee file, in their fixed order
pub const EMPLOYEE_COLUMNS: &[&str] = &[
    column_names::EMPLOYEE_ID,
    column_names::FIRST_NAME,
    column_names::LAST_NAME,
    column_names::EMAIL,
    column_names::PHONE_NUMBER,
    column_names::DATE_OF_BIRTH,
    column_names::SALARY,
    column_names::DEPARTMENT,
    column_names::DATE_OF_JOINING,
];

/// Header names of the employee columns
pub mod column_names {
    pub const EMPLOYEE_ID: &str = "EmployeeID";
    pub const FIRST_NAME: &str = "FirstName";
    pub const LAST_NAME: &str = "LastName";
    pub const EMAIL: &str = "Email";
    pub const PHONE_NUMBER: &str = "PhoneNumber";
    pub const DATE_OF_BIRTH: &str = "DateOfBirth";
    pub const SALARY: &str = "Salary";
    pub const DEPARTMENT: &str = "Department";
    pub const DATE_OF_JOINING: &str = "DateOfJoining";
}

/// Calendar date format used for both parsing and rendering
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Exact textual shape a date field must have before calendar validation
pub const DATE_PATTERN: &str = r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$";

// =============================================================================
// Defaults
// =============================================================================

/// Input file read when no path is given
pub const DEFAULT_INPUT_PATH: &str = "employees.csv";

/// Salary threshold of the filtered listing (strictly greater than)
pub const DEFAULT_SALARY_THRESHOLD: i64 = 75_000;

/// Field delimiter of the input file
pub const DEFAULT_DELIMITER: u8 = b',';

/// Success rate (percent) below which the load summary is flagged
pub const LOW_SUCCESS_RATE_PERCENT: f64 = 90.0;

// =============================================================================
// Report Layout
// =============================================================================

/// Horizontal rule framing the employee tables
pub const TABLE_RULE: &str =
    "------------------------------------------------------------------------------";

/// Column labels of the employee tables
pub const TABLE_HEADERS: [&str; 9] = [
    "ID",
    "First Name",
    "Last Name",
    "Email",
    "Phone",
    "DOB",
    "Salary",
    "Department",
    "Joining Date",
];

/// Minimum widths of the employee table columns (values are never truncated)
pub const TABLE_WIDTHS: [usize; 9] = [6, 10, 10, 24, 8, 10, 8, 12, 12];

/// Width of the department label in the average salary section
pub const DEPARTMENT_LABEL_WIDTH: usize = 12;

/// Report titles and messages
pub mod messages {
    pub const EMPLOYEE_DETAILS_TITLE: &str = "Employee Details:";
    pub const AVERAGE_SALARY_TITLE: &str = "Average Salary by Department:";
    pub const FILTERED_EMPLOYEES_TITLE: &str = "Filtered Employees:";
    pub const NO_FILTER_MATCHES: &str = "No employees match the filter criteria.";
    pub const NO_VALID_DATA: &str = "No valid employee data found.";
}
