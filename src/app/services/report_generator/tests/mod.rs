//! Fixtures for report generator tests

use chrono::NaiveDate;

use crate::app::models::Employee;


/// Build an employee with fixed personal details
pub fn employee(id: i32, department: &str, salary: i64) -> Employee {
    Employee::new(
        id,
        format!("First{}", id),
        format!("Last{}", id),
        format!("user{}@example.com", id),
        "555-0000".to_string(),
        NaiveDate::from_ymd_opt(1980, 1, 2).unwrap(),
        salary,
        department.to_string(),
        NaiveDate::from_ymd_opt(2010, 11, 30).unwrap(),
    )
}

/// Two Eng employees (70000, 80000) and one Sales employee (90000)
pub fn sample_employees() -> Vec<Employee> {
    vec![
        employee(1, "Eng", 70_000),
        employee(2, "Eng", 80_000),
        employee(3, "Sales", 90_000),
    ]
}
