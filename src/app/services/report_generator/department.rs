//! Average salary per department
//!
//! Employees are grouped by the exact department text. Group order is not
//! part of the contract.

use std::collections::HashMap;
use std::fmt::Write;

use crate::app::models::Employee;
use crate::constants::{DEPARTMENT_LABEL_WIDTH, messages};

/// Mean salary of one department
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentAverage {
    pub department: String,
    pub average_salary: f64,
    pub headcount: usize,
}

/// Group employees by department and average their salaries
///
/// Sums are accumulated as `i128` so any number of `i64` salaries fits.
pub fn average_salary_by_department(employees: &[Employee]) -> Vec<DepartmentAverage> {
    let totals = employees.iter().fold(
        HashMap::<&str, (i128, usize)>::new(),
        |mut totals, employee| {
            let entry = totals.entry(employee.department.as_str()).or_default();
            entry.0 += i128::from(employee.salary);
            entry.1 += 1;
            totals
        },
    );

    totals
        .into_iter()
        .map(|(department, (sum, count))| DepartmentAverage {
            department: department.to_string(),
            average_salary: sum as f64 / count as f64,
            headcount: count,
        })
        .collect()
}

/// Render the average salary section
pub fn render_average_salary_by_department(employees: &[Employee]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n{}", messages::AVERAGE_SALARY_TITLE);
    for group in average_salary_by_department(employees) {
        let _ = writeln!(
            out,
            "{:<width$}: ${:.2}",
            group.department,
            group.average_salary,
            width = DEPARTMENT_LABEL_WIDTH
        );
    }

    out
}
