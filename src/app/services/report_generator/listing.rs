//! Full and filtered employee listings

use std::fmt::Write;

use super::table::render_table;
use crate::app::models::Employee;
use crate::constants::messages;

/// Render every employee in load order
pub fn render_employee_details(employees: &[Employee]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", messages::EMPLOYEE_DETAILS_TITLE);
    out.push_str(&render_table(employees));

    out
}

/// Render only the employees accepted by `predicate`
///
/// Falls back to a single "no matches" line instead of an empty table.
pub fn render_filtered_employees<F>(employees: &[Employee], predicate: F) -> String
where
    F: Fn(&Employee) -> bool,
{
    let matches: Vec<&Employee> = employees.iter().filter(|e| predicate(e)).collect();
    let mut out = String::new();

    if matches.is_empty() {
        let _ = writeln!(out, "\n{}", messages::NO_FILTER_MATCHES);
    } else {
        let _ = writeln!(out, "\n{}", messages::FILTERED_EMPLOYEES_TITLE);
        out.push_str(&render_table(matches));
    }

    out
}

/// Predicate for employees earning strictly more than `threshold`
pub fn salary_above(threshold: i64) -> impl Fn(&Employee) -> bool {
    move |employee| employee.salary > threshold
}
