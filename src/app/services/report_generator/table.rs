//! Fixed-width employee table rendering

use std::fmt::Write;

use crate::app::models::Employee;
use crate::constants::{TABLE_HEADERS, TABLE_RULE, TABLE_WIDTHS};

/// Render the header line of the employee table
pub fn header_line() -> String {
    format_row(&TABLE_HEADERS.map(str::to_string))
}

/// Render one employee as a table line
pub fn employee_line(employee: &Employee) -> String {
    format_row(&[
        employee.employee_id.to_string(),
        employee.first_name.clone(),
        employee.last_name.clone(),
        employee.email.clone(),
        employee.phone_number.clone(),
        employee.date_of_birth_text(),
        format!("{:.2}", employee.salary as f64),
        employee.department.clone(),
        employee.date_of_joining_text(),
    ])
}

/// Render a framed table: rule, header, rule, one line per employee, rule
pub fn render_table<'a>(employees: impl IntoIterator<Item = &'a Employee>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", TABLE_RULE);
    let _ = writeln!(out, "{}", header_line());
    let _ = writeln!(out, "{}", TABLE_RULE);
    for employee in employees {
        let _ = writeln!(out, "{}", employee_line(employee));
    }
    let _ = writeln!(out, "{}", TABLE_RULE);

    out
}

fn format_row(cells: &[String; 9]) -> String {
    cells
        .iter()
        .zip(TABLE_WIDTHS)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join(" | ")
}
