//! Text reports over loaded employees
//!
//! Every function here is read-only over its input and returns the rendered
//! text; printing is left to the caller.
//!
//! - [`listing`] - Full listing and predicate-filtered listing
//! - [`department`] - Average salary grouped by department
//! - [`table`] - Shared fixed-width table layout

pub mod department;
pub mod listing;
pub mod table;

#[cfg(test)]
pub mod tests;

pub use department::{
    DepartmentAverage, average_salary_by_department, render_average_salary_by_department,
};
pub use listing::{render_employee_details, render_filtered_employees, salary_above};

use crate::app::models::Employee;
use crate::constants::messages;

/// Render all three report sections in order, or the "no data" line
pub fn render_report(employees: &[Employee], salary_threshold: i64) -> String {
    if employees.is_empty() {
        return format!("{}\n", messages::NO_VALID_DATA);
    }

    let mut out = render_employee_details(employees);
    out.push_str(&render_average_salary_by_department(employees));
    out.push_str(&render_filtered_employees(
        employees,
        salary_above(salary_threshold),
    ));
    out
}
