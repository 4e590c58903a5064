//! Individual CSV record decoding for employee files
//!
//! Turns one row into an [`Employee`] or a [`RowDecodeError`]. Decoding is a
//! pure function of the row: no I/O and no logging happen here.

use csv::StringRecord;

use super::column_mapping::ColumnMapping;
use super::decode_error::{DecodeCause, RowDecodeError};
use super::field_parsers::{parse_required_date, parse_required_integer, parse_required_string};
use crate::app::models::Employee;
use crate::config::ColumnSchema;

/// Decode a single employee record, attaching the raw row on failure
pub fn decode_employee_record(
    record: &StringRecord,
    mapping: &ColumnMapping,
    schema: &ColumnSchema,
    delimiter: u8,
) -> Result<Employee, RowDecodeError> {
    parse_employee_fields(record, mapping, schema).map_err(|cause| {
        let line = record.position().map_or(0, |position| position.line());
        RowDecodeError::new(raw_row_text(record, delimiter), line, cause)
    })
}

/// Convert every field of a record, stopping at the first failure
pub fn parse_employee_fields(
    record: &StringRecord,
    mapping: &ColumnMapping,
    schema: &ColumnSchema,
) -> Result<Employee, DecodeCause> {
    let employee_id = parse_required_integer::<i32>(record, mapping, &schema.employee_id)?;
    let first_name = parse_required_string(record, mapping, &schema.first_name)?;
    let last_name = parse_required_string(record, mapping, &schema.last_name)?;
    let email = parse_required_string(record, mapping, &schema.email)?;
    let phone_number = parse_required_string(record, mapping, &schema.phone_number)?;
    let date_of_birth = parse_required_date(record, mapping, &schema.date_of_birth)?;
    let salary = parse_required_integer::<i64>(record, mapping, &schema.salary)?;
    let department = parse_required_string(record, mapping, &schema.department)?;
    let date_of_joining = parse_required_date(record, mapping, &schema.date_of_joining)?;

    Ok(Employee::new(
        employee_id,
        first_name,
        last_name,
        email,
        phone_number,
        date_of_birth,
        salary,
        department,
        date_of_joining,
    ))
}

/// Re-encode a record as one line of delimited text for log messages
///
/// Fields that contain the delimiter or quotes are quoted the same way the
/// source would have quoted them.
pub fn raw_row_text(record: &StringRecord, delimiter: u8) -> String {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .terminator(csv::Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(Vec::new());

    let encoded = writer
        .write_record(record)
        .ok()
        .and_then(|_| writer.into_inner().ok());

    match encoded {
        Some(bytes) => String::from_utf8_lossy(&bytes)
            .trim_end_matches('\n')
            .to_string(),
        None => record
            .iter()
            .collect::<Vec<_>>()
            .join(&(delimiter as char).to_string()),
    }
}
