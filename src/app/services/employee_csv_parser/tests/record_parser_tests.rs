//! Tests for single-record decoding

use super::*;
use crate::app::services::employee_csv_parser::column_mapping::ColumnMapping;
use crate::app::services::employee_csv_parser::decode_error::DecodeCause;
use crate::app::services::employee_csv_parser::record_parser::{
    decode_employee_record, parse_employee_fields, raw_row_text,
};
use crate::config::ColumnSchema;
use chrono::NaiveDate;

fn decode(fields: &[&str]) -> Result<crate::Employee, DecodeCause> {
    let schema = ColumnSchema::default();
    let mapping = ColumnMapping::analyze(&header_record(), &schema);
    parse_employee_fields(&record(fields), &mapping, &schema)
}

#[test]
fn test_decode_valid_record() {
    let employee = decode(&[
        "17",
        "Linus",
        "Torvalds",
        "linus@example.com",
        "555-0117",
        "1969-12-28",
        "120000",
        "Kernel",
        "1991-08-25",
    ])
    .unwrap();

    assert_eq!(employee.employee_id, 17);
    assert_eq!(employee.first_name, "Linus");
    assert_eq!(employee.last_name, "Torvalds");
    assert_eq!(employee.email, "linus@example.com");
    assert_eq!(employee.phone_number, "555-0117");
    assert_eq!(
        employee.date_of_birth,
        NaiveDate::from_ymd_opt(1969, 12, 28).unwrap()
    );
    assert_eq!(employee.salary, 120_000);
    assert_eq!(employee.department, "Kernel");
    assert_eq!(employee.date_of_birth_text(), "1969-12-28");
    assert_eq!(employee.date_of_joining_text(), "1991-08-25");
}

#[test]
fn test_decode_rejects_each_bad_field() {
    let base = [
        "1", "A", "B", "a@b.c", "555", "1980-01-01", "50000", "Ops", "2000-01-01",
    ];

    let cases: [(usize, &str, &str); 5] = [
        (0, "one", "EmployeeID"),
        (5, "1980-02-30", "DateOfBirth"),
        (6, "50k", "Salary"),
        (6, "50000.00", "Salary"),
        (8, "01-01-2000", "DateOfJoining"),
    ];

    for (index, value, column) in cases {
        let mut fields = base;
        fields[index] = value;

        let cause = decode(&fields).unwrap_err();
        assert_eq!(cause.column(), column, "value '{}' should fail {}", value, column);
    }
}

#[test]
fn test_decode_rejects_short_row() {
    let cause = decode(&["1", "A", "B", "a@b.c", "555", "1980-01-01", "50000"]).unwrap_err();

    assert_eq!(
        cause,
        DecodeCause::MissingValue {
            column: "Department".to_string()
        }
    );
}

#[test]
fn test_decode_ignores_extra_fields() {
    let employee = decode(&[
        "1", "A", "B", "a@b.c", "555", "1980-01-01", "50000", "Ops", "2000-01-01", "extra",
    ])
    .unwrap();

    assert_eq!(employee.department, "Ops");
}

#[test]
fn test_decode_accepts_empty_text_fields() {
    let employee = decode(&["1", "", "", "", "", "1980-01-01", "0", "", "2000-01-01"]).unwrap();

    assert!(employee.first_name.is_empty());
    assert!(employee.department.is_empty());
    assert_eq!(employee.salary, 0);
}

#[test]
fn test_decode_uses_header_positions() {
    let schema = ColumnSchema::default();
    let mut reordered: Vec<&str> = schema.names().to_vec();
    reordered.reverse();
    let mapping = ColumnMapping::analyze(&record(&reordered), &schema);

    let employee = parse_employee_fields(
        &record(&[
            "2001-02-03", "Ops", "65000", "1979-05-06", "555", "a@b.c", "B", "A", "9",
        ]),
        &mapping,
        &schema,
    )
    .unwrap();

    assert_eq!(employee.employee_id, 9);
    assert_eq!(employee.first_name, "A");
    assert_eq!(employee.salary, 65_000);
    assert_eq!(employee.date_of_joining_text(), "2001-02-03");
}

#[test]
fn test_decode_error_carries_raw_row() {
    let schema = ColumnSchema::default();
    let mapping = ColumnMapping::analyze(&header_record(), &schema);
    let bad = record(&[
        "1", "A", "B", "a@b.c", "555", "1980-01-01", "n/a", "Ops", "2000-01-01",
    ]);

    let err = decode_employee_record(&bad, &mapping, &schema, b',').unwrap_err();

    assert_eq!(err.raw_row, "1,A,B,a@b.c,555,1980-01-01,n/a,Ops,2000-01-01");
    assert_eq!(err.cause.column(), "Salary");
    assert!(err.to_string().contains("Salary"));
}

#[test]
fn test_raw_row_text_requotes_fields() {
    let row = record(&["1", "Smith, Jr.", "say \"hi\"", "x"]);

    assert_eq!(
        raw_row_text(&row, b','),
        "1,\"Smith, Jr.\",\"say \"\"hi\"\"\",x"
    );
    assert_eq!(raw_row_text(&row, b';'), "1;Smith, Jr.;\"say \"\"hi\"\"\";x");
}
