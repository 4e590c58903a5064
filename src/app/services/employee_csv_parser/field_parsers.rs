//! Field parsing utilities for employee CSV records
//!
//! This module provides helper functions for extracting and converting single
//! fields. They are stateless and never trim or normalize the source text.

use super::column_mapping::ColumnMapping;
use super::decode_error::DecodeCause;
use crate::constants::{DATE_FORMAT, DATE_PATTERN};
use chrono::NaiveDate;
use csv::StringRecord;
use regex::Regex;
use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::LazyLock;

static DATE_SHAPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DATE_PATTERN).expect("Invalid date shape regex"));

/// Parse a `YYYY-MM-DD` calendar date
///
/// The text must have exactly four year digits and two month and day digits,
/// and must name a real calendar date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if !DATE_SHAPE_REGEX.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Render a calendar date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a required date field from a CSV record
pub fn parse_required_date(
    record: &StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Result<NaiveDate, DecodeCause> {
    let value_str = get_required_field(record, mapping, field_name)?;

    parse_date(value_str).ok_or_else(|| DecodeCause::InvalidDate {
        column: field_name.to_string(),
        value: value_str.to_string(),
    })
}

/// Parse a required integer field from a CSV record
pub fn parse_required_integer<T>(
    record: &StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Result<T, DecodeCause>
where
    T: FromStr<Err = ParseIntError>,
{
    let value_str = get_required_field(record, mapping, field_name)?;

    value_str
        .parse::<T>()
        .map_err(|source| DecodeCause::InvalidInteger {
            column: field_name.to_string(),
            value: value_str.to_string(),
            source,
        })
}

/// Parse a required string field from a CSV record
pub fn parse_required_string(
    record: &StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Result<String, DecodeCause> {
    let value_str = get_required_field(record, mapping, field_name)?;
    Ok(value_str.to_string())
}

/// Get a required field value from a CSV record
///
/// The column must exist in the header and the row must be long enough to
/// hold it. An empty value is still a value.
pub fn get_required_field<'a>(
    record: &'a StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Result<&'a str, DecodeCause> {
    let index = mapping
        .get_index(field_name)
        .ok_or_else(|| DecodeCause::MissingColumn {
            column: field_name.to_string(),
        })?;

    record.get(index).ok_or_else(|| DecodeCause::MissingValue {
        column: field_name.to_string(),
    })
}
