//! CSV format handling for trip records
//!
//! This module centralizes all CSV format concerns, providing:
//! - Column names of the published bikeshare datasets
//! - Header validation and optional-column detection
//! - CsvTripRecord structure for deserialization
//! - Conversion from CSV records to domain types (timestamp parsing)
//! - Raw-row preview serialization
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::types::{BikeshareError, Result, TableSchema, TripRecord};
use chrono::NaiveDateTime;
use csv::StringRecord;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

pub const START_TIME: &str = "Start Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// Columns every city source must carry
pub const REQUIRED_COLUMNS: [&str; 5] =
    [START_TIME, TRIP_DURATION, START_STATION, END_STATION, USER_TYPE];

/// Accepted start-time layouts, tried in order
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// CSV record structure for deserialization
///
/// Matches the dataset header names. Columns not listed here (the leading
/// unnamed index column, `End Time`) are ignored. Numeric fields are kept as
/// text and validated in [`convert_csv_record`] to produce precise messages.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvTripRecord {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: String,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type", default)]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<String>,
}

/// Validate the header row and detect optional columns
///
/// # Errors
///
/// Returns `MalformedData` naming the first required column that is missing.
pub fn read_schema(headers: &StringRecord) -> Result<TableSchema> {
    let has = |name: &str| headers.iter().any(|header| header == name);

    if let Some(missing) = REQUIRED_COLUMNS.iter().find(|column| !has(column)) {
        return Err(BikeshareError::malformed(
            Some(1),
            format!("missing required column '{}'", missing),
        ));
    }

    Ok(TableSchema {
        has_gender: has(GENDER),
        has_birth_year: has(BIRTH_YEAR),
    })
}

/// Number of leading columns to drop from the raw-row preview
///
/// The published datasets start with an unnamed index column; it is not part
/// of the trip data. Sources without it keep every column.
pub fn index_column_offset(headers: &StringRecord) -> usize {
    usize::from(headers.get(0).is_some_and(|header| header.trim().is_empty()))
}

/// Parse a start timestamp such as `2017-01-01 00:07:57`
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Convert a CsvTripRecord to a TripRecord
///
/// This function:
/// - Parses the start timestamp and derives month, weekday and hour
/// - Parses the duration into a non-negative Decimal
/// - Parses the birth year, which the datasets store as a float ("1992.0")
/// - Maps blank optional cells to `None`
///
/// # Returns
///
/// Result containing either:
/// - Ok(TripRecord) - Successfully converted record
/// - Err(String) - Error message describing the conversion failure
pub fn convert_csv_record(csv_record: CsvTripRecord) -> std::result::Result<TripRecord, String> {
    let start_time = parse_timestamp(&csv_record.start_time)
        .ok_or_else(|| format!("Invalid start time '{}'", csv_record.start_time))?;

    let trip_duration = match parse_decimal(&csv_record.trip_duration) {
        Some(duration) if duration >= Decimal::ZERO => duration,
        _ => {
            return Err(format!(
                "Invalid trip duration '{}'",
                csv_record.trip_duration
            ))
        }
    };

    let birth_year = match non_blank(csv_record.birth_year) {
        Some(raw) => Some(parse_birth_year(&raw)?),
        None => None,
    };

    Ok(TripRecord::new(
        start_time,
        trip_duration,
        csv_record.start_station,
        csv_record.end_station,
        non_blank(csv_record.user_type),
        non_blank(csv_record.gender),
        birth_year,
    ))
}

/// Plain decimal text, or scientific notation such as `1.5e3`
fn parse_decimal(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

fn parse_birth_year(raw: &str) -> std::result::Result<i32, String> {
    parse_decimal(raw)
        .filter(|year| year.fract().is_zero())
        .and_then(|year| year.to_i32())
        .ok_or_else(|| format!("Invalid birth year '{}'", raw))
}

/// Write trip records as CSV in their source layout
///
/// With `source_columns` from a loaded table, each record's source cells are
/// written under that header, so columns such as `End Time` survive. Tables
/// built in code have no source header; their records are written with the
/// dataset column names, optional columns only when the schema carries them.
/// Derived fields (month, weekday, hour) are never written.
pub fn write_preview(
    records: &[TripRecord],
    schema: TableSchema,
    source_columns: &[String],
    output: &mut dyn Write,
) -> std::result::Result<(), String> {
    let mut writer = csv::Writer::from_writer(output);

    if source_columns.is_empty() {
        let mut header = REQUIRED_COLUMNS.to_vec();
        if schema.has_gender {
            header.push(GENDER);
        }
        if schema.has_birth_year {
            header.push(BIRTH_YEAR);
        }
        writer
            .write_record(&header)
            .map_err(|e| format!("Failed to write CSV header: {}", e))?;
    } else {
        writer
            .write_record(source_columns)
            .map_err(|e| format!("Failed to write CSV header: {}", e))?;
    }

    for record in records {
        let written = if source_columns.is_empty() {
            writer.write_record(field_cells(record, schema))
        } else {
            writer.write_record(&record.source_row)
        };
        written.map_err(|e| format!("Failed to write trip record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}

fn field_cells(record: &TripRecord, schema: TableSchema) -> Vec<String> {
    let mut row = vec![
        record.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
        record.trip_duration.to_string(),
        record.start_station.clone(),
        record.end_station.clone(),
        record.user_type.clone().unwrap_or_default(),
    ];
    if schema.has_gender {
        row.push(record.gender.clone().unwrap_or_default());
    }
    if schema.has_birth_year {
        row.push(
            record
                .birth_year
                .map(|year| year.to_string())
                .unwrap_or_default(),
        );
    }
    row
}
