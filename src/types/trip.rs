//! Trip-related types for the bikeshare statistics engine
//!
//! This module defines the trip record, the optional-column schema of a loaded
//! table, and the English calendar names used for derived fields and filters.

use chrono::{Datelike, Month, NaiveDateTime, Timelike, Weekday};
use rust_decimal::Decimal;

/// Separator used to build the composite start/end station key
pub const STATION_PAIR_SEPARATOR: &str = " and ";

/// One row of bikeshare usage data
///
/// Required fields are always present. `gender` and `birth_year` are only
/// populated for cities whose source carries those columns (see [`TableSchema`]);
/// individual rows may still leave them blank.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// Trip start timestamp (local time of the source data)
    pub start_time: NaiveDateTime,

    /// Trip duration in seconds (non-negative)
    pub trip_duration: Decimal,

    /// Name of the station where the trip started
    pub start_station: String,

    /// Name of the station where the trip ended
    pub end_station: String,

    /// Rider category such as "Subscriber" or "Customer"
    ///
    /// `None` when the source cell is blank.
    pub user_type: Option<String>,

    /// Rider gender, when supplied
    pub gender: Option<String>,

    /// Rider birth year, when supplied
    pub birth_year: Option<i32>,

    /// Calendar month of `start_time`
    pub month: Month,

    /// Day of week of `start_time`
    pub day_of_week: Weekday,

    /// Hour of day of `start_time` (0-23)
    pub hour: u32,

    /// Source cells in column order, without the unnamed index column
    ///
    /// Empty for records built in code rather than loaded from a file.
    pub source_row: Vec<String>,
}

impl TripRecord {
    /// Build a record, deriving month, day of week and hour from `start_time`
    pub fn new(
        start_time: NaiveDateTime,
        trip_duration: Decimal,
        start_station: String,
        end_station: String,
        user_type: Option<String>,
        gender: Option<String>,
        birth_year: Option<i32>,
    ) -> Self {
        TripRecord {
            start_time,
            trip_duration,
            start_station,
            end_station,
            user_type,
            gender,
            birth_year,
            month: month_of(&start_time),
            day_of_week: start_time.weekday(),
            hour: start_time.hour(),
            source_row: Vec::new(),
        }
    }

    /// Attach the source cells this record was parsed from
    pub fn with_source_row(mut self, source_row: Vec<String>) -> Self {
        self.source_row = source_row;
        self
    }

    /// Composite "start and end" station key
    pub fn station_pair(&self) -> String {
        format!(
            "{}{}{}",
            self.start_station, STATION_PAIR_SEPARATOR, self.end_station
        )
    }
}

/// Optional columns carried by a loaded table
///
/// Decided once from the CSV header at load time. Aggregations consult the
/// schema to tell "column absent for this city" apart from "no values".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableSchema {
    /// Source has a `Gender` column
    pub has_gender: bool,

    /// Source has a `Birth Year` column
    pub has_birth_year: bool,
}

fn month_of(timestamp: &NaiveDateTime) -> Month {
    // month() is always in 1..=12
    Month::try_from(timestamp.month() as u8).unwrap_or(Month::January)
}

/// English name of a month ("January")
pub fn month_name(month: Month) -> &'static str {
    month.name()
}

/// English name of a weekday ("Monday")
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
