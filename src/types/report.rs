//! Statistics report types
//!
//! Read-only results produced by the aggregation engine and consumed by the
//! presentation layer. Optional demographic fields use [`OptionalStat`] so that
//! "column not supplied for this city" is never confused with a zero count.

use super::error::Result;
use super::selection::Selection;
use chrono::{Month, Weekday};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// A value paired with the number of records carrying it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCount<T = String> {
    pub value: T,
    pub count: usize,
}

/// A statistic that depends on an optional column
#[derive(Debug, Clone, PartialEq)]
pub enum OptionalStat<T> {
    /// Computed value
    Value(T),
    /// Column exists but the filtered view holds no non-null values
    NoData,
    /// The city does not supply this column
    NotAvailable,
}

impl<T> OptionalStat<T> {
    /// Borrow the computed value, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            OptionalStat::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, OptionalStat::NotAvailable)
    }
}

/// Most frequent times of travel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub most_common_month: Month,
    pub most_common_day: Weekday,
    pub most_common_hour: u32,
}

/// Most popular stations and trips
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub most_common_start: String,
    pub most_common_end: String,
    /// Composite "start and end" key
    pub most_common_pair: String,
    /// At most five composite keys, descending by count
    pub top_pairs: Vec<ValueCount>,
}

/// Total and average trip duration
///
/// All values are in seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationStats {
    pub total_duration_seconds: Decimal,
    pub mean_duration_seconds: Decimal,
    /// `floor(total / mean)`
    ///
    /// An approximation of the number of trips. It is derived from the
    /// duration aggregates, not counted, and may differ from the record count
    /// by rounding in the mean.
    pub total_trip_count_estimate: u64,
}

/// Share of one gender among rows that carry a gender
#[derive(Debug, Clone, PartialEq)]
pub struct GenderShare {
    pub gender: String,
    /// Percentage in `0.0..=100.0`
    pub percentage: f64,
}

/// Bikeshare user demographics
#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    /// Always present; empty for an empty filtered view
    pub user_type_counts: Vec<ValueCount>,
    pub gender_counts: OptionalStat<Vec<ValueCount>>,
    pub gender_ratio: OptionalStat<Vec<GenderShare>>,
    pub most_common_birth_year: OptionalStat<i32>,
    pub oldest_birth_year: OptionalStat<i32>,
    pub youngest_birth_year: OptionalStat<i32>,
}

/// Complete result of one analysis pass
///
/// Mode- and mean-based sections carry `Err(EmptyDataset)` when the filtered
/// view is empty; the user section is count-based and always present.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsReport {
    pub selection: Selection,
    /// Number of records in the filtered view
    pub record_count: usize,
    pub time: Result<TimeStats>,
    pub station: Result<StationStats>,
    pub duration: Result<DurationStats>,
    pub user: UserStats,
}

/// A duration split into whole minutes and remaining whole seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinutesSeconds {
    pub minutes: u64,
    pub seconds: u64,
}

impl MinutesSeconds {
    /// `minutes = floor(s / 60)`, `seconds = floor(s mod 60)`
    pub fn from_seconds(seconds: Decimal) -> Self {
        let sixty = Decimal::from(60);
        MinutesSeconds {
            minutes: (seconds / sixty).floor().to_u64().unwrap_or(0),
            seconds: (seconds % sixty).floor().to_u64().unwrap_or(0),
        }
    }
}

impl std::fmt::Display for MinutesSeconds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Decimal::new(360, 0), 6, 0)]
    #[case(Decimal::new(125, 0), 2, 5)]
    #[case(Decimal::new(59999, 2), 9, 59)] // 599.99 s
    #[case(Decimal::ZERO, 0, 0)]
    fn test_minutes_seconds(#[case] input: Decimal, #[case] minutes: u64, #[case] seconds: u64) {
        let split = MinutesSeconds::from_seconds(input);
        assert_eq!(split, MinutesSeconds { minutes, seconds });
    }

    #[test]
    fn test_minutes_seconds_display_matches_report_format() {
        let split = MinutesSeconds::from_seconds(Decimal::new(125, 0));
        assert_eq!(split.to_string(), "2:5");
    }

    #[test]
    fn test_optional_stat_accessors() {
        assert_eq!(OptionalStat::Value(1990).value(), Some(&1990));
        assert_eq!(OptionalStat::<i32>::NoData.value(), None);
        assert!(OptionalStat::<i32>::NoData.is_available());
        assert!(!OptionalStat::<i32>::NotAvailable.is_available());
    }
}
