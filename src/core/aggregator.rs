//! Aggregation engine
//!
//! Computes the four statistic groups over a (filtered) record table:
//!
//! - **Time of travel**: most common month, weekday and start hour
//! - **Stations**: most common start, end and start/end pair, plus the top 5 pairs
//! - **Trip duration**: total and mean duration, and a trip-count estimate
//! - **Users**: user type counts and, where the city supplies them, gender and
//!   birth-year aggregates
//!
//! Mode and mean based groups fail with `EmptyDataset` on an empty table. The
//! user group is count based and never fails; its optional fields report
//! `NotAvailable` when the table schema lacks the column and `NoData` when the
//! column exists but holds no values.
//!
//! Every mode uses [`FrequencyCounter`], so ties resolve to the value that
//! appears first in the table.

use crate::core::frequency::FrequencyCounter;
use crate::core::table::RecordTable;
use crate::types::{
    BikeshareError, DurationStats, GenderShare, OptionalStat, Result, Selection, StationStats,
    StatisticsReport, TimeStats, UserStats,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::time::Instant;
use tracing::debug;

/// Number of station pairs listed in [`StationStats::top_pairs`]
pub const TOP_PAIRS: usize = 5;

fn require_records(table: &RecordTable, statistic: &str) -> Result<()> {
    if table.is_empty() {
        return Err(BikeshareError::empty_dataset(statistic));
    }
    Ok(())
}

/// Most frequent month, weekday and hour
///
/// # Errors
///
/// `EmptyDataset` if the table has no records.
pub fn compute_time_stats(table: &RecordTable) -> Result<TimeStats> {
    require_records(table, "time")?;
    let records = table.records();

    let months: FrequencyCounter<_> = records.iter().map(|r| r.month).collect();
    let days: FrequencyCounter<_> = records.iter().map(|r| r.day_of_week).collect();
    let hours: FrequencyCounter<_> = records.iter().map(|r| r.hour).collect();

    match (months.mode(), days.mode(), hours.mode()) {
        (Some(&month), Some(&day), Some(&hour)) => Ok(TimeStats {
            most_common_month: month,
            most_common_day: day,
            most_common_hour: hour,
        }),
        _ => Err(BikeshareError::empty_dataset("time")),
    }
}

/// Most popular start station, end station and trip
///
/// # Errors
///
/// `EmptyDataset` if the table has no records.
pub fn compute_station_stats(table: &RecordTable) -> Result<StationStats> {
    require_records(table, "station")?;
    let records = table.records();

    let starts: FrequencyCounter<&str> =
        records.iter().map(|r| r.start_station.as_str()).collect();
    let ends: FrequencyCounter<&str> = records.iter().map(|r| r.end_station.as_str()).collect();
    let pairs: FrequencyCounter<String> = records.iter().map(|r| r.station_pair()).collect();

    let (Some(start), Some(end), Some(pair)) = (starts.mode(), ends.mode(), pairs.mode()) else {
        return Err(BikeshareError::empty_dataset("station"));
    };

    Ok(StationStats {
        most_common_start: start.to_string(),
        most_common_end: end.to_string(),
        most_common_pair: pair.clone(),
        top_pairs: pairs.top(TOP_PAIRS),
    })
}

/// Total and mean trip duration in seconds
///
/// `total_trip_count_estimate` is `floor(total / mean)`, an approximation of
/// the number of trips rather than a count. When every trip lasted zero
/// seconds the quotient is undefined and the record count is reported.
///
/// # Errors
///
/// - `EmptyDataset` if the table has no records
/// - `MalformedData` if the durations sum past the range of `Decimal`
pub fn compute_duration_stats(table: &RecordTable) -> Result<DurationStats> {
    require_records(table, "duration")?;
    let records = table.records();

    let total = records
        .iter()
        .try_fold(Decimal::ZERO, |sum, r| sum.checked_add(r.trip_duration))
        .ok_or_else(|| {
            BikeshareError::malformed(None, "total trip duration exceeds the supported range")
        })?;
    let mean = total
        .checked_div(Decimal::from(records.len()))
        .unwrap_or(Decimal::ZERO);

    let estimate = if mean.is_zero() {
        records.len() as u64
    } else {
        total
            .checked_div(mean)
            .and_then(|trips| trips.floor().to_u64())
            .unwrap_or(records.len() as u64)
    };

    Ok(DurationStats {
        total_duration_seconds: total,
        mean_duration_seconds: mean,
        total_trip_count_estimate: estimate,
    })
}

/// User type counts and optional demographics
pub fn compute_user_stats(table: &RecordTable) -> UserStats {
    let schema = table.schema();
    let records = table.records();

    let user_types: FrequencyCounter<String> = records
        .iter()
        .filter_map(|r| r.user_type.clone())
        .collect();

    let (gender_counts, gender_ratio) = if schema.has_gender {
        let genders: FrequencyCounter<String> =
            records.iter().filter_map(|r| r.gender.clone()).collect();
        if genders.is_empty() {
            (OptionalStat::NoData, OptionalStat::NoData)
        } else {
            let counts = genders.sorted();
            let bearing = genders.total();
            let ratio = counts
                .iter()
                .map(|entry| GenderShare {
                    gender: entry.value.clone(),
                    percentage: entry.count as f64 * 100.0 / bearing as f64,
                })
                .collect();
            (OptionalStat::Value(counts), OptionalStat::Value(ratio))
        }
    } else {
        (OptionalStat::NotAvailable, OptionalStat::NotAvailable)
    };

    let (most_common_birth_year, oldest_birth_year, youngest_birth_year) = if schema.has_birth_year
    {
        let years: Vec<i32> = records.iter().filter_map(|r| r.birth_year).collect();
        let counter: FrequencyCounter<i32> = years.iter().copied().collect();
        (
            counter.mode().copied().map_or(OptionalStat::NoData, OptionalStat::Value),
            years.iter().min().copied().map_or(OptionalStat::NoData, OptionalStat::Value),
            years.iter().max().copied().map_or(OptionalStat::NoData, OptionalStat::Value),
        )
    } else {
        (
            OptionalStat::NotAvailable,
            OptionalStat::NotAvailable,
            OptionalStat::NotAvailable,
        )
    };

    UserStats {
        user_type_counts: user_types.sorted(),
        gender_counts,
        gender_ratio,
        most_common_birth_year,
        oldest_birth_year,
        youngest_birth_year,
    }
}

fn timed<T>(section: &str, f: impl FnOnce() -> T) -> T {
    let started = Instant::now();
    let result = f();
    debug!(
        section,
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        "computed statistics"
    );
    result
}

/// Run all four statistic groups over a filtered table
pub fn analyze(selection: &Selection, table: &RecordTable) -> StatisticsReport {
    StatisticsReport {
        selection: selection.clone(),
        record_count: table.len(),
        time: timed("time", || compute_time_stats(table)),
        station: timed("station", || compute_station_stats(table)),
        duration: timed("duration", || compute_duration_stats(table)),
        user: timed("user", || compute_user_stats(table)),
    }
}
