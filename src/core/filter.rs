//! Filter engine
//!
//! Applies the month and day-of-week dimensions of a selection to a record
//! table. `All` leaves a dimension untouched; when both dimensions are set the
//! result is their intersection. No match yields an empty table, not an error.

use crate::core::table::RecordTable;
use crate::types::{DayFilter, MonthFilter};
use tracing::{debug, warn};

/// Keep the records whose derived month and weekday pass both filters
pub fn filter(table: &RecordTable, month: MonthFilter, day: DayFilter) -> RecordTable {
    if month == MonthFilter::All && day == DayFilter::All {
        return table.clone();
    }

    let filtered =
        table.retain_matching(|record| month.matches(record.month) && day.matches(record.day_of_week));

    debug!(
        %month,
        %day,
        before = table.len(),
        after = filtered.len(),
        "applied record filter"
    );
    if filtered.is_empty() && !table.is_empty() {
        warn!(%month, %day, "no records match the selection");
    }

    filtered
}

impl RecordTable {
    /// Method form of [`filter`]
    pub fn filtered(&self, month: MonthFilter, day: DayFilter) -> RecordTable {
        filter(self, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TableSchema, TripRecord};
    use chrono::{Month, NaiveDateTime, Weekday};
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn record(start: &str) -> TripRecord {
        TripRecord::new(
            NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S").unwrap(),
            Decimal::from(60),
            "A".to_string(),
            "B".to_string(),
            Some("Subscriber".to_string()),
            None,
            None,
        )
    }

    /// Jan Sun, Jan Mon, Feb Mon, Mar Wed, Jul Sat
    fn sample_table() -> RecordTable {
        RecordTable::new(
            TableSchema::default(),
            vec![
                record("2017-01-01 08:00:00"),
                record("2017-01-02 09:00:00"),
                record("2017-02-06 10:00:00"),
                record("2017-03-15 17:00:00"),
                record("2017-07-01 12:00:00"),
            ],
        )
    }

    #[rstest]
    #[case::no_filter(MonthFilter::All, DayFilter::All, 5)]
    #[case::month_only(MonthFilter::Only(Month::January), DayFilter::All, 2)]
    #[case::day_only(MonthFilter::All, DayFilter::Only(Weekday::Mon), 2)]
    #[case::both(MonthFilter::Only(Month::January), DayFilter::Only(Weekday::Mon), 1)]
    #[case::no_match(MonthFilter::Only(Month::June), DayFilter::All, 0)]
    #[case::disjoint(MonthFilter::Only(Month::March), DayFilter::Only(Weekday::Mon), 0)]
    fn test_filter_counts(
        #[case] month: MonthFilter,
        #[case] day: DayFilter,
        #[case] expected: usize,
    ) {
        assert_eq!(filter(&sample_table(), month, day).len(), expected);
    }

    #[test]
    fn test_filter_keeps_only_matching_records() {
        let filtered = filter(
            &sample_table(),
            MonthFilter::Only(Month::January),
            DayFilter::All,
        );
        assert!(filtered.records().iter().all(|r| r.month == Month::January));
    }

    #[rstest]
    #[case(MonthFilter::Only(Month::January), DayFilter::All)]
    #[case(MonthFilter::All, DayFilter::Only(Weekday::Mon))]
    #[case(MonthFilter::Only(Month::February), DayFilter::Only(Weekday::Mon))]
    fn test_filter_is_idempotent(#[case] month: MonthFilter, #[case] day: DayFilter) {
        let once = filter(&sample_table(), month, day);
        let twice = filter(&once, month, day);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_dimensions_are_order_independent() {
        let month = MonthFilter::Only(Month::January);
        let day = DayFilter::Only(Weekday::Mon);
        let table = sample_table();

        let combined = filter(&table, month, day);
        let month_then_day = filter(&filter(&table, month, DayFilter::All), MonthFilter::All, day);
        let day_then_month = filter(&filter(&table, MonthFilter::All, day), month, DayFilter::All);

        assert_eq!(combined, month_then_day);
        assert_eq!(combined, day_then_month);
    }

    #[test]
    fn test_filtered_method_matches_function() {
        let table = sample_table();
        let month = MonthFilter::Only(Month::February);
        assert_eq!(
            table.filtered(month, DayFilter::All),
            filter(&table, month, DayFilter::All)
        );
    }
}
