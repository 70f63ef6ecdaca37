//! Text rendering of statistics reports
//!
//! Turns a [`StatisticsReport`] into the console report: one block per
//! statistic group, durations as `minutes:seconds`, gender shares as
//! percentages. Empty selections and missing demographic columns are spelled
//! out instead of being shown as zeros.

use crate::types::{
    month_name, weekday_name, BikeshareError, MinutesSeconds, OptionalStat, StatisticsReport,
    UserStats, ValueCount,
};
use std::io::Write;

const RULE: &str = "----------------------------------------";

fn section_error(error: &BikeshareError) -> String {
    if error.is_recoverable() {
        "No data for this selection.".to_string()
    } else {
        format!("Error: {}", error)
    }
}

fn write_counts(out: &mut dyn Write, counts: &[ValueCount]) -> std::io::Result<()> {
    for entry in counts {
        writeln!(out, "  {:<40} {}", entry.value, entry.count)?;
    }
    Ok(())
}

fn write_birth_year(
    out: &mut dyn Write,
    city: &str,
    label: &str,
    stat: &OptionalStat<i32>,
) -> std::io::Result<()> {
    match stat {
        OptionalStat::Value(year) => writeln!(out, "{}:  {}", label, year),
        OptionalStat::NoData => writeln!(out, "{}:  no birth year data for this selection", label),
        OptionalStat::NotAvailable => {
            writeln!(out, "Sorry, {} does not have birth year data...", city)
        }
    }
}

fn write_user_section(out: &mut dyn Write, city: &str, user: &UserStats) -> std::io::Result<()> {
    writeln!(out, "User Stats:\n")?;
    writeln!(out, "Summary of User Types:")?;
    write_counts(out, &user.user_type_counts)?;
    writeln!(out)?;

    match (&user.gender_counts, &user.gender_ratio) {
        (OptionalStat::Value(counts), OptionalStat::Value(ratio)) => {
            writeln!(out, "Summary of User Genders (count):")?;
            write_counts(out, counts)?;
            writeln!(out, "Gender ratio (percentage):")?;
            for share in ratio {
                writeln!(out, "  {:<40} {:.2}", share.gender, share.percentage)?;
            }
        }
        (OptionalStat::NotAvailable, _) => {
            writeln!(out, "Sorry, {} does not have gender data...", city)?
        }
        _ => writeln!(out, "No gender data for this selection.")?,
    }
    writeln!(out)?;

    if user.most_common_birth_year.is_available() {
        write_birth_year(
            out,
            city,
            "Most Frequently Selected Birth Year",
            &user.most_common_birth_year,
        )?;
        write_birth_year(out, city, "Oldest Selected Birth Year", &user.oldest_birth_year)?;
        write_birth_year(
            out,
            city,
            "Youngest Selected Birth Year",
            &user.youngest_birth_year,
        )?;
    } else {
        write_birth_year(out, city, "", &user.most_common_birth_year)?;
    }
    Ok(())
}

fn render(report: &StatisticsReport, out: &mut dyn Write) -> std::io::Result<()> {
    let city = report.selection.city.as_str();

    writeln!(out, "Your choices were: {}", report.selection)?;
    writeln!(out, "Trips in selection: {}", report.record_count)?;
    writeln!(out, "{}\n", RULE)?;

    writeln!(out, "The Most Frequent Times of Travel for {}\n", city)?;
    match &report.time {
        Ok(time) => {
            writeln!(out, "Most Frequent Month:  {}", month_name(time.most_common_month))?;
            writeln!(out, "Most Frequent Day:  {}", weekday_name(time.most_common_day))?;
            writeln!(out, "Most Frequent Hour:  {}", time.most_common_hour)?;
        }
        Err(e) => writeln!(out, "{}", section_error(e))?,
    }
    writeln!(out, "{}\n", RULE)?;

    writeln!(out, "The Most Popular Stations and Trips for {}\n", city)?;
    match &report.station {
        Ok(station) => {
            writeln!(out, "Most Frequent Starting Station:  {}", station.most_common_start)?;
            writeln!(out, "Most Frequent Ending Station:  {}", station.most_common_end)?;
            writeln!(
                out,
                "Most Frequent Start and End Station Combination:  {}",
                station.most_common_pair
            )?;
            writeln!(
                out,
                "Top {} Start and End Station Combinations & Trip Count:",
                station.top_pairs.len()
            )?;
            write_counts(out, &station.top_pairs)?;
        }
        Err(e) => writeln!(out, "{}", section_error(e))?,
    }
    writeln!(out, "{}\n", RULE)?;

    writeln!(out, "Trip Duration Stats for {}\n", city)?;
    match &report.duration {
        Ok(duration) => {
            writeln!(
                out,
                "Total city-wide trips (estimated from duration):  {}",
                duration.total_trip_count_estimate
            )?;
            writeln!(
                out,
                "Total Trip Duration (mins:secs):  {}",
                MinutesSeconds::from_seconds(duration.total_duration_seconds)
            )?;
            writeln!(
                out,
                "Mean Duration Per Trip (mins:secs):  {}",
                MinutesSeconds::from_seconds(duration.mean_duration_seconds)
            )?;
        }
        Err(e) => writeln!(out, "{}", section_error(e))?,
    }
    writeln!(out, "{}\n", RULE)?;

    write_user_section(out, city, &report.user)?;
    writeln!(out, "{}", RULE)?;

    Ok(())
}

/// Write a statistics report as console text
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_report(report: &StatisticsReport, output: &mut dyn Write) -> Result<(), String> {
    render(report, output).map_err(|e| format!("Failed to write report: {}", e))?;
    output
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        DurationStats, GenderShare, Selection, StationStats, TimeStats, UserStats,
    };
    use chrono::{Month, Weekday};
    use rust_decimal::Decimal;

    fn user_without_demographics() -> UserStats {
        UserStats {
            user_type_counts: vec![ValueCount {
                value: "Subscriber".to_string(),
                count: 3,
            }],
            gender_counts: OptionalStat::NotAvailable,
            gender_ratio: OptionalStat::NotAvailable,
            most_common_birth_year: OptionalStat::NotAvailable,
            oldest_birth_year: OptionalStat::NotAvailable,
            youngest_birth_year: OptionalStat::NotAvailable,
        }
    }

    fn full_report() -> StatisticsReport {
        StatisticsReport {
            selection: Selection::parse("Chicago", "all", "all").unwrap(),
            record_count: 3,
            time: Ok(TimeStats {
                most_common_month: Month::June,
                most_common_day: Weekday::Tue,
                most_common_hour: 17,
            }),
            station: Ok(StationStats {
                most_common_start: "A".to_string(),
                most_common_end: "B".to_string(),
                most_common_pair: "A and B".to_string(),
                top_pairs: vec![ValueCount {
                    value: "A and B".to_string(),
                    count: 3,
                }],
            }),
            duration: Ok(DurationStats {
                total_duration_seconds: Decimal::from(360),
                mean_duration_seconds: Decimal::from(120),
                total_trip_count_estimate: 3,
            }),
            user: UserStats {
                gender_counts: OptionalStat::Value(vec![ValueCount {
                    value: "Female".to_string(),
                    count: 3,
                }]),
                gender_ratio: OptionalStat::Value(vec![GenderShare {
                    gender: "Female".to_string(),
                    percentage: 100.0,
                }]),
                most_common_birth_year: OptionalStat::Value(1990),
                oldest_birth_year: OptionalStat::Value(1970),
                youngest_birth_year: OptionalStat::Value(1999),
                ..user_without_demographics()
            },
        }
    }

    fn rendered(report: &StatisticsReport) -> String {
        let mut output = Vec::new();
        write_report(report, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_full_report_sections() {
        let text = rendered(&full_report());

        assert!(text.contains("Most Frequent Month:  June"));
        assert!(text.contains("Most Frequent Day:  Tuesday"));
        assert!(text.contains("Most Frequent Hour:  17"));
        assert!(text.contains("Most Frequent Start and End Station Combination:  A and B"));
        assert!(text.contains("Total Trip Duration (mins:secs):  6:0"));
        assert!(text.contains("Mean Duration Per Trip (mins:secs):  2:0"));
        assert!(text.contains("100.00"));
        assert!(text.contains("Oldest Selected Birth Year:  1970"));
        assert!(text.contains("Youngest Selected Birth Year:  1999"));
    }

    #[test]
    fn test_empty_selection_is_reported_not_zeroed() {
        let mut report = full_report();
        report.record_count = 0;
        report.time = Err(BikeshareError::empty_dataset("time"));
        report.station = Err(BikeshareError::empty_dataset("station"));
        report.duration = Err(BikeshareError::empty_dataset("duration"));

        let text = rendered(&report);

        assert_eq!(text.matches("No data for this selection.").count(), 3);
        assert!(!text.contains("mins:secs"));
    }

    #[test]
    fn test_missing_demographics_are_named() {
        let mut report = full_report();
        report.selection.city = "Washington".to_string();
        report.user = user_without_demographics();

        let text = rendered(&report);

        assert!(text.contains("Sorry, Washington does not have gender data..."));
        assert!(text.contains("Sorry, Washington does not have birth year data..."));
        assert!(text.contains("Subscriber"));
    }

    #[test]
    fn test_blank_gender_column_has_no_ratio_heading() {
        let mut report = full_report();
        report.user.gender_counts = OptionalStat::NoData;
        report.user.gender_ratio = OptionalStat::NoData;

        let text = rendered(&report);

        assert!(text.contains("No gender data for this selection."));
        assert!(!text.contains("Gender ratio (percentage):"));
        assert!(!text.contains("does not have gender data"));
    }

    #[test]
    fn test_unrecoverable_section_error_is_shown() {
        let mut report = full_report();
        report.duration = Err(BikeshareError::malformed(
            None,
            "total trip duration exceeds the supported range",
        ));

        let text = rendered(&report);

        assert!(text.contains(
            "Error: Malformed data: total trip duration exceeds the supported range"
        ));
    }
}
