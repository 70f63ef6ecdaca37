//! Filter selection types
//!
//! A selection is the validated triple (city, month filter, day filter) handed to
//! the analysis pipeline. Parsing is exact and case-sensitive against the
//! canonical names; "all" disables filtering on that dimension.

use super::error::{BikeshareError, Result};
use super::trip::{month_name, weekday_name};
use chrono::{Month, Weekday};
use std::fmt;
use std::str::FromStr;

/// Keyword that disables filtering on a dimension
pub const ALL: &str = "all";

/// Months present in the published datasets, in menu order
pub const SELECTABLE_MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

/// Days of the week, in menu order
pub const SELECTABLE_DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Month dimension of a selection
///
/// Only January through June are representable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MonthFilter {
    #[default]
    All,
    Only(Month),
}

impl MonthFilter {
    /// Whether a record's month passes this filter
    pub fn matches(&self, month: Month) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(selected) => *selected == month,
        }
    }
}

impl FromStr for MonthFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self> {
        if s == ALL {
            return Ok(MonthFilter::All);
        }
        SELECTABLE_MONTHS
            .iter()
            .find(|month| month_name(**month) == s)
            .map(|month| MonthFilter::Only(*month))
            .ok_or_else(|| BikeshareError::invalid_selection("month", s))
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str(ALL),
            MonthFilter::Only(month) => f.write_str(month_name(*month)),
        }
    }
}

/// Day-of-week dimension of a selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DayFilter {
    #[default]
    All,
    Only(Weekday),
}

impl DayFilter {
    /// Whether a record's weekday passes this filter
    pub fn matches(&self, day: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(selected) => *selected == day,
        }
    }
}

impl FromStr for DayFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self> {
        if s == ALL {
            return Ok(DayFilter::All);
        }
        SELECTABLE_DAYS
            .iter()
            .find(|day| weekday_name(**day) == s)
            .map(|day| DayFilter::Only(*day))
            .ok_or_else(|| BikeshareError::invalid_selection("day", s))
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str(ALL),
            DayFilter::Only(day) => f.write_str(weekday_name(*day)),
        }
    }
}

/// Validated analysis selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// City catalog key, e.g. "Chicago"
    pub city: String,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl Selection {
    pub fn new(city: impl Into<String>, month: MonthFilter, day: DayFilter) -> Self {
        Selection {
            city: city.into(),
            month,
            day,
        }
    }

    /// Parse month and day from their canonical names
    pub fn parse(city: &str, month: &str, day: &str) -> Result<Self> {
        Ok(Selection::new(city, month.parse()?, day.parse()?))
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "city = {}, month = {}, and day = {}",
            self.city, self.month, self.day
        )
    }
}
