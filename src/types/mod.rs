//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `trip`: Trip records and the optional-column schema
//! - `selection`: City/month/day filter selection
//! - `report`: Statistics report structures
//! - `error`: Error types for the statistics engine

pub mod error;
pub mod report;
pub mod selection;
pub mod trip;

pub use error::{BikeshareError, Result};
pub use report::{
    DurationStats, GenderShare, MinutesSeconds, OptionalStat, StationStats, StatisticsReport,
    TimeStats, UserStats, ValueCount,
};
pub use selection::{DayFilter, MonthFilter, Selection};
pub use trip::{month_name, weekday_name, TableSchema, TripRecord};
