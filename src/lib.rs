//! Bikeshare Statistics Library
//! # Overview
//!
//! This library loads US bikeshare trip records for a city, filters them by month
//! and day of week, and computes descriptive statistics over the filtered view.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (TripRecord, Selection, StatisticsReport, errors)
//! - [`config`] - Immutable city catalog
//! - [`cli`] - CLI arguments parsing and selection collectors
//! - [`core`] - Analysis components:
//!   - [`core::table`] - In-memory record table and raw-row paging
//!   - [`core::filter`] - Month and day-of-week filtering
//!   - [`core::aggregator`] - Time, station, duration and user statistics
//! - [`io`] - CSV loading, raw-row preview and report rendering
//! - [`pipeline`] - One analysis pass: load, filter, aggregate
//!
//! # Statistic Groups
//!
//! - **Time**: most common month, day of week and start hour
//! - **Station**: most common start, end and start/end combination, top 5 combinations
//! - **Duration**: total and mean trip duration, estimated trip count
//! - **User**: user type counts; gender and birth year where the city supplies them
//!
//! # Missing Data
//!
//! Not every city records gender and birth year. Those statistics are reported as
//! [`types::OptionalStat::NotAvailable`] rather than zero, and statistics over an
//! empty selection carry [`types::BikeshareError::EmptyDataset`].

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use config::CityCatalog;
pub use crate::core::{filter, RecordTable};
pub use io::RecordLoader;
pub use pipeline::{AnalysisPass, AnalysisPipeline};
pub use types::{
    BikeshareError, DayFilter, MonthFilter, OptionalStat, Selection, StatisticsReport,
    TableSchema, TripRecord,
};
