//! Core analysis module
//!
//! This module contains the filtering and aggregation components:
//! - `table` - In-memory record table and raw-row paging
//! - `filter` - Month and day-of-week filtering
//! - `frequency` - Frequency counting with deterministic tie-breaking
//! - `aggregator` - Time, station, duration and user statistics

pub mod aggregator;
pub mod filter;
pub mod frequency;
pub mod table;

pub use aggregator::{
    analyze, compute_duration_stats, compute_station_stats, compute_time_stats,
    compute_user_stats,
};
pub use filter::filter;
pub use frequency::FrequencyCounter;
pub use table::{RecordTable, PAGE_SIZE};
