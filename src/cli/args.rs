use crate::config::CityCatalog;
use crate::types::{Result, Selection};
use clap::Parser;
use std::path::PathBuf;

/// Explore US bikeshare trip data
#[derive(Parser, Debug)]
#[command(name = "bikeshare-stats")]
#[command(about = "Compute travel time, station, duration and user statistics for US bikeshare data", long_about = None)]
pub struct CliArgs {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Directory containing the city CSV files"
    )]
    pub data_dir: PathBuf,

    /// City to analyze; omit to choose from a menu
    #[arg(
        long = "city",
        value_name = "CITY",
        help = "City to analyze: 'Chicago', 'New York City' or 'Washington'"
    )]
    pub city: Option<String>,

    /// Month filter
    #[arg(
        long = "month",
        value_name = "MONTH",
        default_value = "all",
        help = "Month to filter by (January-June), or 'all'"
    )]
    pub month: String,

    /// Day-of-week filter
    #[arg(
        long = "day",
        value_name = "DAY",
        default_value = "all",
        help = "Day of week to filter by (Monday-Sunday), or 'all'"
    )]
    pub day: String,

    /// Raw-row pages to print after the report (non-interactive mode)
    #[arg(
        long = "raw-pages",
        value_name = "PAGES",
        default_value_t = 0,
        help = "Number of 5-row pages of raw data to print after the report"
    )]
    pub raw_pages: usize,

    /// Use the interactive menus even when --city is given
    #[arg(long = "interactive", help = "Select city, month and day from menus")]
    pub interactive: bool,
}

impl CliArgs {
    /// Build the city catalog from the data directory
    pub fn to_catalog(&self) -> CityCatalog {
        CityCatalog::with_data_dir(&self.data_dir)
    }

    /// Whether selections come from the menu prompts
    pub fn is_interactive(&self) -> bool {
        self.interactive || self.city.is_none()
    }

    /// Selection given on the command line
    ///
    /// Returns `None` in interactive mode.
    ///
    /// # Errors
    ///
    /// `InvalidSelection` if the month or day is not a canonical name.
    pub fn to_selection(&self) -> Option<Result<Selection>> {
        if self.is_interactive() {
            return None;
        }
        self.city
            .as_deref()
            .map(|city| Selection::parse(city, &self.month, &self.day))
    }
}
