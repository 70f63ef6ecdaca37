//! Error types for the bikeshare statistics engine
//!
//! This module defines all error types that can occur while loading, filtering
//! and aggregating trip records.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Configuration Errors**: Unknown city, invalid filter selection
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **Data Errors**: Unparseable timestamps, missing columns, malformed rows
//! - **Aggregation Errors**: Statistics requested over an empty filtered view

use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, BikeshareError>;

/// Main error type for the bikeshare statistics engine
///
/// Fatal variants (`UnknownCity`, `FileNotFound`, `Io`, `MalformedData`) abort the
/// analysis pass. `EmptyDataset` is recoverable: it is carried inside the
/// statistics report so the presentation layer can say "no data for this selection".
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BikeshareError {
    /// City identifier is not part of the city catalog
    ///
    /// Raised before any file is opened.
    #[error("Unknown city: {city}")]
    UnknownCity {
        /// The city name that was requested
        city: String,
    },

    /// Record source not found at the configured path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading the record source or writing output
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// Record source could not be parsed
    ///
    /// Loading is fail-fast: a single malformed row aborts the whole load.
    #[error("Malformed data{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    MalformedData {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the problem
        message: String,
    },

    /// A statistic was requested over a filtered view with no records
    #[error("No data for this selection ({statistic} statistics)")]
    EmptyDataset {
        /// Statistic group that could not be computed
        statistic: String,
    },

    /// Month or day filter value outside the canonical name set
    #[error("Invalid {field} selection '{value}'")]
    InvalidSelection {
        /// Which filter dimension was invalid ("month" or "day")
        field: String,
        /// The rejected value
        value: String,
    },
}

impl From<std::io::Error> for BikeshareError {
    fn from(error: std::io::Error) -> Self {
        BikeshareError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for BikeshareError {
    fn from(error: csv::Error) -> Self {
        if error.is_io_error() {
            return BikeshareError::Io {
                message: error.to_string(),
            };
        }

        // Extract line number if available
        let line = error.position().map(|pos| pos.line());

        BikeshareError::MalformedData {
            line,
            message: error.to_string(),
        }
    }
}

impl BikeshareError {
    /// Create an UnknownCity error
    pub fn unknown_city(city: &str) -> Self {
        BikeshareError::UnknownCity {
            city: city.to_string(),
        }
    }

    /// Create a MalformedData error
    pub fn malformed(line: Option<u64>, message: impl Into<String>) -> Self {
        BikeshareError::MalformedData {
            line,
            message: message.into(),
        }
    }

    /// Create an EmptyDataset error
    pub fn empty_dataset(statistic: &str) -> Self {
        BikeshareError::EmptyDataset {
            statistic: statistic.to_string(),
        }
    }

    /// Create an InvalidSelection error
    pub fn invalid_selection(field: &str, value: &str) -> Self {
        BikeshareError::InvalidSelection {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// Whether the presentation layer can report this error and carry on
    pub fn is_recoverable(&self) -> bool {
        matches!(self, BikeshareError::EmptyDataset { .. })
    }
}
