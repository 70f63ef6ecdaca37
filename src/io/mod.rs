//! I/O module
//!
//! Handles CSV parsing and report output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (header schema, record conversion, raw-row preview)
//! - `loader` - Record store loader backed by the city catalog
//! - `report_format` - Console rendering of statistics reports

pub mod csv_format;
pub mod loader;
pub mod report_format;

pub use csv_format::{convert_csv_record, write_preview, CsvTripRecord};
pub use loader::{read_table, read_table_file, RecordLoader};
pub use report_format::write_report;
