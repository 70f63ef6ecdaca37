//! Record store loader
//!
//! Reads a city's trip records into an in-memory [`RecordTable`].
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Design
//!
//! The RecordLoader owns an immutable [`CityCatalog`] handed in at construction.
//! Each `load` call resolves the city, re-reads its source from disk and parses
//! every row. Nothing is cached between calls.
//!
//! ```no_run
//! use bikeshare_stats::config::CityCatalog;
//! use bikeshare_stats::io::RecordLoader;
//! use std::path::Path;
//!
//! let loader = RecordLoader::new(CityCatalog::with_data_dir(Path::new("data")));
//! let table = loader.load("Chicago").unwrap();
//! println!("Loaded {} trips", table.len());
//! ```
//!
//! # Error Handling
//!
//! - Unknown city is reported before any file is opened
//! - Missing files are reported as `FileNotFound`
//! - Loading is fail-fast: the first malformed row aborts the load with its line number

use crate::config::CityCatalog;
use crate::core::RecordTable;
use crate::io::csv_format::{convert_csv_record, index_column_offset, read_schema, CsvTripRecord};
use crate::types::{BikeshareError, Result};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::{debug, info};

/// Loads trip records for catalogued cities
#[derive(Debug, Clone)]
pub struct RecordLoader {
    catalog: CityCatalog,
}

impl RecordLoader {
    pub fn new(catalog: CityCatalog) -> Self {
        RecordLoader { catalog }
    }

    pub fn catalog(&self) -> &CityCatalog {
        &self.catalog
    }

    /// Load every trip record for a city
    ///
    /// # Errors
    ///
    /// - `UnknownCity` if `city` is not a catalog key
    /// - `FileNotFound` / `Io` if the source cannot be read
    /// - `MalformedData` if the header or any row cannot be parsed
    pub fn load(&self, city: &str) -> Result<RecordTable> {
        let path = self.catalog.path_for(city)?;
        let table = read_table_file(path)?;

        info!(
            city,
            path = %path.display(),
            records = table.len(),
            gender = table.schema().has_gender,
            birth_year = table.schema().has_birth_year,
            "loaded trip records"
        );

        Ok(table)
    }
}

/// Read a trip-record CSV file into a table
pub fn read_table_file(path: &Path) -> Result<RecordTable> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => BikeshareError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => BikeshareError::Io {
            message: format!("Failed to open file '{}': {}", path.display(), e),
        },
    })?;

    read_table(file)
}

/// Read trip records from any CSV source
///
/// The reader is configured to:
/// - Trim whitespace around all fields
/// - Require a header row
/// - Reject rows whose field count differs from the header
pub fn read_table<R: Read>(source: R) -> Result<RecordTable> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .has_headers(true)
        .buffer_capacity(8 * 1024)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let schema = read_schema(&headers)?;
    let offset = index_column_offset(&headers);
    let source_columns = headers.iter().skip(offset).map(str::to_string).collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let line = row.position().map(|pos| pos.line());

        let csv_record: CsvTripRecord = row
            .deserialize(Some(&headers))
            .map_err(|e| BikeshareError::malformed(line, e.to_string()))?;
        let record =
            convert_csv_record(csv_record).map_err(|e| BikeshareError::malformed(line, e))?;

        let source_row = row.iter().skip(offset).map(str::to_string).collect();
        records.push(record.with_source_row(source_row));
    }

    debug!(records = records.len(), "parsed trip rows");

    Ok(RecordTable::new(schema, records).with_source_columns(source_columns))
}
