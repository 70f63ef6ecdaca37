//! In-memory record table
//!
//! A RecordTable owns the trip records of one analysis pass together with the
//! optional-column schema and source header detected at load time. Tables are
//! never mutated in place; filtering produces a new table.

use crate::types::{TableSchema, TripRecord};

/// Rows per raw-data preview page
pub const PAGE_SIZE: usize = 5;

/// Trip records of one city, possibly filtered
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordTable {
    schema: TableSchema,
    source_columns: Vec<String>,
    records: Vec<TripRecord>,
}

impl RecordTable {
    pub fn new(schema: TableSchema, records: Vec<TripRecord>) -> Self {
        RecordTable {
            schema,
            source_columns: Vec::new(),
            records,
        }
    }

    /// Attach the source header (without the unnamed index column)
    pub fn with_source_columns(mut self, source_columns: Vec<String>) -> Self {
        self.source_columns = source_columns;
        self
    }

    pub fn schema(&self) -> TableSchema {
        self.schema
    }

    /// Source header, empty for tables built in code
    pub fn source_columns(&self) -> &[String] {
        &self.source_columns
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows `[page * 5, page * 5 + 5)` clipped to the table
    ///
    /// A page past the end yields an empty slice.
    pub fn page(&self, page: usize) -> &[TripRecord] {
        let start = page.saturating_mul(PAGE_SIZE).min(self.records.len());
        let end = start.saturating_add(PAGE_SIZE).min(self.records.len());
        &self.records[start..end]
    }

    /// Number of preview pages needed to show every row
    pub fn page_count(&self) -> usize {
        self.records.len().div_ceil(PAGE_SIZE)
    }

    /// Keep only records matching `predicate`, preserving order and schema
    pub fn retain_matching<F>(&self, predicate: F) -> RecordTable
    where
        F: Fn(&TripRecord) -> bool,
    {
        RecordTable {
            schema: self.schema,
            source_columns: self.source_columns.clone(),
            records: self
                .records
                .iter()
                .filter(|record| predicate(record))
                .cloned()
                .collect(),
        }
    }
}
