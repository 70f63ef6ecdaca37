//! Analysis pipeline
//!
//! This module runs one analysis pass: Loader -> Filter -> Aggregation. Each
//! stage is a pure transformation of the previous stage's output, and the pass
//! owns its filtered table until the caller drops it.
//!
//! # Error Handling
//!
//! Fatal errors (unknown city, missing or malformed source) are returned from
//! `run`. An empty selection is not an error: the report carries `EmptyDataset`
//! in the affected sections.

use crate::config::CityCatalog;
use crate::core::{analyze, RecordTable};
use crate::io::csv_format::write_preview;
use crate::io::report_format::write_report;
use crate::io::RecordLoader;
use crate::types::{Result, Selection, StatisticsReport};
use std::io::Write;
use tracing::info_span;

/// Result of one analysis pass
#[derive(Debug, Clone)]
pub struct AnalysisPass {
    pub report: StatisticsReport,
    /// Filtered view the report was computed over
    pub table: RecordTable,
}

impl AnalysisPass {
    /// Write one page of raw rows from the filtered view
    pub fn write_page(
        &self,
        page: usize,
        output: &mut dyn Write,
    ) -> std::result::Result<(), String> {
        write_preview(
            self.table.page(page),
            self.table.schema(),
            self.table.source_columns(),
            output,
        )
    }
}

/// Load -> filter -> aggregate for a selection
///
/// # Examples
///
/// ```no_run
/// use bikeshare_stats::config::CityCatalog;
/// use bikeshare_stats::pipeline::AnalysisPipeline;
/// use bikeshare_stats::types::Selection;
/// use std::path::Path;
///
/// let pipeline = AnalysisPipeline::new(CityCatalog::with_data_dir(Path::new("data")));
/// let selection = Selection::parse("Chicago", "March", "all").unwrap();
/// let mut output = std::io::stdout();
///
/// pipeline.process(&selection, &mut output).expect("Analysis failed");
/// ```
#[derive(Debug, Clone)]
pub struct AnalysisPipeline {
    loader: RecordLoader,
}

impl AnalysisPipeline {
    pub fn new(catalog: CityCatalog) -> Self {
        AnalysisPipeline {
            loader: RecordLoader::new(catalog),
        }
    }

    pub fn catalog(&self) -> &CityCatalog {
        self.loader.catalog()
    }

    /// Run one analysis pass
    ///
    /// # Errors
    ///
    /// Returns an error if the city is unknown or its source cannot be loaded.
    pub fn run(&self, selection: &Selection) -> Result<AnalysisPass> {
        let span = info_span!(
            "analysis",
            city = %selection.city,
            month = %selection.month,
            day = %selection.day
        );
        let _entered = span.enter();

        let table = self
            .loader
            .load(&selection.city)?
            .filtered(selection.month, selection.day);
        let report = analyze(selection, &table);

        Ok(AnalysisPass { report, table })
    }

    /// Run a pass and write its report to `output`
    ///
    /// # Returns
    ///
    /// The pass, so the caller can page through the filtered rows.
    pub fn process(
        &self,
        selection: &Selection,
        output: &mut dyn Write,
    ) -> std::result::Result<AnalysisPass, String> {
        let pass = self.run(selection).map_err(|e| e.to_string())?;
        write_report(&pass.report, output)?;
        Ok(pass)
    }
}
