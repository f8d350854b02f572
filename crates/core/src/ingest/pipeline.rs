//! Ingestion pipeline.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use asset_manager_shared::types::RecordType;

use super::error::IngestError;
use super::layout::SheetLayout;
use super::source::TableSource;
use crate::builder::{BuildOutcome, RecordBuilder, SkippedRow};
use crate::store::RecordStore;
use crate::table::extract_section;

/// Result of one ingestion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    /// Date stamped on every record.
    pub date: NaiveDate,
    /// Records built from the grid.
    pub parsed: usize,
    /// Rows dropped because their amount could not be parsed.
    pub skipped: Vec<SkippedRow>,
    /// Distinct records written to the store.
    pub saved: u64,
}

/// Builds records for both sections of `grid`.
///
/// The first `layout.header_rows` rows are titles and are dropped before
/// extraction. Assets come before liabilities in the output.
#[must_use]
pub fn parse_grid(grid: &[Vec<String>], layout: &SheetLayout, date: NaiveDate) -> BuildOutcome {
    let body = grid.get(layout.header_rows..).unwrap_or_default();

    let mut outcome = RecordBuilder::new(RecordType::Asset, date)
        .build_section(&extract_section(body, layout.assets));
    outcome.merge(
        RecordBuilder::new(RecordType::Liability, date)
            .build_section(&extract_section(body, layout.liabilities)),
    );
    outcome
}

/// Drives one fetch, parse, and save run.
pub struct IngestionPipeline<'a> {
    source: &'a dyn TableSource,
    store: &'a dyn RecordStore,
    layout: SheetLayout,
}

impl<'a> IngestionPipeline<'a> {
    /// Creates a pipeline over a source and a store.
    #[must_use]
    pub fn new(source: &'a dyn TableSource, store: &'a dyn RecordStore, layout: SheetLayout) -> Self {
        Self {
            source,
            store,
            layout,
        }
    }

    /// Runs ingestion for `date`.
    ///
    /// An empty grid saves nothing and does not touch the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails or the store rejects the batch.
    /// Unparsable rows are not errors.
    pub async fn run(&self, date: NaiveDate) -> Result<IngestReport, IngestError> {
        info!(%date, "Fetching table");
        let grid = self.source.fetch_grid().await?;

        if grid.is_empty() {
            info!("No data found in the table source");
            return Ok(IngestReport {
                date,
                parsed: 0,
                skipped: Vec::new(),
                saved: 0,
            });
        }

        let outcome = parse_grid(&grid, &self.layout, date);
        for record in &outcome.records {
            debug!(
                record_type = %record.record_type,
                description = %record.description,
                amount = %record.amount,
                accessible = record.accessible,
                "Parsed record"
            );
        }
        info!(
            parsed = outcome.parsed(),
            skipped = outcome.skipped_count(),
            "Parsed table"
        );

        let saved = self.store.upsert(&outcome.records).await?;
        info!(saved, "Saved records");

        Ok(IngestReport {
            date,
            parsed: outcome.parsed(),
            skipped: outcome.skipped,
            saved,
        })
    }
}
