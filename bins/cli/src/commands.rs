//! Subcommand implementations.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{Local, NaiveDate};
use tracing::info;

use asset_manager_core::aggregation::AggregationEngine;
use asset_manager_core::ingest::{
    IngestReport, IngestionPipeline, JsonFileSource, SheetLayout, TableSource,
};
use asset_manager_core::legacy::LegacyImporter;
use asset_manager_core::storage::SnapshotStorage;
use asset_manager_core::store::{MemoryRecordStore, RecordStore};
use asset_manager_db::PgRecordStore;
use asset_manager_shared::{AppConfig, AppError};

use crate::sheets::SheetsSource;

/// How a successful command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Work was done.
    Done,
    /// Nothing to save or report.
    Empty,
}

async fn connect_store(config: &AppConfig) -> Result<PgRecordStore, AppError> {
    let db = asset_manager_db::connect(&config.database)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Connected to database");
    Ok(PgRecordStore::new(db))
}

/// Fetches the grid and saves records for `date` (today when unset).
///
/// With `grid` set the grid is read from a JSON file instead of the
/// spreadsheet API. With `dry_run` set records go to a throwaway in-memory
/// store.
pub async fn fetch(
    config: &AppConfig,
    grid: Option<PathBuf>,
    date: Option<NaiveDate>,
    dry_run: bool,
) -> anyhow::Result<Status> {
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let source: Box<dyn TableSource> = match grid {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(SheetsSource::from_config(&config.sheet)?),
    };
    let layout = SheetLayout::from(&config.sheet);

    let report = if dry_run {
        let store = MemoryRecordStore::new();
        run_pipeline(source.as_ref(), &store, layout, date).await?
    } else {
        let store = connect_store(config).await?;
        run_pipeline(source.as_ref(), &store, layout, date).await?
    };

    for skipped in &report.skipped {
        eprintln!(
            "Skipped {} '{}': {}",
            skipped.record_type, skipped.description, skipped.reason
        );
    }
    println!(
        "Parsed {} records for {} ({} skipped).",
        report.parsed,
        report.date,
        report.skipped.len()
    );

    if report.saved == 0 {
        eprintln!("No records saved.");
        return Ok(Status::Empty);
    }
    if dry_run {
        println!("Dry run: would save {} records.", report.saved);
    } else {
        println!("Successfully saved {} records.", report.saved);
    }
    Ok(Status::Done)
}

async fn run_pipeline(
    source: &dyn TableSource,
    store: &dyn RecordStore,
    layout: SheetLayout,
    date: NaiveDate,
) -> Result<IngestReport, AppError> {
    Ok(IngestionPipeline::new(source, store, layout).run(date).await?)
}

/// Writes report data as JSON to `output`, or stdout when unset.
pub async fn report(
    config: &AppConfig,
    output: Option<PathBuf>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> anyhow::Result<Status> {
    let store = connect_store(config).await?;
    let records = match (start, end) {
        (Some(start), Some(end)) => store.get_by_date_range(start, end).await,
        _ => store.get_all().await.map(|mut records| {
            records.retain(|r| start.is_none_or(|s| r.date >= s) && end.is_none_or(|e| r.date <= e));
            records
        }),
    }
    .map_err(AppError::from)?;

    if records.is_empty() {
        eprintln!("No records found in database.");
        return Ok(Status::Empty);
    }

    let data = AggregationEngine::from_records(&records)
        .map_err(AppError::from)?
        .report();
    let json = serde_json::to_string_pretty(&data)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    match output {
        Some(path) => {
            write_report(&path, &json)?;
            println!("Report generated: {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(Status::Done)
}

fn write_report(path: &Path, json: &str) -> anyhow::Result<()> {
    std::fs::write(path, json)
        .map_err(|e| AppError::Validation(e.to_string()))
        .with_context(|| format!("failed to write report to {}", path.display()))
}

/// Imports legacy CSV snapshots from the configured storage.
pub async fn import_legacy(config: &AppConfig) -> anyhow::Result<Status> {
    let provider = config.legacy.as_ref().ok_or_else(|| {
        AppError::Configuration("no legacy snapshot storage configured".to_string())
    })?;
    let storage = SnapshotStorage::from_provider(provider).map_err(AppError::from)?;
    info!(
        provider = storage.provider_name(),
        bucket = provider.bucket(),
        "Importing legacy snapshots"
    );

    let store = connect_store(config).await?;
    let summary = LegacyImporter::new(&storage, &store)
        .run()
        .await
        .map_err(AppError::from)?;

    println!("Yearly files: {}", summary.yearly);
    println!("Daily files: {}", summary.daily);
    println!("Total records migrated: {}", summary.total_records());
    Ok(Status::Done)
}
