//! Legacy snapshot importer.

use serde::Serialize;
use tracing::{error, info, warn};

use super::error::LegacyError;
use super::name::SnapshotName;
use super::reader::parse_snapshot;
use crate::storage::SnapshotStorage;
use crate::store::RecordStore;

/// Counters for one kind of snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FileStats {
    /// Files read and written successfully.
    pub files_processed: usize,
    /// Files that failed and were left out.
    pub files_failed: usize,
    /// Rows skipped inside processed files.
    pub rows_skipped: usize,
    /// Records written.
    pub records: u64,
}

impl std::fmt::Display for FileStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} imported, {} failed, {} rows skipped, {} records",
            self.files_processed, self.files_failed, self.rows_skipped, self.records
        )
    }
}

/// Outcome of a full import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Yearly snapshot counters.
    pub yearly: FileStats,
    /// Daily snapshot counters.
    pub daily: FileStats,
}

impl ImportSummary {
    /// Total records written.
    #[must_use]
    pub fn total_records(&self) -> u64 {
        self.yearly.records + self.daily.records
    }

    /// Total files that failed.
    #[must_use]
    pub fn total_failed(&self) -> usize {
        self.yearly.files_failed + self.daily.files_failed
    }
}

/// Copies snapshot objects into a record store.
///
/// Storage is only read, never modified.
pub struct LegacyImporter<'a> {
    storage: &'a SnapshotStorage,
    store: &'a dyn RecordStore,
}

impl<'a> LegacyImporter<'a> {
    /// Creates an importer.
    #[must_use]
    pub fn new(storage: &'a SnapshotStorage, store: &'a dyn RecordStore) -> Self {
        Self { storage, store }
    }

    /// Imports every recognised snapshot.
    ///
    /// Yearly files go first since they hold the older data, then daily
    /// files, each group in name order. Each file is written as one batch; a
    /// failing file is logged and counted and the import moves on.
    ///
    /// # Errors
    ///
    /// Returns an error only if the storage listing fails.
    pub async fn run(&self) -> Result<ImportSummary, LegacyError> {
        let mut snapshots: Vec<(String, SnapshotName)> = self
            .storage
            .list_names()
            .await?
            .into_iter()
            .filter_map(|name| SnapshotName::classify(&name).map(|kind| (name, kind)))
            .collect();
        snapshots.sort_by(|(a_name, a), (b_name, b)| {
            b.is_yearly().cmp(&a.is_yearly()).then_with(|| a_name.cmp(b_name))
        });

        let yearly_count = snapshots.iter().filter(|(_, kind)| kind.is_yearly()).count();
        info!(
            yearly = yearly_count,
            daily = snapshots.len() - yearly_count,
            "Found legacy snapshots"
        );

        let mut summary = ImportSummary::default();
        for (name, kind) in snapshots {
            let stats = if kind.is_yearly() {
                &mut summary.yearly
            } else {
                &mut summary.daily
            };

            match self.import_one(&name, kind).await {
                Ok((written, skipped)) => {
                    info!(file = %name, written, skipped, "Imported snapshot");
                    stats.files_processed += 1;
                    stats.rows_skipped += skipped;
                    stats.records += written;
                }
                Err(err) => {
                    error!(file = %name, error = %err, "Failed to import snapshot");
                    stats.files_failed += 1;
                }
            }
        }

        if summary.total_failed() > 0 {
            warn!(failed = summary.total_failed(), "Some snapshots were not imported");
        }
        Ok(summary)
    }

    async fn import_one(&self, name: &str, kind: SnapshotName) -> Result<(u64, usize), LegacyError> {
        let text = self.storage.read_to_string(name).await?;
        let rows = parse_snapshot(&text, kind.date_override())?;
        let written = self.store.upsert(&rows.records).await?;
        Ok((written, rows.skipped))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryRecordStore;
    use asset_manager_shared::config::StorageProvider;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn write(dir: &tempfile::TempDir, name: &str, contents: &str) {
        std::fs::write(dir.path().join(name), contents).unwrap();
    }

    #[tokio::test]
    async fn test_import_yearly_then_daily() {
        let dir = tempfile::tempdir().unwrap();
        write(
            &dir,
            "summaries_2023.csv",
            "Description,Amount,Type,Date\nSavings,100,asset,2023-06-01\nSavings,50,asset,2024-01-02\n",
        );
        // Same key as the yearly row for 2024-01-02; the daily file wins.
        write(
            &dir,
            "summaries_2024_01_02.csv",
            "Description,Amount,Type\nSavings,75,asset\nCard,10,liability\n",
        );
        write(&dir, "summaries_2024_01_03.csv", "Description,Type\nBroken,asset\n");
        write(&dir, "notes.txt", "ignored");

        let storage = SnapshotStorage::from_provider(&StorageProvider::local_fs(dir.path())).unwrap();
        let store = MemoryRecordStore::new();
        let summary = LegacyImporter::new(&storage, &store).run().await.unwrap();

        assert_eq!(summary.yearly.files_processed, 1);
        assert_eq!(summary.yearly.records, 2);
        assert_eq!(summary.daily.files_processed, 1);
        assert_eq!(summary.daily.files_failed, 1);
        assert_eq!(summary.daily.records, 2);
        assert_eq!(summary.total_records(), 4);

        let all = store.get_all().await.unwrap();
        assert_eq!(all.len(), 3);
        let jan2 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let savings = all
            .iter()
            .find(|r| r.date == jan2 && r.description == "Savings")
            .unwrap();
        assert_eq!(savings.amount, dec!(75));
    }

    #[tokio::test]
    async fn test_import_empty_storage() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SnapshotStorage::from_provider(&StorageProvider::local_fs(dir.path())).unwrap();
        let store = MemoryRecordStore::new();
        let summary = LegacyImporter::new(&storage, &store).run().await.unwrap();
        assert_eq!(summary, ImportSummary::default());
    }

    #[tokio::test]
    async fn test_negative_amount_row_does_not_fail_file() {
        let dir = tempfile::tempdir().unwrap();
        write(
            &dir,
            "summaries_2020_01_01.csv",
            "Description,Amount,Type\nSavings,100,asset\nRefund,-5,asset\n",
        );

        let storage = SnapshotStorage::from_provider(&StorageProvider::local_fs(dir.path())).unwrap();
        let store = MemoryRecordStore::new();
        let summary = LegacyImporter::new(&storage, &store).run().await.unwrap();

        assert_eq!(summary.daily.files_processed, 1);
        assert_eq!(summary.daily.files_failed, 0);
        assert_eq!(summary.daily.rows_skipped, 1);
        assert_eq!(summary.daily.records, 1);
        assert_eq!(store.get_all().await.unwrap()[0].description, "Savings");
    }

    #[test]
    fn test_file_stats_display() {
        let stats = FileStats {
            files_processed: 3,
            files_failed: 1,
            rows_skipped: 4,
            records: 20,
        };
        assert_eq!(
            stats.to_string(),
            "3 imported, 1 failed, 4 rows skipped, 20 records"
        );
    }
}
