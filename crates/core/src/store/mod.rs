//! Record persistence.
//!
//! [`RecordStore`] is the seam between ingestion and the database. Every
//! implementation keeps at most one row per natural key
//! (date, type, description) and answers queries in
//! (date, type, description) order.
//!
//! - `batch` - in-batch key collapsing and constraint checks shared by stores
//! - `memory` - in-memory store for tests and dry runs

pub mod batch;
pub mod error;
pub mod memory;

use async_trait::async_trait;
use chrono::NaiveDate;

use asset_manager_shared::types::{DailySummary, Record};

pub use batch::{collapse_batch, validate_record};
pub use error::StoreError;
pub use memory::MemoryRecordStore;

/// Persistent collection of records keyed by (date, type, description).
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Inserts or updates `records` by natural key.
    ///
    /// On collision the amount and accessible flag are overwritten and the
    /// original `created_at` is kept. Duplicate keys inside one batch collapse
    /// to the last occurrence. The whole batch commits or nothing does.
    ///
    /// Returns the number of distinct keys written.
    async fn upsert(&self, records: &[Record]) -> Result<u64, StoreError>;

    /// Returns every record ordered by (date, type, description).
    async fn get_all(&self) -> Result<Vec<Record>, StoreError>;

    /// Returns records with `start <= date <= end`, in store order.
    ///
    /// An inverted range yields an empty list.
    async fn get_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Record>, StoreError>;

    /// Returns one summary per (date, type), ordered by (date, type).
    async fn get_summary_by_date(&self) -> Result<Vec<DailySummary>, StoreError>;

    /// Returns per-date totals of inaccessible assets, ordered by date.
    async fn get_inaccessible_assets_by_date(&self) -> Result<Vec<DailySummary>, StoreError>;
}
