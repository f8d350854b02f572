//! In-memory record store.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tracing::debug;

use asset_manager_shared::types::{DailySummary, Record, RecordKey};

use super::RecordStore;
use super::batch::{collapse_batch, validate_record};
use super::error::StoreError;
use crate::aggregation::AggregationEngine;

#[derive(Debug, Default)]
struct State {
    rows: BTreeMap<RecordKey, Record>,
    next_id: i64,
}

/// Record store held in process memory.
///
/// Behaves like the database store: ids and `created_at` are assigned on
/// first insert and the same constraints are checked before any write.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    state: Mutex<State>,
}

impl MemoryRecordStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if a writer panicked.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.rows.len())
    }

    /// Returns true when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if a writer panicked.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.lock()?.rows.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, StoreError> {
        self.state
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
    }

    fn snapshot(&self) -> Result<Vec<Record>, StoreError> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    fn engine(&self) -> Result<AggregationEngine, StoreError> {
        AggregationEngine::from_records(&self.snapshot()?)
            .map_err(|e| StoreError::Query(e.to_string()))
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn upsert(&self, records: &[Record]) -> Result<u64, StoreError> {
        if records.is_empty() {
            return Ok(0);
        }

        let batch = collapse_batch(records);
        for record in &batch {
            validate_record(record)?;
        }

        let written = u64::try_from(batch.len()).unwrap_or(u64::MAX);
        let mut state = self.lock()?;
        let now = Utc::now();
        for record in batch {
            if let Some(existing) = state.rows.get_mut(&record.key()) {
                existing.amount = record.amount;
                existing.accessible = record.accessible;
                continue;
            }

            state.next_id += 1;
            let stored = Record {
                id: Some(state.next_id),
                created_at: Some(now),
                ..record
            };
            state.rows.insert(stored.key(), stored);
        }

        debug!(written, "Upserted records in memory");
        Ok(written)
    }

    async fn get_all(&self) -> Result<Vec<Record>, StoreError> {
        self.snapshot()
    }

    async fn get_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Record>, StoreError> {
        if start > end {
            return Ok(Vec::new());
        }
        let state = self.lock()?;
        Ok(state
            .rows
            .values()
            .filter(|r| r.date >= start && r.date <= end)
            .cloned()
            .collect())
    }

    async fn get_summary_by_date(&self) -> Result<Vec<DailySummary>, StoreError> {
        Ok(self.engine()?.daily_summaries())
    }

    async fn get_inaccessible_assets_by_date(&self) -> Result<Vec<DailySummary>, StoreError> {
        Ok(self.engine()?.inaccessible_summaries())
    }
}
