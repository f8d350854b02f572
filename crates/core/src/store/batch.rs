//! Batch preparation shared by store implementations.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use asset_manager_shared::types::{Record, RecordKey, RecordType};

use super::error::StoreError;

/// Collapses duplicate keys in `records`, keeping the last occurrence.
///
/// The result is in natural key order. A single SQL upsert statement must not
/// touch the same row twice, so both stores write the collapsed batch.
#[must_use]
pub fn collapse_batch(records: &[Record]) -> Vec<Record> {
    let mut by_key: BTreeMap<RecordKey, &Record> = BTreeMap::new();
    for record in records {
        by_key.insert(record.key(), record);
    }
    by_key.into_values().cloned().collect()
}

/// Checks the constraints the `records` table enforces.
///
/// # Errors
///
/// Returns `StoreError::ConstraintViolation` for a blank description, a
/// negative amount, or an inaccessible liability.
pub fn validate_record(record: &Record) -> Result<(), StoreError> {
    if record.description.trim().is_empty() {
        return Err(StoreError::ConstraintViolation(format!(
            "blank description for {} on {}",
            record.record_type, record.date
        )));
    }
    if record.amount < Decimal::ZERO {
        return Err(StoreError::ConstraintViolation(format!(
            "negative amount {} for '{}'",
            record.amount, record.description
        )));
    }
    if record.record_type == RecordType::Liability && !record.accessible {
        return Err(StoreError::ConstraintViolation(format!(
            "liability '{}' on {} must be accessible",
            record.description, record.date
        )));
    }
    Ok(())
}
