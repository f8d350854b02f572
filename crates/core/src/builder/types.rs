//! Record builder output types.

use serde::Serialize;

use asset_manager_shared::types::{Record, RecordType};

/// A data row that was dropped during building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// Section the row came from.
    pub record_type: RecordType,
    /// Trimmed description of the row.
    pub description: String,
    /// Raw amount cell text.
    pub raw_amount: String,
    /// Why the row was dropped.
    pub reason: String,
}

/// Records built from one or more sections, plus the rows left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOutcome {
    /// Successfully built records, in row order.
    pub records: Vec<Record>,
    /// Rows skipped with a warning.
    pub skipped: Vec<SkippedRow>,
}

impl BuildOutcome {
    /// Appends another outcome to this one.
    pub fn merge(&mut self, other: Self) {
        self.records.extend(other.records);
        self.skipped.extend(other.skipped);
    }

    /// Number of records built.
    #[must_use]
    pub fn parsed(&self) -> usize {
        self.records.len()
    }

    /// Number of rows skipped.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}
