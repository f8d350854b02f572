//! Dated asset and liability records.
//!
//! CRITICAL: Amounts are `rust_decimal::Decimal`, never floating-point.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a record is something owned or something owed.
///
/// The derived ordering places `Asset` before `Liability`, matching the
/// alphabetical ordering of their stored text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    /// Something owned.
    Asset,
    /// Something owed.
    Liability,
}

impl RecordType {
    /// Returns the stored text form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asset => "asset",
            Self::Liability => "liability",
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text is not a known record type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown record type: {0}")]
pub struct ParseRecordTypeError(pub String);

impl std::str::FromStr for RecordType {
    type Err = ParseRecordTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asset" => Ok(Self::Asset),
            "liability" => Ok(Self::Liability),
            _ => Err(ParseRecordTypeError(s.to_string())),
        }
    }
}

/// Natural key of a record: at most one stored row exists per key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordKey {
    /// Observation date.
    pub date: NaiveDate,
    /// Asset or liability.
    pub record_type: RecordType,
    /// Trimmed label.
    pub description: String,
}

/// A single financial line item observed on a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Surrogate identifier assigned by the store.
    pub id: Option<i64>,
    /// Observation date.
    pub date: NaiveDate,
    /// Asset or liability.
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Non-empty trimmed label.
    pub description: String,
    /// Non-negative amount.
    pub amount: Decimal,
    /// Whether an asset is readily liquid. Always true for liabilities.
    pub accessible: bool,
    /// Set by the store on first insert.
    pub created_at: Option<DateTime<Utc>>,
}

impl Record {
    /// Creates an unpersisted record.
    ///
    /// The description is trimmed and liabilities are always accessible.
    #[must_use]
    pub fn new(
        date: NaiveDate,
        record_type: RecordType,
        description: impl Into<String>,
        amount: Decimal,
        accessible: bool,
    ) -> Self {
        Self {
            id: None,
            date,
            record_type,
            description: description.into().trim().to_string(),
            amount,
            accessible: accessible || record_type == RecordType::Liability,
            created_at: None,
        }
    }

    /// Returns the natural key of this record.
    #[must_use]
    pub fn key(&self) -> RecordKey {
        RecordKey {
            date: self.date,
            record_type: self.record_type,
            description: self.description.clone(),
        }
    }

    /// Returns true for assets flagged as not readily liquid.
    #[must_use]
    pub fn is_inaccessible_asset(&self) -> bool {
        self.record_type == RecordType::Asset && !self.accessible
    }
}

/// Sum of amounts for one (date, type) pair. Always computed, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Observation date.
    pub date: NaiveDate,
    /// Asset or liability.
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Sum of amounts.
    pub total_amount: Decimal,
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
