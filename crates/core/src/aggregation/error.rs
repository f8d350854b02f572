//! Aggregation error types.

use asset_manager_shared::AppError;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while summing records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregationError {
    /// A running total exceeded the decimal range.
    #[error("total for {date} exceeds the representable amount range")]
    Overflow {
        /// Date whose total overflowed.
        date: NaiveDate,
    },
}

impl From<AggregationError> for AppError {
    fn from(err: AggregationError) -> Self {
        Self::Validation(err.to_string())
    }
}
