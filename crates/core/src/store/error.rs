//! Record store error types.

use asset_manager_shared::AppError;
use thiserror::Error;

/// Errors that can occur while reading or writing records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("record store unavailable: {0}")]
    Unavailable(String),

    /// A write violated a uniqueness or check constraint.
    #[error("record store constraint violation: {0}")]
    ConstraintViolation(String),

    /// Any other query failure.
    #[error("record store query failed: {0}")]
    Query(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::Database(err.to_string())
    }
}
