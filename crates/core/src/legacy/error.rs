//! Legacy snapshot error types.

use asset_manager_shared::AppError;
use thiserror::Error;

use crate::storage::StorageError;
use crate::store::StoreError;

/// Errors raised while reading or importing snapshots.
#[derive(Debug, Error)]
pub enum LegacyError {
    /// The CSV is malformed.
    #[error("malformed snapshot CSV: {0}")]
    Csv(String),

    /// A required header is absent.
    #[error("snapshot is missing the '{0}' column")]
    MissingColumn(&'static str),

    /// Writing the records failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Listing or reading snapshot objects failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<csv::Error> for LegacyError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<LegacyError> for AppError {
    fn from(err: LegacyError) -> Self {
        match err {
            LegacyError::Csv(_) | LegacyError::MissingColumn(_) => {
                Self::Validation(err.to_string())
            }
            LegacyError::Store(e) => e.into(),
            LegacyError::Storage(e) => e.into(),
        }
    }
}
