//! Ingestion error types.

use asset_manager_shared::AppError;
use thiserror::Error;

use crate::store::StoreError;

/// Errors raised by a table source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// Local file could not be read.
    #[error("failed to read table source: {0}")]
    Io(String),

    /// Remote request failed or returned an error status.
    #[error("table source request failed: {0}")]
    Http(String),

    /// Payload is not a grid of cells.
    #[error("failed to decode table source payload: {0}")]
    Decode(String),
}

/// Errors that abort an ingestion run.
///
/// Bad rows are never errors; they are reported in the run's skipped list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    /// Fetching the grid failed.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Persisting the records failed. Nothing was committed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<SourceError> for AppError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Io(_) | SourceError::Decode(_) => Self::Validation(err.to_string()),
            SourceError::Http(_) => Self::ExternalService(err.to_string()),
        }
    }
}

impl From<IngestError> for AppError {
    fn from(err: IngestError) -> Self {
        match err {
            IngestError::Source(e) => e.into(),
            IngestError::Store(e) => e.into(),
        }
    }
}
