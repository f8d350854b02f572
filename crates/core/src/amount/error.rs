//! Amount parsing error types.

use asset_manager_shared::AppError;
use thiserror::Error;

/// Errors that can occur while parsing currency text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Text is neither a number nor the zero sentinel.
    #[error("can't parse amount '{0}'")]
    Unparsable(String),
}

impl From<AmountError> for AppError {
    fn from(err: AmountError) -> Self {
        Self::Validation(err.to_string())
    }
}
