use std::path::PathBuf;

use thiserror::Error;

/// Rejected user input. Raising one of these never touches the stored state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("item name is required")]
    EmptyItem,
    #[error("'{0}' is not a number")]
    InvalidAmount(String),
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
    #[error("'{0}' is too large (maximum is 1,000,000,000,000)")]
    AmountTooLarge(String),
    #[error("'{0}' has more than two decimal places")]
    TooManyDecimals(String),
    #[error("unknown category '{0}'")]
    InvalidCategory(String),
    #[error("'{0}' is not a valid budget limit")]
    InvalidLimit(String),
    #[error("no expense at position {index} (have {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("expense at position {index} changed since it was opened")]
    StaleEdit { index: usize },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("failed to encode budget data: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// True when the operation was rejected before any state changed.
    /// Any other error means memory was updated but the file was not.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
