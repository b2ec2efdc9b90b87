//! Error types raised by repository implementations.

use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("save repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("corrupted data: {0}")]
    CorruptedData(String),

    #[error("invalid save slot {0:?}")]
    InvalidSlot(String),

    /// Text formats are line-based; some fields must also be single words.
    #[error("{field} {value:?} cannot be stored in a text record")]
    UnencodableField { field: &'static str, value: String },
}

impl RepositoryError {
    pub(crate) fn corrupted(reason: impl Into<String>) -> Self {
        Self::CorruptedData(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
