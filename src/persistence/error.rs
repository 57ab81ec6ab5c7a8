//! Error types raised by snapshot stores.

use thiserror::Error;

/// Storage failures. Malformed snapshot content is not an error: restore
/// falls back to defaults field by field.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("snapshot store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bincode error: {0}")]
    Bincode(String),
}

pub type Result<T> = std::result::Result<T, PersistenceError>;
