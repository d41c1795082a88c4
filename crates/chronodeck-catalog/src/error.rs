//! Error types for chronodeck-catalog

use thiserror::Error;

/// Catalog loading error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("Invalid period `{id}`: {reason}")]
    InvalidPeriod { id: String, reason: String },

    #[error("Duplicate period: {0}")]
    DuplicatePeriod(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
