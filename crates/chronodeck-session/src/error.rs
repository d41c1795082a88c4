//! Error types for chronodeck-session

use thiserror::Error;

/// Session error type
#[derive(Debug, Error)]
pub enum Error {
    /// Preference storage failed.
    #[error("Storage error: {0}")]
    Storage(#[from] chronodeck_db::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
