//! Error types for repcal.

use thiserror::Error;

/// Errors that can occur while building or expanding recurrences.
#[derive(Error, Debug)]
pub enum RepcalError {
    #[error("Invalid date '{0}'. Expected a real YYYY-MM-DD date")]
    InvalidDate(String),

    #[error("Invalid repeat interval {0}. Interval must be a positive integer")]
    InvalidInterval(i64),

    #[error("Unknown repeat type '{0}'. Expected one of: none, daily, weekly, monthly, yearly")]
    InvalidRepeatUnit(String),

    #[error("Repeating event '{0}' has no end date")]
    MissingEndDate(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for repcal operations.
pub type RepcalResult<T> = Result<T, RepcalError>;
