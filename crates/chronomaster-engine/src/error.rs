//! Error types for date-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// Fewer than the five whitespace-separated tokens the grammar needs.
    #[error("Malformed input: expected at least 5 tokens, got {0}")]
    MalformedInput(usize),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid day: {0}")]
    InvalidDay(String),

    #[error("Invalid year: {0}")]
    InvalidYear(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Unsupported timezone: {0}")]
    UnknownTimezone(String),

    /// The grammar accepted it but the calendar does not (validate only).
    #[error("Invalid date components: {0}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
