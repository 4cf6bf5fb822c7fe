//! Error types for time-grid layout.

use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error;

/// Errors raised by the layout core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid time range: start {start} is not before end {end}")]
    InvalidRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Interval falls outside the grid: {0}")]
    OutOfRange(String),

    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),

    #[error("Invalid grid configuration: {0}")]
    InvalidConfig(String),

    #[error("Occurrence title cannot be empty")]
    EmptyTitle,

    #[error("Local time {0} does not exist in the grid time zone")]
    NonexistentLocalTime(NaiveDateTime),

    #[error("No occurrence with id {0}")]
    UnknownOccurrence(i64),
}

/// Result type alias for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;
