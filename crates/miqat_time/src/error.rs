//! Error types for calendar and clock handling.

use thiserror::Error;

/// Errors from date validation, era checks, and clock parsing.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Year outside the supported astronomical era [1901, 2199].
    #[error("year {year} is outside the supported range 1901..=2199")]
    OutOfRange { year: i32 },
    /// Calendar date that does not exist (month 13, Feb 30, ...).
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// UTC offset outside [-12:00, +14:00].
    #[error("UTC offset of {minutes} minutes is outside -12:00..=+14:00")]
    InvalidOffset { minutes: i32 },
    /// Clock time outside 00:00..=23:59.
    #[error("invalid clock time: {0}")]
    InvalidClockTime(String),
    /// Text could not be parsed as a date or time.
    #[error("parse error: {0}")]
    Parse(String),
}
