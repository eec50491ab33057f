//! Calendar and clock primitives for the miqat prayer-time engine.
//!
//! This crate provides:
//! - Julian Date ↔ Gregorian calendar conversions
//! - `CivilDate`, a validated calendar date with day stepping
//! - `ClockTime`, the canonical minutes-since-midnight time of day
//! - `UtcOffset` and `LocalDateTime` for caller-supplied wall time

pub mod clock;
pub mod date;
pub mod error;
pub mod julian;

pub use clock::{ClockTime, LocalDateTime, MINUTES_PER_DAY, UtcOffset};
pub use date::{
    CivilDate, MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR, days_in_month, is_leap_year,
    is_supported_year,
};
pub use error::TimeError;
pub use julian::{J2000_JD, calendar_to_jd, jd_to_calendar};
