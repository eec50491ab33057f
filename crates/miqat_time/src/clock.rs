//! Local wall-clock values: minute-resolution times of day, UTC offsets,
//! and date + time pairs.
//!
//! [`ClockTime`] is the canonical prayer-time representation: an integer
//! count of minutes since local midnight. Its only textual form is 24-hour
//! `HH:MM`, used by `Display`, `FromStr`, and serde alike.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::date::CivilDate;
use crate::error::TimeError;

/// Minutes in one civil day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Most negative accepted UTC offset (−12:00).
const MIN_OFFSET_MINUTES: i32 = -12 * 60;

/// Most positive accepted UTC offset (+14:00).
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Time of day with minute resolution, `00:00..=23:59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime {
    minutes: u16,
}

impl ClockTime {
    /// Midnight, 00:00.
    pub const MIDNIGHT: ClockTime = ClockTime { minutes: 0 };

    /// Create from minutes since midnight (0..=1439).
    pub fn from_minutes(minutes: u32) -> Result<Self, TimeError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(TimeError::InvalidClockTime(format!(
                "{minutes} minutes past midnight"
            )));
        }
        Ok(Self {
            minutes: minutes as u16,
        })
    }

    /// Create from hour (0..=23) and minute (0..=59).
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 || minute > 59 {
            return Err(TimeError::InvalidClockTime(format!("{hour}:{minute}")));
        }
        Self::from_minutes(hour * 60 + minute)
    }

    /// Minutes since local midnight.
    pub fn minutes(self) -> u32 {
        u32::from(self.minutes)
    }

    pub fn hour(self) -> u32 {
        self.minutes() / 60
    }

    pub fn minute(self) -> u32 {
        self.minutes() % 60
    }

    /// Minutes from `self` forward to `later` on the same day, or `None`
    /// when `later` is earlier.
    pub fn minutes_until(self, later: ClockTime) -> Option<u32> {
        later.minutes().checked_sub(self.minutes())
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = TimeError;

    /// Parse 24-hour `HH:MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some((h, m)) = s.split_once(':') else {
            return Err(TimeError::Parse(format!("expected HH:MM, got {s:?}")));
        };
        if h.len() != 2 || m.len() != 2 {
            return Err(TimeError::Parse(format!("expected HH:MM, got {s:?}")));
        }
        let hour: u32 = h
            .parse()
            .map_err(|_| TimeError::Parse(format!("invalid hour in {s:?}")))?;
        let minute: u32 = m
            .parse()
            .map_err(|_| TimeError::Parse(format!("invalid minute in {s:?}")))?;
        Self::new(hour, minute)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let text = String::deserialize(d)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Fixed offset of local clock time from UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UtcOffset {
    minutes: i32,
}

impl UtcOffset {
    /// UTC itself.
    pub const UTC: UtcOffset = UtcOffset { minutes: 0 };

    /// Offset in whole hours, e.g. `-4` for EDT.
    pub fn from_hours(hours: i32) -> Result<Self, TimeError> {
        Self::from_minutes(hours.saturating_mul(60))
    }

    /// Offset in minutes, e.g. `330` for India (+05:30).
    pub fn from_minutes(minutes: i32) -> Result<Self, TimeError> {
        if !(MIN_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&minutes) {
            return Err(TimeError::InvalidOffset { minutes });
        }
        Ok(Self { minutes })
    }

    pub fn minutes(self) -> i32 {
        self.minutes
    }

    /// Offset in fractional hours.
    pub fn hours(self) -> f64 {
        f64::from(self.minutes) / 60.0
    }
}

impl Display for UtcOffset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.minutes < 0 { '-' } else { '+' };
        let abs = self.minutes.unsigned_abs();
        write!(f, "{sign}{:02}:{:02}", abs / 60, abs % 60)
    }
}

impl FromStr for UtcOffset {
    type Err = TimeError;

    /// Parse `+HH:MM` / `-HH:MM`, or a signed whole-hour count such as `-4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some((h, m)) = s.split_once(':') {
            let negative = h.starts_with('-');
            let hours: i32 = h
                .trim_start_matches(['+', '-'])
                .parse()
                .map_err(|_| TimeError::Parse(format!("invalid offset {s:?}")))?;
            let minutes: i32 = m
                .parse()
                .map_err(|_| TimeError::Parse(format!("invalid offset {s:?}")))?;
            if minutes > 59 {
                return Err(TimeError::Parse(format!("invalid offset {s:?}")));
            }
            let total = hours
                .checked_mul(60)
                .and_then(|h| h.checked_add(minutes))
                .ok_or_else(|| TimeError::Parse(format!("invalid offset {s:?}")))?;
            return Self::from_minutes(if negative { -total } else { total });
        }
        let hours: i32 = s
            .parse()
            .map_err(|_| TimeError::Parse(format!("invalid offset {s:?}")))?;
        Self::from_hours(hours)
    }
}

/// A local wall-clock instant: calendar date plus time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocalDateTime {
    pub date: CivilDate,
    pub time: ClockTime,
}

impl LocalDateTime {
    pub fn new(date: CivilDate, time: ClockTime) -> Self {
        Self { date, time }
    }
}

impl Display for LocalDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

impl FromStr for LocalDateTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDTHH:MM` (a space also separates date and time).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some((date, time)) = s.split_once(['T', ' ']) else {
            return Err(TimeError::Parse(format!(
                "expected YYYY-MM-DDTHH:MM, got {s:?}"
            )));
        };
        Ok(Self {
            date: date.parse()?,
            time: time.parse()?,
        })
    }
}
