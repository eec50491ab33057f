//! Validated proleptic Gregorian calendar dates.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TimeError;
use crate::julian::calendar_to_jd;

/// First year of the supported astronomical era.
pub const MIN_SUPPORTED_YEAR: i32 = 1901;

/// Last year of the supported astronomical era.
pub const MAX_SUPPORTED_YEAR: i32 = 2199;

/// Whether `year` is a Gregorian leap year.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or 0 for an invalid month.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Whether `year` lies inside [`MIN_SUPPORTED_YEAR`, `MAX_SUPPORTED_YEAR`].
pub const fn is_supported_year(year: i32) -> bool {
    year >= MIN_SUPPORTED_YEAR && year <= MAX_SUPPORTED_YEAR
}

/// A calendar date (year, month, day) in the proleptic Gregorian calendar.
///
/// Always a real date: construction rejects month 13, Feb 30 and so on.
/// The supported astronomical era is checked separately by the solar engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CivilDate {
    /// Create a validated date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn day(self) -> u32 {
        self.day
    }

    /// Julian Date at 0h UT of this date.
    pub fn jd_midnight(self) -> f64 {
        calendar_to_jd(self.year, self.month, f64::from(self.day))
    }

    /// The following calendar day.
    pub fn succ(self) -> Self {
        if self.day < days_in_month(self.year, self.month) {
            Self {
                day: self.day + 1,
                ..self
            }
        } else if self.month < 12 {
            Self {
                year: self.year,
                month: self.month + 1,
                day: 1,
            }
        } else {
            Self {
                year: self.year + 1,
                month: 1,
                day: 1,
            }
        }
    }

    /// Fail with [`TimeError::OutOfRange`] unless the year is supported.
    pub fn ensure_supported(self) -> Result<Self, TimeError> {
        if is_supported_year(self.year) {
            Ok(self)
        } else {
            Err(TimeError::OutOfRange { year: self.year })
        }
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parse an ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut parts = s.splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got {s:?}")));
        };
        if y.len() != 4 || m.len() != 2 || d.len() != 2 {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got {s:?}")));
        }
        let year: i32 = y
            .parse()
            .map_err(|_| TimeError::Parse(format!("invalid year in {s:?}")))?;
        let month: u32 = m
            .parse()
            .map_err(|_| TimeError::Parse(format!("invalid month in {s:?}")))?;
        let day: u32 = d
            .parse()
            .map_err(|_| TimeError::Parse(format!("invalid day in {s:?}")))?;
        Self::new(year, month, day)
    }
}

impl Serialize for CivilDate {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CivilDate {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let text = String::deserialize(d)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::jd_to_calendar;

    fn date(y: i32, m: u32, d: u32) -> CivilDate {
        CivilDate::new(y, m, d).unwrap()
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(CivilDate::new(2024, 13, 1).is_err());
        assert!(CivilDate::new(2024, 0, 1).is_err());
        assert!(CivilDate::new(2023, 2, 29).is_err());
        assert!(CivilDate::new(2024, 4, 31).is_err());
        assert!(CivilDate::new(2024, 1, 0).is_err());
        assert!(CivilDate::new(2024, 2, 29).is_ok());
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn succ_rolls_month_and_year() {
        assert_eq!(date(2024, 2, 28).succ(), date(2024, 2, 29));
        assert_eq!(date(2024, 2, 29).succ(), date(2024, 3, 1));
        assert_eq!(date(2024, 12, 31).succ(), date(2025, 1, 1));
    }

    #[test]
    fn succ_matches_julian_day_step() {
        let mut d = date(2023, 12, 25);
        for _ in 0..400 {
            let next = d.succ();
            assert!((next.jd_midnight() - d.jd_midnight() - 1.0).abs() < 1e-9);
            let (y, m, day) = jd_to_calendar(next.jd_midnight() + 0.25);
            assert_eq!((y, m, day.floor() as u32), (next.year(), next.month(), next.day()));
            d = next;
        }
    }

    #[test]
    fn supported_era() {
        assert!(date(1901, 1, 1).ensure_supported().is_ok());
        assert!(date(2199, 12, 31).ensure_supported().is_ok());
        assert_eq!(
            date(1900, 12, 31).ensure_supported(),
            Err(TimeError::OutOfRange { year: 1900 })
        );
        assert_eq!(
            date(2200, 1, 1).ensure_supported(),
            Err(TimeError::OutOfRange { year: 2200 })
        );
    }

    #[test]
    fn parse_and_display() {
        let d: CivilDate = "2024-06-21".parse().unwrap();
        assert_eq!(d, date(2024, 6, 21));
        assert_eq!(d.to_string(), "2024-06-21");
        assert!("2024-6-21".parse::<CivilDate>().is_err());
        assert!("2024-02-30".parse::<CivilDate>().is_err());
        assert!("yesterday".parse::<CivilDate>().is_err());
    }

    #[test]
    fn serde_uses_iso_text() {
        let d = date(2025, 3, 1);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"2025-03-01\"");
        let back: CivilDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }
}
