//! Low-precision solar coordinates.
//!
//! Computes the Sun's apparent ecliptic longitude, right ascension,
//! declination, and the equation of time from a truncated series in the
//! mean anomaly. Accuracy is about 0.01° in position and a few seconds in
//! the equation of time over 1901–2199, which is far below the one-minute
//! rounding applied to prayer times.
//!
//! Source: Astronomical Almanac, "Low precision formulas for the Sun"
//! (section C). Public domain.

use miqat_time::{CivilDate, J2000_JD, TimeError, is_supported_year, jd_to_calendar};

/// Mean anomaly at J2000.0, degrees.
const MEAN_ANOMALY_J2000_DEG: f64 = 357.529;
/// Mean anomaly rate, degrees/day.
const MEAN_ANOMALY_RATE: f64 = 0.985_600_28;
/// Mean longitude at J2000.0, degrees.
const MEAN_LONGITUDE_J2000_DEG: f64 = 280.459;
/// Mean longitude rate, degrees/day.
const MEAN_LONGITUDE_RATE: f64 = 0.985_647_36;
/// Equation of center, first and second harmonics (degrees).
const CENTER_1: f64 = 1.915;
const CENTER_2: f64 = 0.020;
/// Mean obliquity at J2000.0 and its rate (degrees, degrees/day).
const OBLIQUITY_J2000_DEG: f64 = 23.439;
const OBLIQUITY_RATE: f64 = 0.000_000_36;

/// Sun's position and the equation of time at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Apparent declination in degrees, north positive.
    pub declination_deg: f64,
    /// Apparent solar time minus mean solar time, in minutes.
    pub equation_of_time_min: f64,
    /// Right ascension in hours, [0, 24).
    pub right_ascension_hours: f64,
    /// Apparent ecliptic longitude in degrees, [0, 360).
    pub ecliptic_longitude_deg: f64,
}

impl SolarPosition {
    /// Evaluate the series at a Julian Date (UT).
    ///
    /// No era check: callers that accept arbitrary input should go through
    /// [`solar_position`] or [`solar_position_jd`].
    pub fn at_jd(jd: f64) -> Self {
        let d = jd - J2000_JD;
        let g = (MEAN_ANOMALY_J2000_DEG + MEAN_ANOMALY_RATE * d).rem_euclid(360.0);
        let q = (MEAN_LONGITUDE_J2000_DEG + MEAN_LONGITUDE_RATE * d).rem_euclid(360.0);
        let g_rad = g.to_radians();
        let lambda = (q + CENTER_1 * g_rad.sin() + CENTER_2 * (2.0 * g_rad).sin()).rem_euclid(360.0);
        let eps = obliquity_deg(jd).to_radians();
        let lambda_rad = lambda.to_radians();

        let ra_hours = (eps.cos() * lambda_rad.sin())
            .atan2(lambda_rad.cos())
            .to_degrees()
            .rem_euclid(360.0)
            / 15.0;
        let dec = (eps.sin() * lambda_rad.sin()).asin().to_degrees();

        // Mean minus apparent RA, wrapped to [-12h, 12h).
        let eqt_hours = (q / 15.0 - ra_hours + 12.0).rem_euclid(24.0) - 12.0;

        Self {
            declination_deg: dec,
            equation_of_time_min: eqt_hours * 60.0,
            right_ascension_hours: ra_hours,
            ecliptic_longitude_deg: lambda,
        }
    }
}

/// Mean obliquity of the ecliptic in degrees at a Julian Date.
pub fn obliquity_deg(jd: f64) -> f64 {
    OBLIQUITY_J2000_DEG - OBLIQUITY_RATE * (jd - J2000_JD)
}

/// Solar position at 12h UT on `date`.
///
/// Fails with [`TimeError::OutOfRange`] outside 1901–2199.
pub fn solar_position(date: CivilDate) -> Result<SolarPosition, TimeError> {
    let date = date.ensure_supported()?;
    Ok(SolarPosition::at_jd(date.jd_midnight() + 0.5))
}

/// Solar position at an arbitrary Julian Date (UT).
///
/// Fails with [`TimeError::OutOfRange`] when the JD's calendar year lies
/// outside 1901–2199.
pub fn solar_position_jd(jd: f64) -> Result<SolarPosition, TimeError> {
    let (year, _, _) = jd_to_calendar(jd);
    if !is_supported_year(year) {
        return Err(TimeError::OutOfRange { year });
    }
    Ok(SolarPosition::at_jd(jd))
}
