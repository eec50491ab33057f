//! Calculation method registry.
//!
//! Each convention reduces to three constants: the Fajr twilight angle, an
//! Isha rule (angle or fixed interval after Maghrib), and a Maghrib rule
//! (interval after sunset or its own angle). The Asr juristic option is a
//! single shadow-length factor.
//!
//! Angles follow the published tables of each authority (ISNA, Muslim
//! World League, Egyptian General Authority of Survey, University of
//! Islamic Sciences Karachi, Umm al-Qura Makkah, Institute of Geophysics
//! University of Tehran).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::PrayerError;

/// How Isha is derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IshaRule {
    /// Sun at this many degrees below the horizon, evening side.
    Angle(f64),
    /// Fixed interval after Maghrib, with a separate Ramadan value.
    MinutesAfterMaghrib { regular: u32, ramadan: u32 },
}

/// How Maghrib is derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaghribRule {
    /// Minutes after sunset (0 for most conventions).
    MinutesAfterSunset(u32),
    /// Sun at this many degrees below the horizon, evening side.
    Angle(f64),
}

/// Angular parameters of a calculation method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleParameters {
    /// Fajr twilight angle in degrees below the horizon.
    pub fajr_angle_deg: f64,
    pub isha: IshaRule,
    pub maghrib: MaghribRule,
}

/// Prayer-time calculation conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculationMethod {
    /// Islamic Society of North America.
    Isna,
    /// Muslim World League.
    Mwl,
    /// Egyptian General Authority of Survey.
    Egyptian,
    /// University of Islamic Sciences, Karachi.
    Karachi,
    /// Umm al-Qura University, Makkah.
    Makkah,
    /// Institute of Geophysics, University of Tehran.
    Tehran,
}

const ALL_METHODS: [CalculationMethod; 6] = [
    CalculationMethod::Isna,
    CalculationMethod::Mwl,
    CalculationMethod::Egyptian,
    CalculationMethod::Karachi,
    CalculationMethod::Makkah,
    CalculationMethod::Tehran,
];

impl CalculationMethod {
    /// Angular parameters for this method.
    pub const fn parameters(self) -> AngleParameters {
        match self {
            Self::Isna => AngleParameters {
                fajr_angle_deg: 15.0,
                isha: IshaRule::Angle(15.0),
                maghrib: MaghribRule::MinutesAfterSunset(0),
            },
            Self::Mwl => AngleParameters {
                fajr_angle_deg: 18.0,
                isha: IshaRule::Angle(17.0),
                maghrib: MaghribRule::MinutesAfterSunset(0),
            },
            Self::Egyptian => AngleParameters {
                fajr_angle_deg: 19.5,
                isha: IshaRule::Angle(17.5),
                maghrib: MaghribRule::MinutesAfterSunset(0),
            },
            Self::Karachi => AngleParameters {
                fajr_angle_deg: 18.0,
                isha: IshaRule::Angle(18.0),
                maghrib: MaghribRule::MinutesAfterSunset(0),
            },
            Self::Makkah => AngleParameters {
                fajr_angle_deg: 18.5,
                isha: IshaRule::MinutesAfterMaghrib {
                    regular: 90,
                    ramadan: 120,
                },
                maghrib: MaghribRule::MinutesAfterSunset(0),
            },
            Self::Tehran => AngleParameters {
                fajr_angle_deg: 17.7,
                isha: IshaRule::Angle(14.0),
                maghrib: MaghribRule::Angle(4.5),
            },
        }
    }

    /// Canonical lowercase identifier, e.g. `"isna"`.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Isna => "isna",
            Self::Mwl => "mwl",
            Self::Egyptian => "egyptian",
            Self::Karachi => "karachi",
            Self::Makkah => "makkah",
            Self::Tehran => "tehran",
        }
    }

    /// Human-readable authority name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Isna => "Islamic Society of North America",
            Self::Mwl => "Muslim World League",
            Self::Egyptian => "Egyptian General Authority of Survey",
            Self::Karachi => "University of Islamic Sciences, Karachi",
            Self::Makkah => "Umm al-Qura University, Makkah",
            Self::Tehran => "Institute of Geophysics, University of Tehran",
        }
    }

    /// All six methods.
    pub const fn all() -> &'static [CalculationMethod] {
        &ALL_METHODS
    }
}

impl Display for CalculationMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for CalculationMethod {
    type Err = PrayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "isna" => Ok(Self::Isna),
            "mwl" => Ok(Self::Mwl),
            "egyptian" | "egypt" => Ok(Self::Egyptian),
            "karachi" => Ok(Self::Karachi),
            "makkah" | "makka" | "umm_al_qura" => Ok(Self::Makkah),
            "tehran" => Ok(Self::Tehran),
            _ => Err(PrayerError::UnknownMethod(s.to_string())),
        }
    }
}

/// Asr juristic convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AsrJuristicMethod {
    /// Shafi'i, Maliki, Hanbali: shadow equals object length (factor 1).
    #[default]
    Standard,
    /// Hanafi: shadow twice the object length (factor 2).
    Hanafi,
}

impl AsrJuristicMethod {
    /// Shadow-length multiplier used in the Asr altitude formula.
    pub const fn shadow_factor(self) -> f64 {
        match self {
            Self::Standard => 1.0,
            Self::Hanafi => 2.0,
        }
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Hanafi => "hanafi",
        }
    }
}

impl Display for AsrJuristicMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for AsrJuristicMethod {
    type Err = PrayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "shafii" => Ok(Self::Standard),
            "hanafi" => Ok(Self::Hanafi),
            _ => Err(PrayerError::UnknownAsrMethod(s.to_string())),
        }
    }
}

/// Angular parameters for a method.
pub const fn parameters_for(method: CalculationMethod) -> AngleParameters {
    method.parameters()
}

/// Angular parameters for a method identifier such as `"mwl"`.
pub fn parameters_for_id(id: &str) -> Result<AngleParameters, PrayerError> {
    Ok(id.parse::<CalculationMethod>()?.parameters())
}

/// Shadow factor for an Asr juristic option.
pub const fn shadow_factor_for(asr: AsrJuristicMethod) -> f64 {
    asr.shadow_factor()
}
