use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use miqat_config::Overrides;
use miqat_rs::{AsrJuristicMethod, CalculationMethod, CivilDate, LocalDateTime, UtcOffset};

#[derive(Debug, Parser)]
#[command(name = "miqat", version, about = "Prayer times and Qibla direction")]
pub struct Cli {
    /// Config file (default: <config dir>/miqat/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(flatten)]
    pub settings: SettingsArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags that override the config file.
#[derive(Debug, Args)]
pub struct SettingsArgs {
    /// Latitude in degrees, north positive
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude in degrees, east positive
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Calculation method: isna, mwl, egyptian, karachi, makkah, tehran
    #[arg(long, global = true)]
    pub method: Option<CalculationMethod>,

    /// Asr juristic method: standard, hanafi
    #[arg(long, global = true)]
    pub asr: Option<AsrJuristicMethod>,

    /// UTC offset of the local clock: -4, +05:30
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub tz: Option<UtcOffset>,

    /// Use the Ramadan Isha interval where the method defines one
    #[arg(long, global = true)]
    pub ramadan: bool,
}

impl SettingsArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            latitude: self.lat,
            longitude: self.lon,
            method: self.method,
            asr: self.asr,
            offset: self.tz,
            ramadan: self.ramadan.then_some(true),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Prayer times for one date
    Times {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: CivilDate,
    },
    /// Prayer times for every day of a month
    Month {
        #[arg(long)]
        year: i32,
        /// Month number, 1-12
        #[arg(long)]
        month: u32,
    },
    /// Suhoor end and iftar start over a date window
    Fasting {
        /// First day (YYYY-MM-DD)
        #[arg(long)]
        start: CivilDate,
        /// Last day, inclusive (YYYY-MM-DD)
        #[arg(long)]
        end: CivilDate,
    },
    /// Next prayer after a local time
    Next {
        /// Local time (YYYY-MM-DDTHH:MM) in the --tz offset
        #[arg(long)]
        at: LocalDateTime,
    },
    /// Qibla direction from the location
    Qibla,
    /// List calculation methods
    Methods,
}
