//! Configuration for the miqat tools.
//!
//! Override hierarchy: built-in defaults → config file → command-line flags.
//! The engine itself never reads configuration; it receives the resolved
//! `PrayerConfig` as an argument.

pub mod error;
pub mod file;
pub mod resolve;

pub use error::ConfigError;
pub use file::{
    AdjustmentsSection, CalculationSection, LocationSection, MiqatConfig, TimezoneValue,
    config_path, load, load_from,
};
pub use resolve::{Overrides, ResolvedConfig, resolve};
