mod cli;
mod render;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use miqat_config::{load, resolve};
use miqat_rs::{
    FastingRecord, GeoCoordinate, NextPrayerRecord, PrayerConfig, QiblaRecord, ScheduleRecord,
    daily_schedule, fasting_window, methods, monthly_schedule, next_prayer, to_json,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands, SettingsArgs};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Settings for commands that need a place on Earth.
struct Located {
    coord: GeoCoordinate,
    config: PrayerConfig,
    place: Option<String>,
}

impl Located {
    fn header(&self) -> String {
        render::header(self.place.as_deref(), &self.coord, &self.config)
    }
}

fn locate(config_path: Option<&Path>, settings: &SettingsArgs) -> Result<Located> {
    let file = load(config_path).context("loading config")?;
    let resolved = resolve(&file, &settings.overrides()).context("resolving config")?;
    debug!(?resolved, "resolved settings");
    let coord = resolved.location.context(
        "no location: pass --lat and --lon, or set [location] in the config file",
    )?;
    Ok(Located {
        coord,
        config: resolved.prayer,
        place: resolved.location_name,
    })
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce(&T) -> String) -> Result<()> {
    if json {
        println!("{}", to_json(value)?);
    } else {
        print!("{}", text(value));
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let json = cli.json;
    let located = || locate(cli.config.as_deref(), &cli.settings);

    match cli.command {
        Commands::Times { date } => {
            let at = located()?;
            let record = ScheduleRecord::from(&daily_schedule(&at.coord, date, &at.config)?);
            emit(json, &record, |r| format!("{}\n{}", at.header(), render::schedule(r)))
        }
        Commands::Month { year, month } => {
            let at = located()?;
            let rows: Vec<ScheduleRecord> = monthly_schedule(&at.coord, year, month, &at.config)?
                .iter()
                .map(ScheduleRecord::from)
                .collect();
            emit(json, &rows, |r| format!("{}\n{}", at.header(), render::month(r)))
        }
        Commands::Fasting { start, end } => {
            let at = located()?;
            let record = FastingRecord::from(&fasting_window(&at.coord, start, end, &at.config)?);
            emit(json, &record, |r| format!("{}\n{}", at.header(), render::fasting(r)))
        }
        Commands::Next { at: now } => {
            let at = located()?;
            let record = NextPrayerRecord::from(&next_prayer(&at.coord, now, &at.config)?);
            emit(json, &record, |r| render::next(r))
        }
        Commands::Qibla => {
            let at = located()?;
            emit(json, &QiblaRecord::for_observer(&at.coord), |r| render::qibla(r))
        }
        Commands::Methods => emit(json, &methods(), |m| render::methods(m)),
    }
}

fn main() -> Result<()> {
    init_tracing();
    run(Cli::parse())
}
