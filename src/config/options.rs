// src/config/options.rs
//! Layered application options.
//!
//! Sources (highest wins):
//! 1. Environment variables (`FISHING_CALENDAR_*`, `__` separates sections,
//!    e.g. `FISHING_CALENDAR_DATA__DIR=/srv/fishing`)
//! 2. `fishing_calendar.toml` in the working directory, or an explicit path
//! 3. Built-in defaults

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use super::consts::*;
use super::error::ConfigError;
use crate::csv::Delim;
use crate::model::Table;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppOptions {
    #[serde(default)]
    pub data: DataOptions,
    #[serde(default)]
    pub display: DisplayOptions,
    #[serde(default)]
    pub dates: DateRange,
    #[serde(default)]
    pub export: ExportOptions,
}

impl AppOptions {
    /// Defaults → TOML → env, then validated.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.is_file() {
                return Err(ConfigError::InvalidValue {
                    field: s!("config"),
                    reason: format!("file not found: {}", path.display()),
                });
            }
        }
        let opts: AppOptions = Self::figment(config_path).extract()?;
        opts.validate()?;
        Ok(opts)
    }

    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        match config_path {
            Some(path) => figment = figment.merge(Toml::file(path)),
            None => {
                let local = PathBuf::from(CONFIG_FILE);
                if local.exists() {
                    figment = figment.merge(Toml::file(local));
                }
            }
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dates.min > self.dates.max {
            return Err(ConfigError::InvalidValue {
                field: s!("dates"),
                reason: format!("min {} is after max {}", self.dates.min, self.dates.max),
            });
        }
        for table in Table::ALL {
            if self.data.file_name(table).trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("data.{}", DataOptions::file_key(table)),
                    reason: s!("file name is empty"),
                });
            }
        }
        Ok(())
    }
}

/// Where the three reference tables live.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataOptions {
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_locations_file")]
    pub locations_file: String,
    #[serde(default = "default_species_file")]
    pub species_file: String,
    #[serde(default = "default_gear_file")]
    pub gear_file: String,
}

fn default_data_dir() -> PathBuf { PathBuf::from(DEFAULT_DATA_DIR) }
fn default_locations_file() -> String { s!(LOCATIONS_FILE) }
fn default_species_file() -> String { s!(SPECIES_FILE) }
fn default_gear_file() -> String { s!(GEAR_FILE) }

impl Default for DataOptions {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            locations_file: default_locations_file(),
            species_file: default_species_file(),
            gear_file: default_gear_file(),
        }
    }
}

impl DataOptions {
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), ..Self::default() }
    }

    pub fn file_name(&self, table: Table) -> &str {
        match table {
            Table::Locations => &self.locations_file,
            Table::Species => &self.species_file,
            Table::Gear => &self.gear_file,
        }
    }

    pub fn path(&self, table: Table) -> PathBuf {
        self.dir.join(self.file_name(table))
    }

    fn file_key(table: Table) -> &'static str {
        match table {
            Table::Locations => "locations_file",
            Table::Species => "species_file",
            Table::Gear => "gear_file",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    /// Ratings that mean "closed season". Compared exactly, case-sensitive.
    #[serde(default = "default_closed_sentinels")]
    pub closed_sentinels: Vec<String>,
    #[serde(default = "default_maps_base_url")]
    pub maps_base_url: String,
}

fn default_closed_sentinels() -> Vec<String> { vec![s!(DEFAULT_CLOSED_SENTINEL)] }
fn default_maps_base_url() -> String { s!(MAPS_BASE_URL) }

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            closed_sentinels: default_closed_sentinels(),
            maps_base_url: default_maps_base_url(),
        }
    }
}

/// Inclusive bounds for the selectable date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

fn ymd((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

impl Default for DateRange {
    fn default() -> Self {
        Self { min: ymd(DATE_MIN), max: ymd(DATE_MAX) }
    }
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min <= date && date <= self.max
    }

    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.max(self.min).min(self.max)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    #[serde(default)]
    pub format: Delim,
    #[serde(default)]
    pub include_headers: bool,
}
