//! Layered configuration for the drik panchanga CLI.
//!
//! Resolution order: built-in defaults (New Delhi), then an optional TOML
//! file, then explicit command-line overrides. The kernel crates know
//! nothing about any of this; configuration exists purely to assemble a
//! `Location` and a calendar choice for the front end.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

use drik_panchanga::SolarCalendar;
use drik_vedic_base::Location;
use serde::Deserialize;

/// Errors from configuration loading.
#[derive(Debug)]
#[non_exhaustive]
pub enum ConfigError {
    /// The file could not be read.
    Io(std::io::Error),
    /// The file is not valid TOML for the expected schema.
    Parse(toml::de::Error),
    /// A field value is out of range.
    Invalid(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "config io error: {e}"),
            Self::Parse(e) => write!(f, "config parse error: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

/// Observer block of the config file.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObserverConfig {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    #[serde(default)]
    pub altitude_m: f64,
    pub utc_offset_hours: f64,
}

/// Calendar block of the config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    /// Default regional solar calendar: "tamil", "bengali", "odia",
    /// "malayalam". When absent, the built-in default (Tamil) applies.
    pub solar: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    observer: Option<ObserverConfig>,
    #[serde(default)]
    calendar: CalendarConfig,
}

/// Fully resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub observer: ObserverConfig,
    pub solar_calendar: SolarCalendar,
}

impl Default for Config {
    /// New Delhi (the drikpanchang.com reference location) and the Tamil
    /// solar calendar.
    fn default() -> Self {
        Self {
            observer: ObserverConfig {
                latitude_deg: 28.6139,
                longitude_deg: 77.2090,
                altitude_m: 0.0,
                utc_offset_hours: 5.5,
            },
            solar_calendar: SolarCalendar::Tamil,
        }
    }
}

impl Config {
    /// Load defaults, layered with a TOML file when present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(path) = path {
            let content = std::fs::read_to_string(path)?;
            config.merge_toml(&content)?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Merge a TOML document over the current values.
    pub fn merge_toml(&mut self, content: &str) -> Result<(), ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        if let Some(observer) = file.observer {
            self.observer = observer;
        }
        if let Some(name) = file.calendar.solar.as_deref() {
            self.solar_calendar = parse_solar_calendar(name)
                .ok_or(ConfigError::Invalid("unknown solar calendar name"))?;
        }
        Ok(())
    }

    /// Apply explicit overrides on top of file and defaults.
    pub fn apply_overrides(
        &mut self,
        latitude_deg: Option<f64>,
        longitude_deg: Option<f64>,
        altitude_m: Option<f64>,
        utc_offset_hours: Option<f64>,
    ) {
        if let Some(lat) = latitude_deg {
            self.observer.latitude_deg = lat;
        }
        if let Some(lon) = longitude_deg {
            self.observer.longitude_deg = lon;
        }
        if let Some(alt) = altitude_m {
            self.observer.altitude_m = alt;
        }
        if let Some(tz) = utc_offset_hours {
            self.observer.utc_offset_hours = tz;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let o = &self.observer;
        if !(-90.0..=90.0).contains(&o.latitude_deg) {
            return Err(ConfigError::Invalid("latitude must be within [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&o.longitude_deg) {
            return Err(ConfigError::Invalid("longitude must be within [-180, 180]"));
        }
        if !(-14.0..=14.0).contains(&o.utc_offset_hours) {
            return Err(ConfigError::Invalid("utc offset must be within [-14, 14]"));
        }
        Ok(())
    }

    /// The observer as a kernel `Location`.
    pub fn location(&self) -> Location {
        Location::new(
            self.observer.latitude_deg,
            self.observer.longitude_deg,
            self.observer.altitude_m,
            self.observer.utc_offset_hours,
        )
    }
}

/// Parse a calendar name, case-insensitive.
pub fn parse_solar_calendar(name: &str) -> Option<SolarCalendar> {
    match name.to_ascii_lowercase().as_str() {
        "tamil" => Some(SolarCalendar::Tamil),
        "bengali" => Some(SolarCalendar::Bengali),
        "odia" => Some(SolarCalendar::Odia),
        "malayalam" => Some(SolarCalendar::Malayalam),
        _ => None,
    }
}
