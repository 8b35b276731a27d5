//! Species-profile configuration files.
//!
//! Loads alternate range tables from TOML so a farm can evaluate against
//! species-specific thresholds without code changes. A profile names any
//! subset of the four parameters; omitted parameters are simply not
//! configured in the resulting table, and evaluating a reading that
//! contains one then fails rather than falling back to defaults.
//!
//! File shape:
//!
//! ```toml
//! [ranges.temperature]
//! low = 26.0
//! high = 32.0
//!
//! [ranges.ammonia]
//! low = 0.0
//! high = 0.02
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use crate::model::{Parameter, SafeRange};
use crate::ranges::RangeTable;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when loading a species profile.
#[derive(Debug)]
pub enum ConfigError {
    /// The profile file could not be read.
    Io(std::io::Error),
    /// The file is not valid TOML or does not match the expected shape.
    Parse(toml::de::Error),
    /// A `[ranges.*]` key does not name a known parameter.
    UnknownParameter(String),
    /// A configured range has low > high.
    InvalidRange {
        parameter: Parameter,
        low: f64,
        high: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read profile: {}", e),
            ConfigError::Parse(e) => write!(f, "failed to parse profile: {}", e),
            ConfigError::UnknownParameter(key) => {
                write!(f, "profile names unknown parameter: '{}'", key)
            }
            ConfigError::InvalidRange {
                parameter,
                low,
                high,
            } => write!(
                f,
                "inverted range for {}: low {} > high {}",
                parameter, low, high
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// File shape
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ProfileFile {
    #[serde(default)]
    ranges: BTreeMap<String, RawRange>,
}

#[derive(Debug, Deserialize)]
struct RawRange {
    low: f64,
    high: f64,
}

/// TOML keys are snake_case versions of the display names.
fn parameter_for_key(key: &str) -> Option<Parameter> {
    match key {
        "temperature" => Some(Parameter::Temperature),
        "dissolved_oxygen" => Some(Parameter::DissolvedOxygen),
        "ph" => Some(Parameter::Ph),
        "ammonia" => Some(Parameter::Ammonia),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Parses a species profile from TOML text.
pub fn load_from_str(text: &str) -> Result<RangeTable, ConfigError> {
    let file: ProfileFile = toml::from_str(text).map_err(ConfigError::Parse)?;

    let mut table = RangeTable::empty();
    for (key, raw) in file.ranges {
        let parameter =
            parameter_for_key(&key).ok_or_else(|| ConfigError::UnknownParameter(key))?;
        if raw.low > raw.high {
            return Err(ConfigError::InvalidRange {
                parameter,
                low: raw.low,
                high: raw.high,
            });
        }
        table.set(parameter, SafeRange::new(raw.low, raw.high));
    }

    Ok(table)
}

/// Reads and parses a species profile file.
pub fn load_from_path(path: &Path) -> Result<RangeTable, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
    load_from_str(&text)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
