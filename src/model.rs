//! Core data types for the pond water-quality evaluation service.
//!
//! This module defines the shared domain model imported by all other modules.
//! It contains no decision logic and no I/O — only types.

use serde::Serialize;
use std::fmt;

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// The water-quality parameters measured on every pond reading.
///
/// This is a closed set: the evaluation rules are defined for exactly these
/// four parameters, and the dashboard's input form collects exactly these
/// four values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Temperature,
    DissolvedOxygen,
    Ph,
    Ammonia,
}

impl Parameter {
    /// All parameters, in canonical display order.
    pub const ALL: [Parameter; 4] = [
        Parameter::Temperature,
        Parameter::DissolvedOxygen,
        Parameter::Ph,
        Parameter::Ammonia,
    ];

    /// Measurement unit as shown on the dashboard. pH is unitless.
    pub fn unit(self) -> &'static str {
        match self {
            Parameter::Temperature => "°C",
            Parameter::DissolvedOxygen => "mg/L",
            Parameter::Ph => "",
            Parameter::Ammonia => "mg/L",
        }
    }

    /// Parses a dashboard display name (e.g. "Dissolved Oxygen") back into
    /// a parameter. Returns `None` for anything unrecognized.
    pub fn from_name(name: &str) -> Option<Parameter> {
        match name {
            "Temperature" => Some(Parameter::Temperature),
            "Dissolved Oxygen" => Some(Parameter::DissolvedOxygen),
            "pH" => Some(Parameter::Ph),
            "Ammonia" => Some(Parameter::Ammonia),
            _ => None,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::Temperature => write!(f, "Temperature"),
            Parameter::DissolvedOxygen => write!(f, "Dissolved Oxygen"),
            Parameter::Ph => write!(f, "pH"),
            Parameter::Ammonia => write!(f, "Ammonia"),
        }
    }
}

// ---------------------------------------------------------------------------
// Readings
// ---------------------------------------------------------------------------

/// One set of simultaneously measured water-quality values, as entered on
/// the farmer input form.
///
/// Entries keep their insertion order, which downstream chart output mirrors.
/// Setting a parameter that is already present replaces the earlier value,
/// so a reading never holds more than one entry per parameter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reading {
    entries: Vec<(Parameter, f64)>,
}

impl Reading {
    pub fn new() -> Reading {
        Reading::default()
    }

    /// Builds a reading from (parameter, value) pairs, applying the usual
    /// replace-on-duplicate rule in order.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Parameter, f64)>) -> Reading {
        let mut reading = Reading::new();
        for (parameter, value) in pairs {
            reading.set(parameter, value);
        }
        reading
    }

    /// Sets a parameter's value, replacing any earlier entry for the same
    /// parameter in place (the entry keeps its original position).
    pub fn set(&mut self, parameter: Parameter, value: f64) {
        match self.entries.iter_mut().find(|(p, _)| *p == parameter) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((parameter, value)),
        }
    }

    /// Builder-style `set`.
    pub fn with(mut self, parameter: Parameter, value: f64) -> Reading {
        self.set(parameter, value);
        self
    }

    pub fn get(&self, parameter: Parameter) -> Option<f64> {
        self.entries
            .iter()
            .find(|(p, _)| *p == parameter)
            .map(|(_, v)| *v)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Parameter, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A reading together with the moment the farmer submitted it.
///
/// The dashboard holds the most recent submission between page views; the
/// `staleness` module decides whether it is still current enough to act on.
/// The timestamp is kept as the ISO 8601 string the form produced and is
/// parsed only where needed.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub reading: Reading,
    pub submitted_at: String, // ISO 8601, e.g. "2024-05-01T12:00:00+00:00"
}

// ---------------------------------------------------------------------------
// Ranges and statuses
// ---------------------------------------------------------------------------

/// The configured (low, high) bounds considered healthy for a parameter.
///
/// Bounds are inclusive: a value exactly on either bound is in range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SafeRange {
    pub low: f64,
    pub high: f64,
}

impl SafeRange {
    pub fn new(low: f64, high: f64) -> SafeRange {
        SafeRange { low, high }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
}

/// Classification outcome for one parameter's value.
///
/// `Low`/`High` apply to symmetric-range parameters; `Risky`/`Unsafe` are
/// the elevated tiers of the ammonia rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Status {
    Safe,
    Low,
    High,
    Risky,
    Unsafe,
}

impl Status {
    /// All statuses, in declaration order. Used for count indexing and for
    /// stable tie-breaking in chart output.
    pub const ALL: [Status; 5] = [
        Status::Safe,
        Status::Low,
        Status::High,
        Status::Risky,
        Status::Unsafe,
    ];

    pub fn is_safe(self) -> bool {
        self == Status::Safe
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Safe => write!(f, "Safe"),
            Status::Low => write!(f, "Low"),
            Status::High => write!(f, "High"),
            Status::Risky => write!(f, "Risky"),
            Status::Unsafe => write!(f, "Unsafe"),
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when classifying or evaluating a reading.
///
/// None of these are recoverable by retrying: they indicate either a
/// configuration defect (a parameter with no configured range) or input the
/// upstream form should never have produced. The evaluation never substitutes
/// defaults for bad data — a safety classification is surfaced correctly or
/// not at all.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// The classifier was asked about a parameter with no configured range.
    UnknownParameter(Parameter),
    /// A full-reading evaluation encountered an entry whose parameter has no
    /// configured range. Carries the parameter for diagnostics.
    Configuration(Parameter),
    /// A value was non-finite or outside the instrument's input bounds.
    /// Only produced by the opt-in `validate` pass.
    InvalidValue { parameter: Parameter, value: f64 },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UnknownParameter(parameter) => {
                write!(f, "no safe range configured for parameter: {}", parameter)
            }
            EvalError::Configuration(parameter) => {
                write!(
                    f,
                    "reading contains parameter with no configured range: {}",
                    parameter
                )
            }
            EvalError::InvalidValue { parameter, value } => {
                write!(f, "invalid value for {}: {}", parameter, value)
            }
        }
    }
}

impl std::error::Error for EvalError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
