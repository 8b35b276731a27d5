//! Parameter registry and safe-range configuration.
//!
//! Defines the canonical metadata for each measured parameter and the
//! `RangeTable` of safe bounds the classifier evaluates against. This is the
//! single source of truth for parameter metadata — other modules should
//! reference it rather than hardcoding names, units, or bounds.
//!
//! The range table is an explicit value handed to the classifier and
//! evaluator, not a hidden global, so alternate tables (species-specific
//! profiles loaded via the `config` module) can be swapped in without
//! touching the rules.

use crate::model::{Parameter, SafeRange};

// ---------------------------------------------------------------------------
// Parameter metadata
// ---------------------------------------------------------------------------

/// Static metadata for a single measured parameter.
pub struct ParameterSpec {
    pub parameter: Parameter,
    /// Display name as shown on the dashboard.
    pub name: &'static str,
    /// Measurement unit. Empty for pH.
    pub unit: &'static str,
    /// Lowest value the input form accepts for this parameter.
    pub input_min: f64,
    /// Highest value the input form accepts for this parameter.
    pub input_max: f64,
}

/// Metadata for every measured parameter, ordered to match `Parameter::ALL`
/// (the `spec_for` lookup indexes by discriminant).
///
/// Input bounds match the instrument/form limits: nothing a probe can
/// plausibly report falls outside them, so a value beyond these bounds is a
/// data-entry or integration defect rather than bad pond water.
pub static PARAMETER_REGISTRY: &[ParameterSpec] = &[
    ParameterSpec {
        parameter: Parameter::Temperature,
        name: "Temperature",
        unit: "°C",
        input_min: 0.0,
        input_max: 50.0,
    },
    ParameterSpec {
        parameter: Parameter::DissolvedOxygen,
        name: "Dissolved Oxygen",
        unit: "mg/L",
        input_min: 0.0,
        input_max: 15.0,
    },
    ParameterSpec {
        parameter: Parameter::Ph,
        name: "pH",
        unit: "",
        input_min: 0.0,
        input_max: 14.0,
    },
    ParameterSpec {
        parameter: Parameter::Ammonia,
        name: "Ammonia",
        unit: "mg/L",
        input_min: 0.0,
        input_max: 5.0,
    },
];

/// Looks up the registry entry for a parameter. Total: the registry covers
/// the whole closed parameter set.
pub fn spec_for(parameter: Parameter) -> &'static ParameterSpec {
    &PARAMETER_REGISTRY[parameter as usize]
}

// ---------------------------------------------------------------------------
// Range table
// ---------------------------------------------------------------------------

/// Safe (low, high) bounds per parameter.
///
/// A table may be partial — a species profile can omit a parameter — in
/// which case classifying that parameter fails rather than defaulting.
/// Construct with `default_freshwater()` for the standard thresholds, or
/// build up from `empty()` / a loaded profile.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeTable {
    ranges: [Option<SafeRange>; Parameter::ALL.len()],
}

impl RangeTable {
    /// A table with no ranges configured.
    pub fn empty() -> RangeTable {
        RangeTable {
            ranges: [None; Parameter::ALL.len()],
        }
    }

    /// The standard freshwater pond thresholds.
    ///
    /// The ammonia pair is interpreted asymmetrically by the classifier:
    /// the low bound is never used as a floor, and values above the high
    /// bound fall into the elevated tiers rather than plain "High".
    pub fn default_freshwater() -> RangeTable {
        RangeTable::empty()
            .with_range(Parameter::Temperature, SafeRange::new(25.0, 30.0))
            .with_range(Parameter::DissolvedOxygen, SafeRange::new(5.0, 10.0))
            .with_range(Parameter::Ph, SafeRange::new(6.5, 8.5))
            .with_range(Parameter::Ammonia, SafeRange::new(0.0, 0.05))
    }

    pub fn set(&mut self, parameter: Parameter, range: SafeRange) {
        self.ranges[parameter as usize] = Some(range);
    }

    /// Builder-style `set`.
    pub fn with_range(mut self, parameter: Parameter, range: SafeRange) -> RangeTable {
        self.set(parameter, range);
        self
    }

    /// The configured range for a parameter, or `None` if the table does
    /// not cover it.
    pub fn get(&self, parameter: Parameter) -> Option<SafeRange> {
        self.ranges[parameter as usize]
    }

    /// True if every parameter has a configured range.
    pub fn is_complete(&self) -> bool {
        self.ranges.iter().all(|r| r.is_some())
    }

    /// Configured (parameter, range) entries in canonical parameter order.
    pub fn iter(&self) -> impl Iterator<Item = (Parameter, SafeRange)> + '_ {
        Parameter::ALL
            .iter()
            .filter_map(|&p| self.get(p).map(|r| (p, r)))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
