//! Per-parameter status classification.

use crate::model::{EvalError, Parameter, Status};
use crate::ranges::RangeTable;

/// Ammonia level (mg/L) above which water is acutely toxic rather than
/// merely elevated. Values between the configured safe ceiling and this
/// level classify as `Risky`; values above it as `Unsafe`.
///
/// This boundary is part of the classification rule itself, not of any
/// range table: species profiles move the safe ceiling but never this one.
pub const AMMONIA_UNSAFE_THRESHOLD_MG_L: f64 = 0.1;

/// Classifies a single measured value against the table's safe range.
///
/// Ammonia uses a three-tier asymmetric rule — there is no "too low"
/// ammonia, and the configured low bound is never consulted:
///   value ≤ high            → Safe
///   value ≤ 0.1             → Risky
///   otherwise               → Unsafe
///
/// Every other parameter compares symmetrically against its range, with
/// inclusive bounds:
///   value < low             → Low
///   value > high            → High
///   otherwise               → Safe
///
/// Pure: the result depends only on the arguments. The value is assumed to
/// be a plausible instrument reading — range-checking raw input is the
/// `validate` module's job.
///
/// Fails with `EvalError::UnknownParameter` if the table has no range for
/// the parameter.
pub fn classify(
    table: &RangeTable,
    parameter: Parameter,
    value: f64,
) -> Result<Status, EvalError> {
    let range = table
        .get(parameter)
        .ok_or(EvalError::UnknownParameter(parameter))?;

    let status = match parameter {
        Parameter::Ammonia => {
            if value <= range.high {
                Status::Safe
            } else if value <= AMMONIA_UNSAFE_THRESHOLD_MG_L {
                Status::Risky
            } else {
                Status::Unsafe
            }
        }
        _ => {
            if value < range.low {
                Status::Low
            } else if value > range.high {
                Status::High
            } else {
                Status::Safe
            }
        }
    };

    Ok(status)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SafeRange;

    fn table() -> RangeTable {
        RangeTable::default_freshwater()
    }

    // --- Symmetric parameters -----------------------------------------------

    #[test]
    fn test_values_on_range_bounds_are_safe() {
        // Bounds are inclusive: exactly low or exactly high is in range.
        let table = table();
        for parameter in [
            Parameter::Temperature,
            Parameter::DissolvedOxygen,
            Parameter::Ph,
        ] {
            let range = table.get(parameter).expect("default table is complete");
            assert_eq!(
                classify(&table, parameter, range.low),
                Ok(Status::Safe),
                "low bound of {} should classify Safe",
                parameter
            );
            assert_eq!(
                classify(&table, parameter, range.high),
                Ok(Status::Safe),
                "high bound of {} should classify Safe",
                parameter
            );
        }
    }

    #[test]
    fn test_values_just_outside_bounds_classify_low_and_high() {
        let table = table();
        for parameter in [
            Parameter::Temperature,
            Parameter::DissolvedOxygen,
            Parameter::Ph,
        ] {
            let range = table.get(parameter).expect("default table is complete");
            assert_eq!(
                classify(&table, parameter, range.low - 0.001),
                Ok(Status::Low),
                "just below low bound of {} should classify Low",
                parameter
            );
            assert_eq!(
                classify(&table, parameter, range.high + 0.001),
                Ok(Status::High),
                "just above high bound of {} should classify High",
                parameter
            );
        }
    }

    #[test]
    fn test_mid_range_values_are_safe() {
        let table = table();
        assert_eq!(
            classify(&table, Parameter::Temperature, 27.0),
            Ok(Status::Safe)
        );
        assert_eq!(
            classify(&table, Parameter::DissolvedOxygen, 7.0),
            Ok(Status::Safe)
        );
        assert_eq!(classify(&table, Parameter::Ph, 7.2), Ok(Status::Safe));
    }

    // --- Ammonia ------------------------------------------------------------

    #[test]
    fn test_ammonia_at_safe_ceiling_is_safe() {
        assert_eq!(
            classify(&table(), Parameter::Ammonia, 0.05),
            Ok(Status::Safe)
        );
    }

    #[test]
    fn test_ammonia_just_above_safe_ceiling_is_risky() {
        assert_eq!(
            classify(&table(), Parameter::Ammonia, 0.0500001),
            Ok(Status::Risky)
        );
    }

    #[test]
    fn test_ammonia_at_unsafe_threshold_is_still_risky() {
        assert_eq!(
            classify(&table(), Parameter::Ammonia, 0.1),
            Ok(Status::Risky)
        );
    }

    #[test]
    fn test_ammonia_just_above_unsafe_threshold_is_unsafe() {
        assert_eq!(
            classify(&table(), Parameter::Ammonia, 0.1000001),
            Ok(Status::Unsafe)
        );
    }

    #[test]
    fn test_ammonia_has_no_too_low_tier() {
        // The configured low bound (0.0) is not a floor: zero ammonia is
        // simply Safe, never Low.
        assert_eq!(
            classify(&table(), Parameter::Ammonia, 0.0),
            Ok(Status::Safe)
        );
    }

    #[test]
    fn test_ammonia_unsafe_threshold_survives_custom_safe_ceiling() {
        // A profile with a stricter ammonia ceiling shifts the Safe/Risky
        // boundary but not the Risky/Unsafe one.
        let strict = RangeTable::default_freshwater()
            .with_range(Parameter::Ammonia, SafeRange::new(0.0, 0.02));
        assert_eq!(
            classify(&strict, Parameter::Ammonia, 0.03),
            Ok(Status::Risky)
        );
        assert_eq!(
            classify(&strict, Parameter::Ammonia, 0.1),
            Ok(Status::Risky)
        );
        assert_eq!(
            classify(&strict, Parameter::Ammonia, 0.11),
            Ok(Status::Unsafe)
        );
    }

    // --- Unconfigured parameters --------------------------------------------

    #[test]
    fn test_unconfigured_parameter_is_an_error() {
        let partial = RangeTable::empty()
            .with_range(Parameter::Temperature, SafeRange::new(25.0, 30.0));
        assert_eq!(
            classify(&partial, Parameter::Ph, 7.0),
            Err(EvalError::UnknownParameter(Parameter::Ph))
        );
    }

    #[test]
    fn test_classification_is_deterministic() {
        let table = table();
        let first = classify(&table, Parameter::Temperature, 26.4);
        let second = classify(&table, Parameter::Temperature, 26.4);
        assert_eq!(first, second);
    }
}
