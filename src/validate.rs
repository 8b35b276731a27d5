//! Opt-in reading validation.
//!
//! The input form constrains each field to its instrument bounds, so a
//! well-behaved collaborator never produces an out-of-bounds value and the
//! evaluation itself performs no validation. Integrations that bypass the
//! form (imports, API callers) can run this pass first to reject values no
//! probe could have reported.

use crate::model::{EvalError, Reading};
use crate::ranges::spec_for;

/// Checks every entry of a reading against its instrument input bounds.
///
/// Rejects non-finite values (NaN, ±inf) and values outside the bounds in
/// `ranges::PARAMETER_REGISTRY`, naming the first offending entry. Values
/// exactly on a bound are accepted. A reading that passes here may still
/// evaluate to any status — this checks plausibility, not safety.
pub fn validate_reading(reading: &Reading) -> Result<(), EvalError> {
    for (parameter, value) in reading.iter() {
        if !value.is_finite() {
            return Err(EvalError::InvalidValue { parameter, value });
        }
        let spec = spec_for(parameter);
        if value < spec.input_min || value > spec.input_max {
            return Err(EvalError::InvalidValue { parameter, value });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
