//! Whole-reading evaluation.

use crate::eval::classify::classify;
use crate::model::{EvalError, Parameter, Reading, SafeRange, Status};
use crate::ranges::RangeTable;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Judgment for one entry of a reading: the measured value, its status, and
/// the configured bounds it was compared against (passed through unchanged
/// for comparison display).
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterAssessment {
    pub parameter: Parameter,
    pub value: f64,
    pub status: Status,
    pub range: SafeRange,
}

/// How many parameters landed in each status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    counts: [usize; Status::ALL.len()],
}

impl StatusCounts {
    fn record(&mut self, status: Status) {
        self.counts[status as usize] += 1;
    }

    /// Number of parameters that classified as `status`.
    pub fn of(&self, status: Status) -> usize {
        self.counts[status as usize]
    }

    /// Number of parameters counted in total.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// The full outcome of evaluating one reading.
///
/// `assessments` follows the reading's entry order — significant only for
/// display stability, never for the judgments themselves. `all_safe` is the
/// overall verdict: true iff every assessed status is `Safe` (vacuously true
/// for an empty reading).
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    pub assessments: Vec<ParameterAssessment>,
    pub counts: StatusCounts,
    pub all_safe: bool,
}

impl EvaluationResult {
    /// The assessment for a parameter, if the reading contained it.
    pub fn status_of(&self, parameter: Parameter) -> Option<Status> {
        self.assessments
            .iter()
            .find(|a| a.parameter == parameter)
            .map(|a| a.status)
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Evaluates every entry of a reading against the range table.
///
/// Produces exactly one assessment per reading entry, in entry order, plus
/// aggregate status counts and the overall verdict. Pure: no I/O, no
/// retained state, identical inputs give identical results.
///
/// Fails with `EvalError::Configuration` naming the offending parameter if
/// any entry's parameter has no configured range. No partial result is
/// produced — a safety verdict computed from a subset of the reading would
/// be misleading.
pub fn evaluate(table: &RangeTable, reading: &Reading) -> Result<EvaluationResult, EvalError> {
    let mut assessments = Vec::with_capacity(reading.len());
    let mut counts = StatusCounts::default();

    for (parameter, value) in reading.iter() {
        let range = table
            .get(parameter)
            .ok_or(EvalError::Configuration(parameter))?;
        let status = classify(table, parameter, value).map_err(|err| match err {
            EvalError::UnknownParameter(p) => EvalError::Configuration(p),
            other => other,
        })?;

        counts.record(status);
        assessments.push(ParameterAssessment {
            parameter,
            value,
            status,
            range,
        });
    }

    let all_safe = assessments.iter().all(|a| a.status.is_safe());

    Ok(EvaluationResult {
        assessments,
        counts,
        all_safe,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
