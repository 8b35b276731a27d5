//! Chart-ready summaries of an evaluation.
//!
//! Shapes an `EvaluationResult` into the rows the dashboard's pie and bar
//! charts plot, plus a JSON bundle for front ends that render client-side.
//! Pure projection — every judgment was already made during evaluation.

use serde::Serialize;

use crate::eval::evaluate::EvaluationResult;
use crate::model::Status;

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

/// One slice of the condition-status pie chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusSlice {
    pub status: Status,
    pub count: usize,
}

/// One bar of the value-versus-ideal-range comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub parameter: String,
    pub unit: String,
    pub value: f64,
    pub status: Status,
    pub ideal_min: f64,
    pub ideal_max: f64,
}

/// Fixed chart color for a status. Warning-tier statuses share orange and
/// critical-tier statuses share red, so the pie and bar charts read the
/// same way.
pub fn chart_color(status: Status) -> &'static str {
    match status {
        Status::Safe => "green",
        Status::Low | Status::Risky => "orange",
        Status::High | Status::Unsafe => "red",
    }
}

// ---------------------------------------------------------------------------
// Projections
// ---------------------------------------------------------------------------

/// Pie-chart slices: only statuses that actually occurred, most frequent
/// first. Ties keep `Status` declaration order (the sort is stable).
pub fn status_breakdown(result: &EvaluationResult) -> Vec<StatusSlice> {
    let mut slices: Vec<StatusSlice> = Status::ALL
        .iter()
        .map(|&status| StatusSlice {
            status,
            count: result.counts.of(status),
        })
        .filter(|slice| slice.count > 0)
        .collect();
    slices.sort_by(|a, b| b.count.cmp(&a.count));
    slices
}

/// Bar-chart rows in assessment (reading entry) order, each carrying the
/// configured bounds for the ideal-range overlay.
pub fn comparison_rows(result: &EvaluationResult) -> Vec<ComparisonRow> {
    result
        .assessments
        .iter()
        .map(|a| ComparisonRow {
            parameter: a.parameter.to_string(),
            unit: a.parameter.unit().to_string(),
            value: a.value,
            status: a.status,
            ideal_min: a.range.low,
            ideal_max: a.range.high,
        })
        .collect()
}

/// The complete chart payload as JSON.
pub fn to_json(result: &EvaluationResult) -> Result<String, serde_json::Error> {
    #[derive(Serialize)]
    struct ChartPayload {
        breakdown: Vec<StatusSlice>,
        comparison: Vec<ComparisonRow>,
        all_safe: bool,
    }

    serde_json::to_string(&ChartPayload {
        breakdown: status_breakdown(result),
        comparison: comparison_rows(result),
        all_safe: result.all_safe,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
