//! Submission freshness checking.
//!
//! The dashboard keeps the most recent form submission around between page
//! views. A submission that sat there for hours no longer describes the
//! pond — acting on it could be worse than acting on nothing. This module
//! decides whether a stored submission is still current enough to evaluate.
//!
//! # Clock injection
//! All functions accept a `now: DateTime<Utc>` parameter rather than calling
//! `Utc::now()` internally. This makes staleness purely deterministic in
//! tests without mocking or time manipulation.

use chrono::{DateTime, Utc};

use crate::model::Submission;

// ---------------------------------------------------------------------------
// Staleness check
// ---------------------------------------------------------------------------

/// Returns `true` if the submission is older than `max_age_minutes`
/// relative to `now`.
///
/// Staleness is defined as strictly greater than the threshold:
///   age > max_age_minutes  →  stale
///   age == max_age_minutes →  not stale
///
/// A submission timestamped in the future (clock skew between the form host
/// and the evaluator) is treated as fresh.
///
/// Returns an error if the submission's timestamp cannot be parsed.
/// Callers should treat parse failures as stale (fail-safe default).
pub fn is_stale_at(
    submission: &Submission,
    max_age_minutes: u64,
    now: DateTime<Utc>,
) -> Result<bool, String> {
    let submitted = DateTime::parse_from_rfc3339(&submission.submitted_at)
        .map_err(|e| {
            format!(
                "unparseable submission timestamp '{}': {}",
                submission.submitted_at, e
            )
        })?
        .with_timezone(&Utc);

    let age = now.signed_duration_since(submitted);
    if age < chrono::Duration::zero() {
        return Ok(false);
    }
    Ok(age.num_minutes() as u64 > max_age_minutes)
}

/// Convenience wrapper that uses the real current time.
/// Use `is_stale_at` in tests to keep them deterministic.
pub fn is_stale(submission: &Submission, max_age_minutes: u64) -> Result<bool, String> {
    is_stale_at(submission, max_age_minutes, Utc::now())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
