//! Water-quality decision logic.
//!
//! Everything that turns measured values into judgments lives here; the
//! surrounding modules only shape input for it or render its output.
//!
//! Submodules:
//! - `classify` — classifies a single (parameter, value) pair against a
//!   range table.
//! - `evaluate` — evaluates a whole reading into per-parameter statuses,
//!   aggregate counts, and an overall verdict.

pub mod classify;
pub mod evaluate;
