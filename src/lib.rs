//! Water-quality evaluation core for a fish-pond monitoring dashboard.
//!
//! The dashboard front end collects a [`Reading`] from the farmer input
//! form, hands it to [`evaluate`] together with a [`RangeTable`], and
//! renders whatever comes back: per-parameter statuses with their
//! configured bounds, aggregate counts, an overall verdict, recommendation
//! lines (`advice`), and chart-ready summaries (`report`). Everything in
//! this crate is synchronous and, apart from the logging sink, free of
//! side effects; evaluation calls are independent and safe to issue
//! concurrently against a shared table.
//!
//! Module map:
//! - `model` — shared domain types and the error enum.
//! - `ranges` — parameter metadata and the injectable range table.
//! - `eval` — classification and whole-reading evaluation.
//! - `advice` — recommendation texts and urgency tiers.
//! - `report` — pie/bar chart rows and the JSON payload.
//! - `validate` — opt-in input plausibility checking.
//! - `staleness` — is a stored submission still current?
//! - `logging` — global logger and evaluation-outcome summaries.
//! - `config` — species-profile range tables from TOML.

pub mod advice;
pub mod config;
pub mod eval;
pub mod logging;
pub mod model;
pub mod ranges;
pub mod report;
pub mod staleness;
pub mod validate;

pub use eval::classify::classify;
pub use eval::evaluate::{evaluate, EvaluationResult, ParameterAssessment, StatusCounts};
pub use model::{EvalError, Parameter, Reading, SafeRange, Status, Submission};
pub use ranges::RangeTable;
