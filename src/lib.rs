//! # u-reliability
//!
//! Weibull reliability estimation from small samples of failure times,
//! and maintenance planning from the fitted model.
//!
//! The estimator is domain-agnostic: it operates on raw `f64` hours and
//! returns plain data, leaving tables, charts and documents to callers.
//!
//! ## Modules
//!
//! - [`weibull`] — Median rank regression, reliability function, failure mode
//! - [`maintenance`] — Hours to fixed reliability levels with recommended actions
//! - [`analysis`] — One-call analysis producing a complete [`analysis::AnalysisReport`]
//! - [`input`] — Parsing of comma-separated failure-time lists
//! - [`report`] — Plain-text summary of a report
//! - [`error`] — [`ReliabilityError`] and the crate [`Result`] alias
//!
//! ## Design Philosophy
//!
//! - **Pure**: every run recomputes from its input, no hidden state
//! - **Explicit failures**: invalid data is rejected, never repaired
//! - **Research-backed**: algorithms reference the reliability literature

pub mod analysis;
pub mod error;
pub mod input;
pub mod maintenance;
pub mod report;
pub mod weibull;

pub use analysis::{analyze, AnalysisConfig, AnalysisInput, AnalysisReport};
pub use error::{ReliabilityError, Result};
