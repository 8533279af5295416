//! Weibull parameter estimation and reliability analysis.
//!
//! Fits a two-parameter Weibull distribution to complete (uncensored)
//! failure data by median rank regression, then evaluates reliability
//! metrics from the fitted parameters.
//!
//! # Modules
//!
//! - [`weibull_mrr`] — Median Rank Regression via Bernard's approximation
//! - [`ReliabilityAnalysis`] — R(t), hazard rate, MTBF, B-life, curves
//! - [`FailureMode`] — Qualitative reading of the shape parameter
//!
//! # References
//!
//! - Abernethy, R.B. (2006). *The New Weibull Handbook*, 5th ed.
//! - Dodson, B. (2006). *The Weibull Analysis Handbook*, 2nd ed.

mod mode;
mod mrr;
mod reliability;

pub use mode::FailureMode;
pub use mrr::{bernard_median_rank, median_rank_table, weibull_mrr, MedianRankRow, WeibullMrrResult};
pub use reliability::{ReliabilityAnalysis, ReliabilityCurve};
