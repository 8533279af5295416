//! End-to-end Weibull reliability analysis.
//!
//! [`analyze`] turns a failure-time sample, an analysis horizon and the
//! current operating hours into a complete [`AnalysisReport`]: fitted
//! parameters, failure-mode reading, reliability and failure-probability
//! curves, reliability at the current hours, the maintenance threshold
//! table and the median rank table behind the fit.
//!
//! The computation is pure: the same input always yields the same report
//! and nothing is cached between calls.
//!
//! # Examples
//!
//! ```
//! use u_reliability::analysis::{analyze, AnalysisConfig, AnalysisInput};
//!
//! let input = AnalysisInput::new(vec![100.0, 200.0, 300.0, 400.0], 500.0, 250.0);
//! let report = analyze(&input, &AnalysisConfig::default()).unwrap();
//! assert!(report.beta > 1.0 && report.beta < 2.5);
//! assert!(report.eta > 250.0 && report.eta < 400.0);
//! assert_eq!(report.curve.len(), 100);
//! assert_eq!(report.thresholds.len(), 6);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ReliabilityError, Result};
use crate::maintenance::{threshold_table, ThresholdRow};
use crate::weibull::{weibull_mrr, FailureMode, MedianRankRow, ReliabilityAnalysis, ReliabilityCurve};

/// Default number of points sampled on the reliability curve.
pub const DEFAULT_CURVE_POINTS: usize = 100;

/// Tunables for [`analyze`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisConfig {
    /// Samples on the curve over `[0, horizon]`, both endpoints included. At least 2.
    pub curve_points: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            curve_points: DEFAULT_CURVE_POINTS,
        }
    }
}

/// Everything the estimator needs for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    /// Observed times to failure, in hours. Any order.
    pub times: Vec<f64>,
    /// End of the reliability curve, in hours.
    pub horizon: f64,
    /// Hours the equipment has run so far.
    #[serde(alias = "current_hours")]
    pub current_hours: f64,
}

impl AnalysisInput {
    pub fn new(times: Vec<f64>, horizon: f64, current_hours: f64) -> Self {
        Self {
            times,
            horizon,
            current_hours,
        }
    }
}

/// Result of a complete analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Shape parameter.
    pub beta: f64,
    /// Scale parameter, in hours.
    pub eta: f64,
    /// R² of the rank regression line.
    pub r_squared: f64,
    pub failure_mode: FailureMode,
    pub failure_mode_label: &'static str,
    /// Mean time between failures implied by the fit.
    pub mtbf: f64,
    pub current_hours: f64,
    /// 100 * R(current_hours).
    pub point_reliability_percent: f64,
    pub curve: ReliabilityCurve,
    pub thresholds: Vec<ThresholdRow>,
    pub median_rank_table: Vec<MedianRankRow>,
}

/// Runs the Weibull rank-regression analysis.
///
/// # Algorithm
/// 1. Sort the sample and build the median rank table (Bernard)
/// 2. Fit ln(ln(1/(1-MR))) against ln(t) by least squares; beta is the
///    slope, eta = exp(-intercept/beta)
/// 3. Classify beta into a [`FailureMode`]
/// 4. Sample R(t) and 1 - R(t) over `[0, horizon]`
/// 5. Evaluate R at the current operating hours
/// 6. Compute hours to each maintenance reliability level
///
/// # Errors
/// - [`ReliabilityError::InvalidSample`] for fewer than 2 times, a
///   non-positive or non-finite time, or fewer than 2 distinct times.
/// - [`ReliabilityError::InvalidParameter`] for a non-positive fitted
///   shape, a negative or non-finite horizon or current hours, or fewer
///   than 2 configured curve points.
pub fn analyze(input: &AnalysisInput, config: &AnalysisConfig) -> Result<AnalysisReport> {
    let fit = weibull_mrr(&input.times)?;
    let model = ReliabilityAnalysis::from_mrr(&fit)?;

    if !input.current_hours.is_finite() || input.current_hours < 0.0 {
        return Err(ReliabilityError::InvalidParameter(format!(
            "current operating hours must be a non-negative number, got {}",
            input.current_hours
        )));
    }

    let failure_mode = FailureMode::from_shape(model.shape());
    debug!(shape = model.shape(), mode = ?failure_mode, "failure mode classified");

    let curve = model.curve(input.horizon, config.curve_points)?;
    let thresholds = threshold_table(&model)?;
    let point_reliability_percent = model.reliability(input.current_hours) * 100.0;

    Ok(AnalysisReport {
        beta: model.shape(),
        eta: model.scale(),
        r_squared: fit.r_squared,
        failure_mode,
        failure_mode_label: failure_mode.label(),
        mtbf: model.mtbf(),
        current_hours: input.current_hours,
        point_reliability_percent,
        curve,
        thresholds,
        median_rank_table: fit.table,
    })
}
