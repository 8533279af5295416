//! Median Rank Regression (MRR) for Weibull parameter estimation.
//!
//! Fits Weibull parameters using least-squares regression on the
//! linearized Weibull probability plot.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{ReliabilityError, Result};

/// R² below which the linearized fit is logged as a poor Weibull match.
const POOR_FIT_R_SQUARED: f64 = 0.9;

/// One row of the median rank table, in ascending time order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MedianRankRow {
    /// Failure time.
    pub time: f64,
    /// Bernard's median rank, as a percentage in (0, 100).
    pub median_rank_percent: f64,
    /// ln(time), the plot abscissa.
    pub ln_time: f64,
    /// ln(ln(1 / (1 - MR))), the plot ordinate.
    #[serde(rename = "lnLnInverse1MinusMR")]
    pub ln_ln_inverse: f64,
}

impl MedianRankRow {
    /// Median rank as a fraction in (0, 1).
    pub fn median_rank(&self) -> f64 {
        self.median_rank_percent / 100.0
    }
}

/// Result of Weibull MRR fitting.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeibullMrrResult {
    /// Shape parameter (beta), the regression slope.
    pub shape: f64,
    /// Scale parameter (eta).
    pub scale: f64,
    /// Regression intercept, equal to -beta * ln(eta).
    pub intercept: f64,
    /// Coefficient of determination (R-squared) of the linearized fit.
    pub r_squared: f64,
    /// Median rank table the line was fitted to.
    pub table: Vec<MedianRankRow>,
}

/// Bernard's approximation of the median rank of the `rank`-th of `n` order statistics.
///
/// ```text
/// F_i = (i - 0.3) / (n + 0.4)
/// ```
///
/// `rank` is 1-based.
pub fn bernard_median_rank(rank: usize, n: usize) -> f64 {
    (rank as f64 - 0.3) / (n as f64 + 0.4)
}

/// Builds the median rank table for a sample of failure times.
///
/// The sample is validated and sorted ascending; the input slice is not
/// modified.
///
/// # Errors
/// [`ReliabilityError::InvalidSample`] if fewer than 2 values are given or
/// any value is non-finite or non-positive.
///
/// # Examples
///
/// ```
/// use u_reliability::weibull::median_rank_table;
/// let table = median_rank_table(&[300.0, 100.0, 200.0]).unwrap();
/// assert_eq!(table[0].time, 100.0);
/// assert!(table[0].median_rank_percent < table[1].median_rank_percent);
/// ```
pub fn median_rank_table(failure_times: &[f64]) -> Result<Vec<MedianRankRow>> {
    let n = failure_times.len();
    if n < 2 {
        return Err(ReliabilityError::InvalidSample(format!(
            "need at least 2 failure times, got {n}"
        )));
    }

    if let Some(&bad) = failure_times.iter().find(|t| !(t.is_finite() && **t > 0.0)) {
        return Err(ReliabilityError::InvalidSample(format!(
            "failure times must be positive and finite, got {bad}"
        )));
    }

    let mut sorted = failure_times.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    let rows = sorted
        .iter()
        .enumerate()
        .map(|(i, &t)| {
            let f_i = bernard_median_rank(i + 1, n);
            MedianRankRow {
                time: t,
                median_rank_percent: f_i * 100.0,
                ln_time: t.ln(),
                ln_ln_inverse: (1.0 / (1.0 - f_i)).ln().ln(),
            }
        })
        .collect();

    Ok(rows)
}

/// Fit Weibull distribution using Median Rank Regression.
///
/// The linearized Weibull CDF is:
///
/// ```text
/// ln(-ln(1 - F(t))) = beta * ln(t) - beta * ln(eta)
/// ```
///
/// Plotting y = ln(-ln(1 - F_i)) vs x = ln(t_i) gives a line with
/// slope beta and intercept -beta * ln(eta).
///
/// # Algorithm
/// 1. Sort failure times ascending
/// 2. Compute median ranks F_i for each rank (Bernard)
/// 3. Transform: x_i = ln(t_i), y_i = ln(-ln(1 - F_i))
/// 4. Fit line y = a + b*x using ordinary least squares
/// 5. beta = b, eta = exp(-a/b)
///
/// # Errors
/// - [`ReliabilityError::InvalidSample`] if there are fewer than 2 values,
///   any value is non-positive or non-finite, or all values are identical
///   (the slope is undefined).
/// - [`ReliabilityError::InvalidParameter`] if the fitted beta is not
///   positive or eta is not a positive finite number.
///
/// # Examples
///
/// ```
/// use u_reliability::weibull::weibull_mrr;
/// let data = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0];
/// let result = weibull_mrr(&data).unwrap();
/// assert!(result.shape > 0.0);
/// assert!(result.scale > 0.0);
/// assert!(result.r_squared > 0.9);
/// ```
///
/// # Reference
/// Abernethy (2006), *The New Weibull Handbook*, 5th ed.
pub fn weibull_mrr(failure_times: &[f64]) -> Result<WeibullMrrResult> {
    let table = median_rank_table(failure_times)?;
    let n_f = table.len() as f64;

    let mean_x = table.iter().map(|r| r.ln_time).sum::<f64>() / n_f;
    let mean_y = table.iter().map(|r| r.ln_ln_inverse).sum::<f64>() / n_f;

    let mut s_xx = 0.0_f64;
    let mut s_xy = 0.0_f64;
    let mut s_yy = 0.0_f64;
    for row in &table {
        let dx = row.ln_time - mean_x;
        let dy = row.ln_ln_inverse - mean_y;
        s_xx += dx * dx;
        s_xy += dx * dy;
        s_yy += dy * dy;
    }

    // Sorted input: identical endpoints mean every x is the same.
    let first = table[0].time;
    let last = table[table.len() - 1].time;
    if first == last || s_xx < 1e-300 {
        return Err(ReliabilityError::InvalidSample(format!(
            "need at least 2 distinct failure times, all values equal {first}"
        )));
    }

    let beta = s_xy / s_xx;
    let intercept = mean_y - beta * mean_x;

    if !beta.is_finite() || beta <= 0.0 {
        return Err(ReliabilityError::InvalidParameter(format!(
            "fitted shape must be positive, got {beta}"
        )));
    }

    let eta = (-intercept / beta).exp();
    if !eta.is_finite() || eta <= 0.0 {
        return Err(ReliabilityError::InvalidParameter(format!(
            "fitted scale must be positive and finite, got {eta}"
        )));
    }

    // R-squared = 1 - SS_res / SS_tot; for simple OLS SS_res = s_yy - beta * s_xy
    let r_squared = if s_yy < 1e-300 {
        1.0
    } else {
        (1.0 - (s_yy - beta * s_xy) / s_yy).clamp(0.0, 1.0)
    };

    debug!(n = table.len(), shape = beta, scale = eta, r_squared, "weibull rank regression fitted");
    if r_squared < POOR_FIT_R_SQUARED {
        warn!(r_squared, "failure times deviate from a straight Weibull plot");
    }

    Ok(WeibullMrrResult {
        shape: beta,
        scale: eta,
        intercept,
        r_squared,
        table,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid_sample(result: Result<WeibullMrrResult>) {
        assert!(
            matches!(result, Err(ReliabilityError::InvalidSample(_))),
            "expected InvalidSample, got {:?}",
            result
        );
    }

    #[test]
    fn test_bernard_median_rank() {
        assert!((bernard_median_rank(1, 4) - 0.7 / 4.4).abs() < 1e-15);
        assert!((bernard_median_rank(4, 4) - 3.7 / 4.4).abs() < 1e-15);
    }

    #[test]
    fn test_table_sorted_and_ranks_increasing() {
        let table = median_rank_table(&[400.0, 100.0, 300.0, 200.0]).expect("valid sample");
        let times: Vec<f64> = table.iter().map(|r| r.time).collect();
        assert_eq!(times, vec![100.0, 200.0, 300.0, 400.0]);

        for pair in table.windows(2) {
            assert!(pair[0].median_rank_percent < pair[1].median_rank_percent);
            assert!(pair[0].ln_ln_inverse < pair[1].ln_ln_inverse);
        }
        for row in &table {
            assert!(row.median_rank() > 0.0 && row.median_rank() < 1.0);
            assert!(row.ln_ln_inverse.is_finite());
            assert!((row.ln_time - row.time.ln()).abs() < 1e-15);
        }
    }

    #[test]
    fn test_table_reference_values() {
        let table = median_rank_table(&[100.0, 200.0, 300.0, 400.0]).expect("valid sample");
        assert!((table[0].median_rank_percent - 15.909090909090906).abs() < 1e-10);
        assert!((table[0].ln_ln_inverse - (-1.7528942734518373)).abs() < 1e-10);
        assert!((table[3].median_rank_percent - 84.09090909090908).abs() < 1e-10);
        assert!((table[3].ln_ln_inverse - 0.6088300716026872).abs() < 1e-10);
    }

    #[test]
    fn test_mrr_reference_scenario() {
        let result = weibull_mrr(&[100.0, 200.0, 300.0, 400.0]).expect("MRR should succeed");
        assert!(
            (result.shape - 1.669_751_586_6).abs() < 1e-6,
            "shape = {}, expected 1.66975",
            result.shape
        );
        assert!(
            (result.scale - 294.656_766_4).abs() < 1e-4,
            "scale = {}, expected 294.657",
            result.scale
        );
        assert!(result.shape > 1.0 && result.shape < 2.5);
        assert!(result.scale > 250.0 && result.scale < 400.0);
        assert!(
            (result.intercept + result.shape * result.scale.ln()).abs() < 1e-10,
            "intercept should equal -beta*ln(eta)"
        );
    }

    #[test]
    fn test_mrr_uniform_spacing() {
        let data = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0];
        let result = weibull_mrr(&data).expect("MRR should succeed");

        assert!(
            result.shape > 1.0 && result.shape < 5.0,
            "shape = {}, expected in [1.0, 5.0]",
            result.shape
        );
        assert!(
            result.scale > 40.0 && result.scale < 100.0,
            "scale = {}, expected in [40, 100]",
            result.scale
        );
        assert!(
            result.r_squared > 0.9 && result.r_squared <= 1.0,
            "R^2 = {}, expected in (0.9, 1]",
            result.r_squared
        );
    }

    #[test]
    fn test_mrr_two_point_exact_line() {
        let result = weibull_mrr(&[50.0, 100.0]).expect("two distinct points fit");
        assert!((result.shape - 1.837_169_429_4).abs() < 1e-8, "shape = {}", result.shape);
        assert!((result.scale - 89.258_916_274).abs() < 1e-6, "scale = {}", result.scale);
        assert!((result.r_squared - 1.0).abs() < 1e-12);

        for row in &result.table {
            let residual = row.ln_ln_inverse - (result.intercept + result.shape * row.ln_time);
            assert!(residual.abs() < 1e-12, "residual = {residual}");
        }
    }

    #[test]
    fn test_mrr_exact_weibull_ranks_recovered() {
        // t_i placed exactly at the Bernard quantiles of Weibull(beta0, eta0)
        for &(beta0, eta0) in &[(0.7, 1200.0), (1.0, 50.0), (2.0, 500.0), (3.5, 8000.0)] {
            let n = 12;
            let data: Vec<f64> = (1..=n)
                .map(|i| {
                    let f = bernard_median_rank(i, n);
                    eta0 * (-(1.0 - f).ln()).powf(1.0 / beta0)
                })
                .collect();

            let result = weibull_mrr(&data).expect("MRR should succeed");
            assert!(
                (result.shape - beta0).abs() < 1e-9,
                "shape = {}, expected {}",
                result.shape,
                beta0
            );
            assert!(
                (result.scale - eta0).abs() / eta0 < 1e-9,
                "scale = {}, expected {}",
                result.scale,
                eta0
            );
            assert!((result.r_squared - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_mrr_insufficient_data() {
        assert_invalid_sample(weibull_mrr(&[]));
        assert_invalid_sample(weibull_mrr(&[5.0]));
    }

    #[test]
    fn test_mrr_invalid_data() {
        assert_invalid_sample(weibull_mrr(&[-10.0, 20.0, 30.0]));
        assert_invalid_sample(weibull_mrr(&[0.0, 10.0, 20.0]));
        assert_invalid_sample(weibull_mrr(&[f64::NAN, 10.0, 20.0]));
        assert_invalid_sample(weibull_mrr(&[f64::INFINITY, 10.0, 20.0]));
    }

    #[test]
    fn test_mrr_identical_values() {
        assert_invalid_sample(weibull_mrr(&[50.0, 50.0]));
        assert_invalid_sample(weibull_mrr(&[10.0, 10.0, 10.0, 10.0, 10.0]));
    }

    #[test]
    fn test_mrr_unsorted_input() {
        let data1 = [10.0, 20.0, 30.0, 40.0, 50.0];
        let data2 = [50.0, 10.0, 40.0, 20.0, 30.0];

        let r1 = weibull_mrr(&data1).expect("MRR should succeed");
        let r2 = weibull_mrr(&data2).expect("MRR should succeed");

        assert!(
            (r1.shape - r2.shape).abs() < 1e-12,
            "shape should be order-independent"
        );
        assert!(
            (r1.scale - r2.scale).abs() < 1e-12,
            "scale should be order-independent"
        );
    }

    #[test]
    fn test_mrr_repeated_values_allowed() {
        // Ties are fine as long as two distinct times exist
        let result = weibull_mrr(&[50.0, 50.0, 80.0]).expect("MRR should succeed");
        assert!(result.shape > 0.0 && result.scale > 0.0);
    }
}
