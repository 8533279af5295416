//! Reliability analysis from fitted Weibull parameters.
//!
//! Provides the reliability function, failure probability, hazard rate,
//! MTBF, threshold-crossing times and sampled curves.

use serde::Serialize;
use statrs::function::gamma::gamma;

use crate::error::{ReliabilityError, Result};

/// Reliability and failure probability sampled over `[0, horizon]`.
///
/// All three vectors have the same length; values are percentages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReliabilityCurve {
    /// Sample times, evenly spaced, both endpoints included.
    pub t: Vec<f64>,
    /// 100 * R(t).
    pub reliability_percent: Vec<f64>,
    /// 100 * (1 - R(t)).
    pub failure_probability_percent: Vec<f64>,
}

impl ReliabilityCurve {
    /// Number of sample points.
    pub fn len(&self) -> usize {
        self.t.len()
    }

    /// True when the curve holds no points.
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}

/// Reliability analysis for a Weibull distribution with validated parameters.
///
/// # Mathematical Background
///
/// Given a Weibull distribution with shape beta > 0 and scale eta > 0:
/// - Reliability: R(t) = exp(-(t/eta)^beta)
/// - Failure probability: F(t) = 1 - R(t)
/// - Hazard rate: lambda(t) = (beta/eta) * (t/eta)^(beta-1)
/// - MTBF: eta * Gamma(1 + 1/beta)
///
/// # Examples
///
/// ```
/// use u_reliability::weibull::ReliabilityAnalysis;
/// let ra = ReliabilityAnalysis::new(2.0, 100.0).unwrap();
/// assert!((ra.reliability(0.0) - 1.0).abs() < 1e-10);
/// assert!(ra.hazard_rate(50.0) > 0.0);
/// let t80 = ra.time_to_reliability(0.80).unwrap();
/// assert!((ra.reliability(t80) - 0.80).abs() < 1e-10);
/// ```
///
/// # Reference
/// Meeker & Escobar (1998), *Statistical Methods for Reliability Data*, Wiley.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReliabilityAnalysis {
    shape: f64,
    scale: f64,
}

impl ReliabilityAnalysis {
    /// Creates a new reliability analysis from Weibull parameters.
    ///
    /// # Errors
    /// [`ReliabilityError::InvalidParameter`] if either parameter is
    /// non-positive or non-finite.
    ///
    /// ```
    /// use u_reliability::weibull::ReliabilityAnalysis;
    /// assert!(ReliabilityAnalysis::new(2.0, 100.0).is_ok());
    /// assert!(ReliabilityAnalysis::new(-1.0, 100.0).is_err());
    /// assert!(ReliabilityAnalysis::new(2.0, 0.0).is_err());
    /// ```
    pub fn new(shape: f64, scale: f64) -> Result<Self> {
        if !shape.is_finite() || shape <= 0.0 {
            return Err(ReliabilityError::InvalidParameter(format!(
                "shape must be positive and finite, got {shape}"
            )));
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ReliabilityError::InvalidParameter(format!(
                "scale must be positive and finite, got {scale}"
            )));
        }
        Ok(Self { shape, scale })
    }

    /// Creates a reliability analysis from an MRR fitting result.
    ///
    /// # Errors
    /// Propagates [`ReliabilityAnalysis::new`] validation.
    pub fn from_mrr(result: &super::mrr::WeibullMrrResult) -> Result<Self> {
        Self::new(result.shape, result.scale)
    }

    /// Returns the shape parameter (beta).
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Returns the scale parameter (eta).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Reliability (survival) function at time t.
    ///
    /// ```text
    /// R(t) = exp(-(t/eta)^beta)
    /// ```
    ///
    /// For t <= 0, returns 1.0 (no failure before time 0).
    ///
    /// # Reference
    /// Weibull (1951), *Journal of Applied Mechanics* 18(3), pp. 293-297.
    pub fn reliability(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 1.0;
        }
        let z = t / self.scale;
        (-z.powf(self.shape)).exp()
    }

    /// Probability of failure by time t, `1 - R(t)`.
    pub fn failure_probability(&self, t: f64) -> f64 {
        1.0 - self.reliability(t)
    }

    /// Failure rate (hazard function) at time t.
    ///
    /// ```text
    /// lambda(t) = (beta/eta) * (t/eta)^(beta-1)
    /// ```
    ///
    /// For t <= 0, returns 0.0.
    pub fn hazard_rate(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let z = t / self.scale;
        (self.shape / self.scale) * z.powf(self.shape - 1.0)
    }

    /// Mean Time Between Failures (MTBF).
    ///
    /// ```text
    /// MTBF = eta * Gamma(1 + 1/beta)
    /// ```
    ///
    /// # Reference
    /// Johnson, Kotz & Balakrishnan (1994), *Continuous Univariate Distributions*,
    /// Vol. 1, Chapter 21.
    pub fn mtbf(&self) -> f64 {
        self.scale * gamma(1.0 + 1.0 / self.shape)
    }

    /// Time at which reliability drops to a given level.
    ///
    /// Solves R(t) = p for t:
    ///
    /// ```text
    /// t = eta * (-ln(p))^(1/beta)
    /// ```
    ///
    /// # Errors
    /// [`ReliabilityError::InvalidParameter`] if `p` is outside (0, 1).
    ///
    /// # Reference
    /// Abernethy (2006), *The New Weibull Handbook*, 5th ed.
    pub fn time_to_reliability(&self, p: f64) -> Result<f64> {
        if !(p > 0.0 && p < 1.0) {
            return Err(ReliabilityError::InvalidParameter(format!(
                "reliability level must be in (0, 1), got {p}"
            )));
        }
        Ok(self.scale * (-p.ln()).powf(1.0 / self.shape))
    }

    /// B-life: time at which a given fraction of the population has failed.
    ///
    /// B10 life (10% failed) = `b_life(0.10)`, which is equivalent to
    /// `time_to_reliability(0.90)`.
    ///
    /// # Errors
    /// [`ReliabilityError::InvalidParameter`] if `fraction_failed` is outside (0, 1).
    pub fn b_life(&self, fraction_failed: f64) -> Result<f64> {
        if !(fraction_failed > 0.0 && fraction_failed < 1.0) {
            return Err(ReliabilityError::InvalidParameter(format!(
                "failed fraction must be in (0, 1), got {fraction_failed}"
            )));
        }
        self.time_to_reliability(1.0 - fraction_failed)
    }

    /// Samples R(t) and 1 - R(t) at `points` evenly spaced times over `[0, horizon]`.
    ///
    /// # Errors
    /// [`ReliabilityError::InvalidParameter`] if `horizon` is negative or
    /// non-finite, or `points < 2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_reliability::weibull::ReliabilityAnalysis;
    /// let ra = ReliabilityAnalysis::new(1.5, 300.0).unwrap();
    /// let curve = ra.curve(500.0, 100).unwrap();
    /// assert_eq!(curve.len(), 100);
    /// assert_eq!(curve.t[0], 0.0);
    /// assert_eq!(curve.t[99], 500.0);
    /// assert_eq!(curve.reliability_percent[0], 100.0);
    /// ```
    pub fn curve(&self, horizon: f64, points: usize) -> Result<ReliabilityCurve> {
        if !horizon.is_finite() || horizon < 0.0 {
            return Err(ReliabilityError::InvalidParameter(format!(
                "analysis horizon must be a non-negative number, got {horizon}"
            )));
        }
        if points < 2 {
            return Err(ReliabilityError::InvalidParameter(format!(
                "curve needs at least 2 points, got {points}"
            )));
        }

        let last = (points - 1) as f64;
        let mut t = Vec::with_capacity(points);
        let mut reliability_percent = Vec::with_capacity(points);
        let mut failure_probability_percent = Vec::with_capacity(points);

        for i in 0..points {
            // Pin the final sample so rounding never overshoots the horizon
            let ti = if i + 1 == points {
                horizon
            } else {
                horizon * i as f64 / last
            };
            let r = self.reliability(ti);
            t.push(ti);
            reliability_percent.push(r * 100.0);
            failure_probability_percent.push((1.0 - r) * 100.0);
        }

        Ok(ReliabilityCurve {
            t,
            reliability_percent,
            failure_probability_percent,
        })
    }
}
