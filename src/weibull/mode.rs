//! Qualitative failure-mode reading of the shape parameter.

use serde::Serialize;

/// Failure regime implied by the Weibull shape parameter.
///
/// - beta < 1: decreasing hazard, early failures
/// - 1 <= beta < 3: roughly constant hazard, random failures
/// - beta >= 3: increasing hazard, wear-out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureMode {
    /// Infant mortality, typically manufacturing or installation defects.
    EarlyFailure,
    /// Random failures at an approximately constant rate.
    RandomFailure,
    /// Deterioration at the end of useful life.
    WearOut,
}

impl FailureMode {
    /// Classifies a shape parameter.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_reliability::weibull::FailureMode;
    /// assert_eq!(FailureMode::from_shape(0.8), FailureMode::EarlyFailure);
    /// assert_eq!(FailureMode::from_shape(1.0), FailureMode::RandomFailure);
    /// assert_eq!(FailureMode::from_shape(3.0), FailureMode::WearOut);
    /// ```
    pub fn from_shape(shape: f64) -> Self {
        if shape < 1.0 {
            Self::EarlyFailure
        } else if shape < 3.0 {
            Self::RandomFailure
        } else {
            Self::WearOut
        }
    }

    /// Human-readable description used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::EarlyFailure => "Early failures - manufacturing problems",
            Self::RandomFailure => "Random failures - constant failure rate",
            Self::WearOut => "Wear-out failures - deterioration phase",
        }
    }
}

impl std::fmt::Display for FailureMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(FailureMode::from_shape(0.0), FailureMode::EarlyFailure);
        assert_eq!(FailureMode::from_shape(0.999), FailureMode::EarlyFailure);
        assert_eq!(FailureMode::from_shape(1.0), FailureMode::RandomFailure);
        assert_eq!(FailureMode::from_shape(2.999), FailureMode::RandomFailure);
        assert_eq!(FailureMode::from_shape(3.0), FailureMode::WearOut);
        assert_eq!(FailureMode::from_shape(12.0), FailureMode::WearOut);
    }

    #[test]
    fn test_labels_distinct() {
        let labels = [
            FailureMode::EarlyFailure.label(),
            FailureMode::RandomFailure.label(),
            FailureMode::WearOut.label(),
        ];
        assert_ne!(labels[0], labels[1]);
        assert_ne!(labels[1], labels[2]);
        assert_eq!(FailureMode::WearOut.to_string(), labels[2]);
    }
}
