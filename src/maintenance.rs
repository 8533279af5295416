//! Maintenance planning from a fitted reliability model.
//!
//! Maps a fixed ladder of reliability levels to the operating hours at
//! which each level is reached, paired with the maintenance action due at
//! that point.
//!
//! | Level (%) | Action                                 |
//! |-----------|----------------------------------------|
//! | 85        | Functional test                        |
//! | 80        | Condition-based/predictive inspection  |
//! | 72        | Functional test                        |
//! | 60        | Condition-based inspection             |
//! | 55        | Functional test                        |
//! | 50        | Preventive maintenance                 |

use serde::Serialize;

use crate::error::Result;
use crate::weibull::ReliabilityAnalysis;

/// Maintenance action recommended when reliability reaches a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceAction {
    FunctionalTest,
    PredictiveInspection,
    ConditionBasedInspection,
    PreventiveMaintenance,
}

impl MaintenanceAction {
    /// Report label.
    pub fn label(self) -> &'static str {
        match self {
            Self::FunctionalTest => "Functional test",
            Self::PredictiveInspection => "Condition-based/predictive inspection",
            Self::ConditionBasedInspection => "Condition-based inspection",
            Self::PreventiveMaintenance => "Preventive maintenance",
        }
    }
}

impl std::fmt::Display for MaintenanceAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Reliability levels (percent) and their actions, highest level first.
pub const RELIABILITY_LEVELS: [(u32, MaintenanceAction); 6] = [
    (85, MaintenanceAction::FunctionalTest),
    (80, MaintenanceAction::PredictiveInspection),
    (72, MaintenanceAction::FunctionalTest),
    (60, MaintenanceAction::ConditionBasedInspection),
    (55, MaintenanceAction::FunctionalTest),
    (50, MaintenanceAction::PreventiveMaintenance),
];

/// Operating hours at which reliability decays to `level` percent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdRow {
    /// Reliability level in percent.
    pub level: u32,
    /// `eta * (-ln(level / 100))^(1 / beta)`.
    pub hours: f64,
    /// Action text for this level.
    pub recommendation: &'static str,
    /// Typed form of `recommendation`.
    #[serde(skip)]
    pub action: MaintenanceAction,
}

/// Computes the maintenance threshold table for a fitted model.
///
/// Rows follow [`RELIABILITY_LEVELS`], so hours increase row by row.
///
/// # Examples
///
/// ```
/// use u_reliability::maintenance::threshold_table;
/// use u_reliability::weibull::ReliabilityAnalysis;
///
/// let ra = ReliabilityAnalysis::new(2.0, 1000.0).unwrap();
/// let table = threshold_table(&ra).unwrap();
/// assert_eq!(table.len(), 6);
/// assert_eq!(table[5].recommendation, "Preventive maintenance");
/// assert!(table[0].hours < table[5].hours);
/// ```
pub fn threshold_table(analysis: &ReliabilityAnalysis) -> Result<Vec<ThresholdRow>> {
    RELIABILITY_LEVELS
        .iter()
        .map(|&(level, action)| {
            let hours = analysis.time_to_reliability(f64::from(level) / 100.0)?;
            Ok(ThresholdRow {
                level,
                hours,
                recommendation: action.label(),
                action,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_hours() {
        let ra = ReliabilityAnalysis::new(1.669_751_586_605_875_9, 294.656_766_395_489_8)
            .expect("valid parameters");
        let table = threshold_table(&ra).expect("levels are in range");

        let expected = [
            (85, 99.250_686_314_707_47),
            (80, 120.002_178_365_275),
            (72, 151.278_354_823_926_86),
            (60, 197.062_236_924_876_63),
            (55, 216.527_845_764_413_23),
            (50, 236.585_510_580_655_95),
        ];
        for (row, (level, hours)) in table.iter().zip(expected) {
            assert_eq!(row.level, level);
            assert!(
                (row.hours - hours).abs() < 1e-6,
                "hours to {}% = {}, expected {}",
                level,
                row.hours,
                hours
            );
        }
    }

    #[test]
    fn test_labels_fixed() {
        let ra = ReliabilityAnalysis::new(3.0, 500.0).expect("valid parameters");
        let labels: Vec<&str> = threshold_table(&ra)
            .expect("levels are in range")
            .iter()
            .map(|r| r.recommendation)
            .collect();
        assert_eq!(
            labels,
            vec![
                "Functional test",
                "Condition-based/predictive inspection",
                "Functional test",
                "Condition-based inspection",
                "Functional test",
                "Preventive maintenance",
            ]
        );
    }

    #[test]
    fn test_hours_increase_as_level_drops() {
        for shape in [0.5, 1.0, 2.5, 6.0] {
            let ra = ReliabilityAnalysis::new(shape, 1000.0).expect("valid parameters");
            let table = threshold_table(&ra).expect("levels are in range");
            for pair in table.windows(2) {
                assert!(
                    pair[0].hours < pair[1].hours,
                    "shape {}: {}% at {}h not before {}% at {}h",
                    shape,
                    pair[0].level,
                    pair[0].hours,
                    pair[1].level,
                    pair[1].hours
                );
            }
        }
    }

    #[test]
    fn test_hours_hit_level() {
        let ra = ReliabilityAnalysis::new(1.8, 750.0).expect("valid parameters");
        for row in threshold_table(&ra).expect("levels are in range") {
            let r = ra.reliability(row.hours) * 100.0;
            assert!((r - f64::from(row.level)).abs() < 1e-9, "R = {r} at level {}", row.level);
        }
    }
}
