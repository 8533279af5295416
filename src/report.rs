//! Plain-text summary of an analysis for maintenance reports.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisReport;

/// Identification of the analysed equipment. Free text, printed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentInfo {
    pub name: String,
    pub make: String,
    pub model: String,
}

/// Borrowing [`fmt::Display`] adapter that renders a report summary.
///
/// ```
/// use u_reliability::analysis::{analyze, AnalysisConfig, AnalysisInput};
/// use u_reliability::report::{EquipmentInfo, Summary};
///
/// let input = AnalysisInput::new(vec![100.0, 200.0, 300.0, 400.0], 500.0, 250.0);
/// let report = analyze(&input, &AnalysisConfig::default()).unwrap();
/// let info = EquipmentInfo {
///     name: "Motor".into(),
///     make: "Siemens".into(),
///     model: "X2000".into(),
/// };
/// let text = Summary::new(&info, &report).to_string();
/// assert!(text.contains("Equipment: Motor, Make: Siemens, Model: X2000"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a> {
    info: &'a EquipmentInfo,
    report: &'a AnalysisReport,
}

impl<'a> Summary<'a> {
    pub fn new(info: &'a EquipmentInfo, report: &'a AnalysisReport) -> Self {
        Self { info, report }
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.report;
        writeln!(f, "Weibull Reliability Analysis")?;
        writeln!(
            f,
            "Equipment: {}, Make: {}, Model: {}",
            self.info.name, self.info.make, self.info.model
        )?;
        writeln!(f, "Beta: {:.2} - {}", r.beta, r.failure_mode_label)?;
        writeln!(f, "Eta: {:.2} hours", r.eta)?;
        writeln!(
            f,
            "Reliability at {:.2} hours: {:.2}%",
            r.current_hours, r.point_reliability_percent
        )?;
        writeln!(f)?;
        writeln!(f, "Maintenance recommendations:")?;
        for row in &r.thresholds {
            writeln!(
                f,
                "  Reliability {}% - {:.2}h: {}",
                row.level, row.hours, row.recommendation
            )?;
        }
        Ok(())
    }
}

/// Renders the summary to a `String`.
pub fn render_summary(info: &EquipmentInfo, report: &AnalysisReport) -> String {
    Summary::new(info, report).to_string()
}
