//! Visit reports
//!
//! The structured result a health check hands back to the host: a labeled
//! status with explanatory properties and optional sub-reports, one per
//! test script.

use crate::monitoring::MonitoringStatus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Property keys attached to visit reports
pub mod keys {
    /// WSDL document location of the checked service
    pub const WSDL_LOCATION: &str = "wsdlLocation";
    /// Name of the checked operation
    pub const OPERATION_NAME: &str = "operationName";
    /// Longer explanation backing the report label
    pub const EXPLANATION: &str = "explanationMessage";
}

/// Severity of a visit report, ordered from best to worst
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ReportStatus {
    /// Nothing wrong
    Ok,
    /// Degraded but usable
    Warning,
    /// Broken
    Severe,
}

impl ReportStatus {
    /// Worst status in `statuses`; [`ReportStatus::Ok`] when empty
    #[must_use]
    pub fn worst<I: IntoIterator<Item = ReportStatus>>(statuses: I) -> ReportStatus {
        statuses.into_iter().max().unwrap_or(ReportStatus::Ok)
    }
}

impl From<&MonitoringStatus> for ReportStatus {
    /// Translate a catalogue status label into a report severity
    ///
    /// Labels the integration has never seen rank as warnings, not
    /// failures.
    fn from(status: &MonitoringStatus) -> Self {
        match status {
            MonitoringStatus::Passed => Self::Ok,
            MonitoringStatus::Failed => Self::Severe,
            MonitoringStatus::Warning
            | MonitoringStatus::Unchecked
            | MonitoringStatus::Unknown(_) => Self::Warning,
        }
    }
}

/// One finding of a health check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitReport {
    /// Short label shown in the host's validation panel
    pub label: String,
    /// Severity of this finding
    pub status: ReportStatus,
    /// Explanatory properties (see [`keys`])
    pub properties: BTreeMap<String, String>,
    /// Per-test-script findings backing this report
    pub sub_reports: Vec<VisitReport>,
}

impl VisitReport {
    /// Create a report with no properties or sub-reports
    #[inline]
    #[must_use]
    pub fn new(label: impl Into<String>, status: ReportStatus) -> Self {
        Self {
            label: label.into(),
            status,
            properties: BTreeMap::new(),
            sub_reports: Vec::new(),
        }
    }

    /// Attach a property
    #[inline]
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Attach sub-reports
    #[inline]
    #[must_use]
    pub fn with_sub_reports(mut self, sub_reports: Vec<VisitReport>) -> Self {
        self.sub_reports = sub_reports;
        self
    }

    /// Look up a property value
    #[inline]
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worst_picks_the_most_severe() {
        let statuses = [ReportStatus::Ok, ReportStatus::Severe, ReportStatus::Warning];
        assert_eq!(ReportStatus::worst(statuses), ReportStatus::Severe);
        assert_eq!(ReportStatus::worst([]), ReportStatus::Ok);
    }

    #[test]
    fn catalogue_labels_translate() {
        assert_eq!(
            ReportStatus::from(&MonitoringStatus::Passed),
            ReportStatus::Ok
        );
        assert_eq!(
            ReportStatus::from(&MonitoringStatus::Failed),
            ReportStatus::Severe
        );
        assert_eq!(
            ReportStatus::from(&MonitoringStatus::Unknown("odd".into())),
            ReportStatus::Warning
        );
    }

    #[test]
    fn properties_are_retrievable() {
        let report = VisitReport::new("label", ReportStatus::Ok)
            .with_property(keys::OPERATION_NAME, "runAnalysis");
        assert_eq!(report.property(keys::OPERATION_NAME), Some("runAnalysis"));
        assert_eq!(report.property(keys::WSDL_LOCATION), None);
    }
}
