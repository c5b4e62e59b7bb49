//! The service-catalogue monitoring model
//!
//! Mirrors what the remote catalogue reports for a registered SOAP
//! service: a latest overall status plus the per-test-script records it
//! was derived from.

use crate::error::HealthError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Status label attached to a monitoring record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonitoringStatus {
    /// All checks passed
    Passed,
    /// Some checks degraded
    Warning,
    /// Some checks failed
    Failed,
    /// The service was never checked
    Unchecked,
    /// A label this integration has never seen (likely an API change)
    Unknown(String),
}

impl Display for MonitoringStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passed => write!(f, "passed"),
            Self::Warning => write!(f, "warning"),
            Self::Failed => write!(f, "failed"),
            Self::Unchecked => write!(f, "unchecked"),
            Self::Unknown(label) => write!(f, "{label}"),
        }
    }
}

/// One monitoring observation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitoringRecord {
    /// Status label of this observation
    pub status: MonitoringStatus,
    /// When the catalogue last ran the check
    pub last_checked: DateTime<Utc>,
    /// Output the check produced
    pub message: String,
}

impl MonitoringRecord {
    /// Create a record
    #[inline]
    #[must_use]
    pub fn new(
        status: MonitoringStatus,
        last_checked: DateTime<Utc>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status,
            last_checked,
            message: message.into(),
        }
    }
}

/// A scripted test the catalogue runs against the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTest {
    /// Script name
    pub name: String,
    /// What the script checks
    pub description: String,
    /// Latest observation for this script
    pub latest: MonitoringRecord,
}

impl ServiceTest {
    /// Create a test entry
    #[inline]
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        latest: MonitoringRecord,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            latest,
        }
    }
}

/// Monitoring data the catalogue holds for one service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceMonitoring {
    /// Latest overall status, if the catalogue produced one
    pub latest_status: Option<MonitoringRecord>,
    /// Per-script observations
    pub tests: Vec<ServiceTest>,
}

impl ServiceMonitoring {
    /// Monitoring data with an overall status and no script records
    #[inline]
    #[must_use]
    pub fn with_status(latest_status: MonitoringRecord) -> Self {
        Self {
            latest_status: Some(latest_status),
            tests: Vec::new(),
        }
    }

    /// Attach per-script observations
    #[inline]
    #[must_use]
    pub fn with_tests(mut self, tests: Vec<ServiceTest>) -> Self {
        self.tests = tests;
        self
    }
}

/// Identity of the SOAP operation being checked
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SoapOperation {
    /// WSDL document location
    pub wsdl_location: String,
    /// Operation name within the WSDL
    pub operation_name: String,
}

impl SoapOperation {
    /// Create an operation identity
    #[inline]
    #[must_use]
    pub fn new(wsdl_location: impl Into<String>, operation_name: impl Into<String>) -> Self {
        Self {
            wsdl_location: wsdl_location.into(),
            operation_name: operation_name.into(),
        }
    }
}

/// The remote catalogue behind an internal interface boundary
///
/// `Ok(None)` means the catalogue does not know the parent service of the
/// operation at all.
pub trait MonitoringClient {
    /// Fetch monitoring data for the parent service of `operation`
    fn lookup_service_monitoring(
        &self,
        operation: &SoapOperation,
    ) -> Result<Option<ServiceMonitoring>, HealthError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn status_labels_display_lowercase() {
        assert_eq!(MonitoringStatus::Passed.to_string(), "passed");
        assert_eq!(
            MonitoringStatus::Unknown("degraded-experimental".into()).to_string(),
            "degraded-experimental"
        );
    }

    #[test]
    fn monitoring_serializes_round_trip() {
        let monitoring = ServiceMonitoring::with_status(MonitoringRecord::new(
            MonitoringStatus::Failed,
            Utc::now(),
            "endpoint unreachable",
        ));
        let json = serde_json::to_string(&monitoring).unwrap();
        let back: ServiceMonitoring = serde_json::from_str(&json).unwrap();
        assert_eq!(back, monitoring);
    }
}
