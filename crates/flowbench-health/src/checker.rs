//! The monitoring health checker
//!
//! Branches on the catalogue's latest status for a service and builds a
//! visit report, or decides there is nothing worth telling the host.

use crate::monitoring::{
    MonitoringClient, MonitoringStatus, ServiceMonitoring, ServiceTest, SoapOperation,
};
use crate::report::{keys, ReportStatus, VisitReport};
use chrono::{DateTime, Duration, Utc};

/// Oldest monitoring data still worth reporting, in milliseconds (48 hours)
pub const MAX_MONITORING_AGE_MS: i64 = 48 * 60 * 60 * 1000;

fn staleness_window() -> Duration {
    Duration::milliseconds(MAX_MONITORING_AGE_MS)
}

/// Human-readable elapsed time, e.g. `"5 minutes ago"`
///
/// Returns `None` when `then` lies in the future or outside the 48-hour
/// staleness window — monitoring data that old says nothing about the
/// service's current health.
#[must_use]
pub fn ago_string(then: DateTime<Utc>, now: DateTime<Utc>) -> Option<String> {
    let elapsed = now - then;
    if elapsed < Duration::zero() || elapsed > staleness_window() {
        return None;
    }

    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        Some("less than a minute ago".to_string())
    } else if minutes < 60 {
        Some(format!("{} {} ago", minutes, plural(minutes, "minute")))
    } else {
        let hours = elapsed.num_hours();
        Some(format!("{} {} ago", hours, plural(hours, "hour")))
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        unit.to_string()
    } else {
        format!("{unit}s")
    }
}

/// Health checker for SOAP operations registered with a service catalogue
///
/// Advisory by contract: unknown services, missing or stale data and
/// client failures all produce no report rather than an error.
#[derive(Debug, Clone)]
pub struct ServiceHealthChecker<C> {
    client: C,
}

impl<C: MonitoringClient> ServiceHealthChecker<C> {
    /// Create a checker over the given catalogue client
    #[inline]
    #[must_use]
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Check `operation` against the catalogue's current monitoring data
    #[must_use]
    pub fn check(&self, operation: &SoapOperation) -> Option<VisitReport> {
        self.check_at(operation, Utc::now())
    }

    /// Check `operation`, evaluating staleness against `now`
    #[must_use]
    pub fn check_at(&self, operation: &SoapOperation, now: DateTime<Utc>) -> Option<VisitReport> {
        let monitoring = match self.client.lookup_service_monitoring(operation) {
            Ok(monitoring) => monitoring,
            Err(e) => {
                tracing::error!(
                    wsdl = %operation.wsdl_location,
                    error = %e,
                    "health check lookup failed, nothing to report"
                );
                return None;
            }
        };

        // Unregistered service, or registered without monitoring data.
        let monitoring = monitoring?;
        let latest = monitoring.latest_status.as_ref()?;
        let ago = ago_string(latest.last_checked, now)?;

        match &latest.status {
            MonitoringStatus::Passed => Some(self.passed_report(operation, &ago)),
            MonitoringStatus::Warning | MonitoringStatus::Failed => {
                self.failing_report(operation, &monitoring, now, &ago)
            }
            MonitoringStatus::Unchecked => {
                tracing::debug!(wsdl = %operation.wsdl_location, "service unchecked, nothing to report");
                None
            }
            MonitoringStatus::Unknown(label) => Some(self.unknown_label_report(operation, label)),
        }
    }

    fn passed_report(&self, operation: &SoapOperation, ago: &str) -> VisitReport {
        let explanation = format!(
            "The service catalogue reports that all available tests for this service \
             have been successful. They were last executed {ago}."
        );
        self.decorate(
            VisitReport::new(
                format!("Service catalogue: all tests passed {ago}"),
                ReportStatus::Ok,
            ),
            operation,
            &explanation,
        )
    }

    fn failing_report(
        &self,
        operation: &SoapOperation,
        monitoring: &ServiceMonitoring,
        now: DateTime<Utc>,
        ago: &str,
    ) -> Option<VisitReport> {
        let sub_reports: Vec<VisitReport> = monitoring
            .tests
            .iter()
            .filter_map(|test| self.test_script_report(operation, test, now))
            .collect();

        // Failures without fresh script records replicate the host's own
        // endpoint checks; the host does not need to hear about them twice.
        if sub_reports.is_empty() {
            tracing::debug!(
                wsdl = %operation.wsdl_location,
                "no fresh test script records, nothing to report"
            );
            return None;
        }

        let status = ReportStatus::worst(sub_reports.iter().map(|r| r.status));
        let report = self.decorate(
            VisitReport::new(
                format!("Service catalogue: some tests failed {ago}"),
                status,
            ),
            operation,
            "Some test scripts for this service have failed",
        );
        Some(report.with_sub_reports(sub_reports))
    }

    fn test_script_report(
        &self,
        operation: &SoapOperation,
        test: &ServiceTest,
        now: DateTime<Utc>,
    ) -> Option<VisitReport> {
        let ago = ago_string(test.latest.last_checked, now)?;
        let explanation = format!(
            "This test was last executed {ago}.\n\n{}\n\n---- Test script description ----\n{}",
            test.latest.message, test.description
        );
        let report = VisitReport::new(
            format!(
                "Service catalogue: \"{}\" test script {}",
                test.name, test.latest.status
            ),
            ReportStatus::from(&test.latest.status),
        );
        Some(self.decorate(report, operation, &explanation))
    }

    fn unknown_label_report(&self, operation: &SoapOperation, label: &str) -> VisitReport {
        let explanation = format!(
            "The service catalogue has returned a new monitoring status for this \
             service: \"{label}\"\n\nIt has never been used before and probably \
             indicates a change in the catalogue API. Please report this issue to \
             the catalogue developers."
        );
        self.decorate(
            VisitReport::new(
                format!("Service catalogue: unknown monitoring status received - \"{label}\""),
                ReportStatus::Warning,
            ),
            operation,
            &explanation,
        )
    }

    fn decorate(
        &self,
        report: VisitReport,
        operation: &SoapOperation,
        explanation: &str,
    ) -> VisitReport {
        report
            .with_property(keys::WSDL_LOCATION, &operation.wsdl_location)
            .with_property(keys::OPERATION_NAME, &operation.operation_name)
            .with_property(keys::EXPLANATION, explanation)
    }
}
