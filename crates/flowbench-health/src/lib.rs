//! FlowBench Health Checks
//!
//! Interprets a remote service catalogue's monitoring data for a SOAP
//! operation into structured visit reports:
//! - **MonitoringClient**: the catalogue behind an internal interface boundary
//! - **ServiceHealthChecker**: status branching and sub-report construction
//! - **VisitReport**: label, status, properties and sub-reports with
//!   worst-status aggregation
//!
//! The check is advisory. Unknown services, missing or stale monitoring
//! data and client failures all collapse to "nothing to report"; a health
//! check never fails the host's validation pass.
//!
//! # Example
//!
//! ```rust
//! use flowbench_health::{ReportStatus, VisitReport};
//!
//! let report = VisitReport::new("all tests passed", ReportStatus::Ok)
//!     .with_property("operationName", "runAnalysis");
//! assert_eq!(report.property("operationName"), Some("runAnalysis"));
//! ```

pub mod checker;
pub mod error;
pub mod monitoring;
pub mod report;

// Re-exports
pub use checker::{ago_string, ServiceHealthChecker, MAX_MONITORING_AGE_MS};
pub use error::HealthError;
pub use monitoring::{
    MonitoringClient, MonitoringRecord, MonitoringStatus, ServiceMonitoring, ServiceTest,
    SoapOperation,
};
pub use report::{keys, ReportStatus, VisitReport};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for health checking
    pub use crate::{
        HealthError, MonitoringClient, MonitoringRecord, MonitoringStatus, ReportStatus,
        ServiceHealthChecker, ServiceMonitoring, ServiceTest, SoapOperation, VisitReport,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
