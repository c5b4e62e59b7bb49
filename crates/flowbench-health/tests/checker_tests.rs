//! Health-check branching behavior
//!
//! Exercises every catalogue outcome: unregistered services, missing and
//! stale data, passing and failing tests, unknown labels and client
//! failures.

use chrono::Utc;
use flowbench_health::{
    keys, MonitoringStatus, ReportStatus, ServiceHealthChecker, ServiceMonitoring,
};
use flowbench_test_utils::{
    record_hours_ago, sample_operation, test_hours_ago, FailingMonitoringClient,
    StaticMonitoringClient,
};
use pretty_assertions::assert_eq;

#[test]
fn unregistered_service_reports_nothing() {
    let checker = ServiceHealthChecker::new(StaticMonitoringClient::unregistered());
    assert_eq!(checker.check(&sample_operation()), None);
}

#[test]
fn missing_monitoring_data_reports_nothing() {
    let monitoring = ServiceMonitoring {
        latest_status: None,
        tests: Vec::new(),
    };
    let checker = ServiceHealthChecker::new(StaticMonitoringClient::serving(monitoring));
    assert_eq!(checker.check(&sample_operation()), None);
}

#[test]
fn stale_monitoring_data_reports_nothing() {
    let now = Utc::now();
    let monitoring = ServiceMonitoring::with_status(record_hours_ago(
        MonitoringStatus::Failed,
        now,
        72,
        "endpoint unreachable",
    ));
    let checker = ServiceHealthChecker::new(StaticMonitoringClient::serving(monitoring));
    assert_eq!(checker.check_at(&sample_operation(), now), None);
}

#[test]
fn passing_service_yields_an_ok_report() {
    let now = Utc::now();
    let monitoring = ServiceMonitoring::with_status(record_hours_ago(
        MonitoringStatus::Passed,
        now,
        2,
        "all good",
    ));
    let checker = ServiceHealthChecker::new(StaticMonitoringClient::serving(monitoring));
    let operation = sample_operation();

    let report = checker.check_at(&operation, now).unwrap();

    assert_eq!(report.status, ReportStatus::Ok);
    assert_eq!(report.label, "Service catalogue: all tests passed 2 hours ago");
    assert_eq!(
        report.property(keys::WSDL_LOCATION),
        Some(operation.wsdl_location.as_str())
    );
    assert_eq!(
        report.property(keys::OPERATION_NAME),
        Some(operation.operation_name.as_str())
    );
    assert!(report
        .property(keys::EXPLANATION)
        .unwrap()
        .contains("last executed 2 hours ago"));
    assert!(report.sub_reports.is_empty());
}

#[test]
fn failing_service_builds_sub_reports_per_fresh_test() {
    let now = Utc::now();
    let monitoring = ServiceMonitoring::with_status(record_hours_ago(
        MonitoringStatus::Failed,
        now,
        1,
        "tests failed",
    ))
    .with_tests(vec![
        test_hours_ago("availability", MonitoringStatus::Failed, now, 1),
        test_hours_ago("schema", MonitoringStatus::Passed, now, 1),
        // Too old to matter.
        test_hours_ago("latency", MonitoringStatus::Failed, now, 60),
    ]);
    let checker = ServiceHealthChecker::new(StaticMonitoringClient::serving(monitoring));

    let report = checker.check_at(&sample_operation(), now).unwrap();

    assert_eq!(report.sub_reports.len(), 2);
    // Worst sub-report status wins overall.
    assert_eq!(report.status, ReportStatus::Severe);
    assert_eq!(
        report.sub_reports[0].label,
        "Service catalogue: \"availability\" test script failed"
    );
    assert_eq!(report.sub_reports[0].status, ReportStatus::Severe);
    assert_eq!(report.sub_reports[1].status, ReportStatus::Ok);
    assert!(report.sub_reports[0]
        .property(keys::EXPLANATION)
        .unwrap()
        .contains("availability output"));
}

#[test]
fn failing_service_without_fresh_tests_reports_nothing() {
    let now = Utc::now();
    let monitoring = ServiceMonitoring::with_status(record_hours_ago(
        MonitoringStatus::Failed,
        now,
        1,
        "tests failed",
    ))
    .with_tests(vec![test_hours_ago(
        "availability",
        MonitoringStatus::Failed,
        now,
        60,
    )]);
    let checker = ServiceHealthChecker::new(StaticMonitoringClient::serving(monitoring));
    assert_eq!(checker.check_at(&sample_operation(), now), None);
}

#[test]
fn warning_with_only_passing_scripts_aggregates_to_ok() {
    let now = Utc::now();
    let monitoring = ServiceMonitoring::with_status(record_hours_ago(
        MonitoringStatus::Warning,
        now,
        1,
        "degraded",
    ))
    .with_tests(vec![test_hours_ago(
        "availability",
        MonitoringStatus::Passed,
        now,
        1,
    )]);
    let checker = ServiceHealthChecker::new(StaticMonitoringClient::serving(monitoring));

    let report = checker.check_at(&sample_operation(), now).unwrap();
    assert_eq!(report.status, ReportStatus::Ok);
    assert_eq!(report.sub_reports.len(), 1);
}

#[test]
fn unchecked_service_reports_nothing() {
    let now = Utc::now();
    let monitoring = ServiceMonitoring::with_status(record_hours_ago(
        MonitoringStatus::Unchecked,
        now,
        1,
        "",
    ));
    let checker = ServiceHealthChecker::new(StaticMonitoringClient::serving(monitoring));
    assert_eq!(checker.check_at(&sample_operation(), now), None);
}

#[test]
fn unknown_label_warns_about_an_api_change() {
    let now = Utc::now();
    let monitoring = ServiceMonitoring::with_status(record_hours_ago(
        MonitoringStatus::Unknown("degraded-experimental".into()),
        now,
        1,
        "",
    ));
    let checker = ServiceHealthChecker::new(StaticMonitoringClient::serving(monitoring));

    let report = checker.check_at(&sample_operation(), now).unwrap();
    assert_eq!(report.status, ReportStatus::Warning);
    assert!(report.label.contains("degraded-experimental"));
    assert!(report
        .property(keys::EXPLANATION)
        .unwrap()
        .contains("change in the catalogue API"));
}

#[test]
fn client_failure_is_absorbed_to_nothing() {
    let checker = ServiceHealthChecker::new(FailingMonitoringClient::new("connection refused"));
    assert_eq!(checker.check(&sample_operation()), None);
}

#[test]
fn reports_serialize_for_the_host() {
    let now = Utc::now();
    let monitoring = ServiceMonitoring::with_status(record_hours_ago(
        MonitoringStatus::Passed,
        now,
        2,
        "all good",
    ));
    let checker = ServiceHealthChecker::new(StaticMonitoringClient::serving(monitoring));
    let report = checker.check_at(&sample_operation(), now).unwrap();

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("all tests passed"));
}
