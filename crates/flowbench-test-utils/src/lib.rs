//! Testing utilities for the FlowBench workspace
//!
//! Shared fixtures: scripted choice prompts, failure-injecting handles and
//! canned monitoring clients.

#![allow(missing_docs)]

use chrono::{DateTime, Duration, Utc};
use flowbench_data::{DataError, DataHandle, HandleKind};
use flowbench_health::{
    HealthError, MonitoringClient, MonitoringRecord, MonitoringStatus, ServiceMonitoring,
    ServiceTest, SoapOperation,
};
use flowbench_render::ChoicePrompt;
use std::cell::RefCell;
use std::io::Read;

/// One recorded consultation of a [`ScriptedPrompt`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedPrompt {
    pub title: String,
    pub message: String,
    pub options: Vec<String>,
    pub default: usize,
}

/// Prompt that always answers with a preset choice and records every call
#[derive(Debug)]
pub struct ScriptedPrompt {
    answer: Option<usize>,
    calls: RefCell<Vec<RecordedPrompt>>,
}

impl ScriptedPrompt {
    pub fn answering(answer: usize) -> Self {
        Self {
            answer: Some(answer),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// A prompt the user dismisses without choosing
    pub fn dismissed() -> Self {
        Self {
            answer: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn calls(&self) -> Vec<RecordedPrompt> {
        self.calls.borrow().clone()
    }
}

impl ChoicePrompt for ScriptedPrompt {
    fn choose(
        &self,
        title: &str,
        message: &str,
        options: &[&str],
        default: usize,
    ) -> Option<usize> {
        self.calls.borrow_mut().push(RecordedPrompt {
            title: title.to_string(),
            message: message.to_string(),
            options: options.iter().map(ToString::to_string).collect(),
            default,
        });
        self.answer
    }
}

/// Prompt that panics if it is ever consulted
#[derive(Debug)]
pub struct RefusingPrompt;

impl ChoicePrompt for RefusingPrompt {
    fn choose(&self, _: &str, _: &str, _: &[&str], _: usize) -> Option<usize> {
        panic!("the choice prompt must not be consulted for this payload");
    }
}

/// Handle that injects failures into probing or materialization
///
/// With `size: None` the size probe itself fails; otherwise the probe
/// succeeds and materialization fails.
#[derive(Debug, Clone)]
pub struct FailingHandle {
    kind: HandleKind,
    size: Option<u64>,
    message: String,
}

impl FailingHandle {
    /// Fails at the size probe
    pub fn probe(message: impl Into<String>) -> Self {
        Self {
            kind: HandleKind::Reference,
            size: None,
            message: message.into(),
        }
    }

    /// Probes `size` successfully, then fails at materialization
    pub fn materialize(size: u64, message: impl Into<String>) -> Self {
        Self {
            kind: HandleKind::Reference,
            size: Some(size),
            message: message.into(),
        }
    }

    fn error(&self) -> DataError {
        DataError::Io(std::io::Error::other(self.message.clone()))
    }
}

impl DataHandle for FailingHandle {
    fn kind(&self) -> HandleKind {
        self.kind
    }

    fn size_in_bytes(&self) -> Result<u64, DataError> {
        self.size.ok_or_else(|| self.error())
    }

    fn as_string(&self) -> Result<String, DataError> {
        Err(self.error())
    }

    fn open(&self) -> Result<Box<dyn Read + '_>, DataError> {
        Err(self.error())
    }
}

/// Client that serves one canned monitoring response
#[derive(Debug, Clone)]
pub struct StaticMonitoringClient {
    response: Option<ServiceMonitoring>,
}

impl StaticMonitoringClient {
    pub fn serving(monitoring: ServiceMonitoring) -> Self {
        Self {
            response: Some(monitoring),
        }
    }

    /// A catalogue that does not know the service
    pub fn unregistered() -> Self {
        Self { response: None }
    }
}

impl MonitoringClient for StaticMonitoringClient {
    fn lookup_service_monitoring(
        &self,
        _operation: &SoapOperation,
    ) -> Result<Option<ServiceMonitoring>, HealthError> {
        Ok(self.response.clone())
    }
}

/// Client whose lookups always fail
#[derive(Debug, Clone)]
pub struct FailingMonitoringClient {
    message: String,
}

impl FailingMonitoringClient {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl MonitoringClient for FailingMonitoringClient {
    fn lookup_service_monitoring(
        &self,
        _operation: &SoapOperation,
    ) -> Result<Option<ServiceMonitoring>, HealthError> {
        Err(HealthError::Client(self.message.clone()))
    }
}

/// Record checked `hours_ago` hours before `now`
pub fn record_hours_ago(
    status: MonitoringStatus,
    now: DateTime<Utc>,
    hours_ago: i64,
    message: impl Into<String>,
) -> MonitoringRecord {
    MonitoringRecord::new(status, now - Duration::hours(hours_ago), message)
}

/// Script test whose latest record was checked `hours_ago` hours before `now`
pub fn test_hours_ago(
    name: &str,
    status: MonitoringStatus,
    now: DateTime<Utc>,
    hours_ago: i64,
) -> ServiceTest {
    ServiceTest::new(
        name,
        format!("{name} description"),
        record_hours_ago(status, now, hours_ago, format!("{name} output")),
    )
}

/// Standard operation identity used across tests
pub fn sample_operation() -> SoapOperation {
    SoapOperation::new("http://example.org/service?wsdl", "runAnalysis")
}
