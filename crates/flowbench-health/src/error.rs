//! Error types for the catalogue client boundary

use thiserror::Error;

/// Errors raised by a [`MonitoringClient`](crate::MonitoringClient)
///
/// The checker absorbs these; they exist so client implementations can
/// report what went wrong before the check collapses to "nothing to
/// report".
#[derive(Debug, Error)]
pub enum HealthError {
    /// The catalogue request itself failed (transport, timeout, auth)
    #[error("catalogue request failed: {0}")]
    Client(String),

    /// The catalogue answered with something uninterpretable
    #[error("catalogue response could not be interpreted: {0}")]
    Protocol(String),
}
