//! Error types for data handle resolution

use thiserror::Error;

/// Errors raised while probing or materializing a data handle
#[derive(Debug, Error)]
pub enum DataError {
    /// Resolution of the underlying value or reference failed
    #[error("failed to resolve data: {0}")]
    Io(#[from] std::io::Error),

    /// The handle has no content behind it (error or missing port)
    #[error("no content behind handle: {0}")]
    NoContent(String),
}
