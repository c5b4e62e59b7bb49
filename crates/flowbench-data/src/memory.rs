//! Inline handles
//!
//! [`InMemoryHandle`] carries its bytes directly; [`ErrorHandle`] stands in
//! for ports that resolved to something non-renderable.

use crate::error::DataError;
use crate::handle::{DataHandle, HandleKind};
use std::io::Read;

/// Handle over an inline value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryHandle {
    bytes: Vec<u8>,
}

impl InMemoryHandle {
    /// Create a handle over raw bytes
    #[inline]
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Create a handle over a text value
    #[inline]
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            bytes: text.into().into_bytes(),
        }
    }

    /// Borrow the underlying bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl DataHandle for InMemoryHandle {
    fn kind(&self) -> HandleKind {
        HandleKind::Value
    }

    fn size_in_bytes(&self) -> Result<u64, DataError> {
        Ok(self.bytes.len() as u64)
    }

    fn as_string(&self) -> Result<String, DataError> {
        Ok(String::from_utf8_lossy(&self.bytes).into_owned())
    }

    fn open(&self) -> Result<Box<dyn Read + '_>, DataError> {
        Ok(Box::new(self.bytes.as_slice()))
    }
}

/// Handle over a port that resolved to nothing renderable
///
/// Used by host integrations to represent errored, missing or list-valued
/// ports. Every materialization attempt fails with
/// [`DataError::NoContent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorHandle {
    kind: HandleKind,
    message: String,
}

impl ErrorHandle {
    /// Create a handle of the given non-renderable kind
    #[inline]
    #[must_use]
    pub fn new(kind: HandleKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The message describing why there is no content
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl DataHandle for ErrorHandle {
    fn kind(&self) -> HandleKind {
        self.kind
    }

    fn size_in_bytes(&self) -> Result<u64, DataError> {
        Err(DataError::NoContent(self.message.clone()))
    }

    fn as_string(&self) -> Result<String, DataError> {
        Err(DataError::NoContent(self.message.clone()))
    }

    fn open(&self) -> Result<Box<dyn Read + '_>, DataError> {
        Err(DataError::NoContent(self.message.clone()))
    }
}
