//! The data handle contract
//!
//! A handle is an opaque reference to a single workflow result value. It is
//! either inline (a value carried directly) or indirected (a reference the
//! host resolves on demand). Consumers only ever need three operations:
//! kind inspection, an approximate size probe, and materialization as a
//! string or byte stream.

use crate::error::DataError;
use std::io::Read;

/// What a resolved handle turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    /// An inline value
    Value,
    /// An indirected reference, resolved on demand
    Reference,
    /// A list of nested handles
    List,
    /// An upstream error captured in place of a value
    Error,
    /// Nothing was produced for this port
    Missing,
}

impl HandleKind {
    /// Whether a handle of this kind can be rendered as text
    ///
    /// Only values and references carry renderable content; lists, errors
    /// and missing ports do not.
    #[inline]
    #[must_use]
    pub fn is_renderable(self) -> bool {
        matches!(self, Self::Value | Self::Reference)
    }
}

/// Opaque reference to workflow result data
///
/// Implemented by the host's data-bundle integration. All operations are
/// read-only; the handle stays owned by the caller.
pub trait DataHandle {
    /// Kind of this handle
    fn kind(&self) -> HandleKind;

    /// Approximate size of the content in bytes, without materializing it
    fn size_in_bytes(&self) -> Result<u64, DataError>;

    /// Materialize the full content as a string
    ///
    /// Non-UTF-8 byte sequences are decoded lossily; materialization never
    /// fails on malformed text, only on resolution.
    fn as_string(&self) -> Result<String, DataError>;

    /// Open the content as a byte stream
    fn open(&self) -> Result<Box<dyn Read + '_>, DataError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_values_and_references_are_renderable() {
        assert!(HandleKind::Value.is_renderable());
        assert!(HandleKind::Reference.is_renderable());
        assert!(!HandleKind::List.is_renderable());
        assert!(!HandleKind::Error.is_renderable());
        assert!(!HandleKind::Missing.is_renderable());
    }
}
