//! Render outcomes

/// Result of rendering a data handle
///
/// Every render produces one of these; failures are absorbed into
/// [`RenderOutcome::Error`] with a human-readable message and never
/// propagate to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Text payload for a read-only display surface
    DisplayText(String),
    /// Human-readable failure message
    Error(String),
}

impl RenderOutcome {
    /// The display text, if this outcome carries one
    #[inline]
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::DisplayText(text) => Some(text),
            Self::Error(_) => None,
        }
    }

    /// Whether this outcome is a failure
    #[inline]
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}
