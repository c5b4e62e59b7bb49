//! Renderer for MIME type `text/*`

use crate::gate::{GateDecision, GateMode, SizeGate, CANCELLED_MESSAGE};
use crate::mime::MimePattern;
use crate::outcome::RenderOutcome;
use crate::prompt::ChoicePrompt;
use crate::renderer::{materialize_prefix, materialize_string, Renderer, NOT_A_VALUE_MESSAGE};
use flowbench_data::DataHandle;

/// Plain-text renderer
///
/// Matches any MIME type containing `text/`. Above the 1 MiB threshold the
/// user chooses between rendering everything, rendering only the first
/// 1 MiB of raw bytes, or cancelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRenderer {
    pattern: MimePattern,
    gate: SizeGate,
}

impl TextRenderer {
    /// Create the plain-text renderer
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: MimePattern::contains("text/"),
            gate: SizeGate::new(),
        }
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TextRenderer {
    fn can_handle(&self, mime_type: &str) -> bool {
        self.pattern.matches(mime_type)
    }

    fn type_name(&self) -> &'static str {
        "Text"
    }

    fn render(&self, handle: &dyn DataHandle, prompt: &dyn ChoicePrompt) -> RenderOutcome {
        if !handle.kind().is_renderable() {
            tracing::error!(kind = ?handle.kind(), "{NOT_A_VALUE_MESSAGE}");
            return RenderOutcome::Error(NOT_A_VALUE_MESSAGE.to_string());
        }

        let size = match handle.size_in_bytes() {
            Ok(size) => size,
            Err(e) => {
                tracing::error!(error = %e, "failed to get the size of the data");
                return RenderOutcome::Error(format!(
                    "Failed to get the size of the data (see error log for more details): \n{e}"
                ));
            }
        };

        match self
            .gate
            .evaluate(size, GateMode::AllowPartial, "Rendering large result", prompt)
        {
            GateDecision::RenderAll => materialize_string(handle),
            GateDecision::RenderPartial => materialize_prefix(handle),
            GateDecision::Cancelled => RenderOutcome::DisplayText(CANCELLED_MESSAGE.to_string()),
        }
    }
}
