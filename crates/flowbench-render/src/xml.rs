//! Renderer for MIME type `text/xml`

use crate::gate::{GateDecision, GateMode, SizeGate, CANCELLED_MESSAGE};
use crate::mime::MimePattern;
use crate::outcome::RenderOutcome;
use crate::prompt::ChoicePrompt;
use crate::renderer::{materialize_string, Renderer, NOT_A_VALUE_MESSAGE};
use flowbench_data::DataHandle;

/// XML renderer
///
/// Matches any MIME type containing the literal `text/xml` — stricter than
/// the display name suggests; `application/xml` is not handled. Above the
/// 1 MiB threshold the only options are continue and cancel; there is no
/// partial mode for XML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlRenderer {
    pattern: MimePattern,
    gate: SizeGate,
}

impl XmlRenderer {
    /// Create the XML renderer
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: MimePattern::contains("text/xml"),
            gate: SizeGate::new(),
        }
    }
}

impl Default for XmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for XmlRenderer {
    fn can_handle(&self, mime_type: &str) -> bool {
        self.pattern.matches(mime_type)
    }

    fn type_name(&self) -> &'static str {
        "XML tree"
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
            .evaluate(size, GateMode::FullOnly, "Render this as XML?", prompt)
        {
            GateDecision::RenderAll => materialize_string(handle),
            // FullOnly never yields RenderPartial; treat it as cancel if it ever did.
            GateDecision::RenderPartial | GateDecision::Cancelled => {
                RenderOutcome::DisplayText(CANCELLED_MESSAGE.to_string())
            }
        }
    }
}
