//! The renderer contract and shared materialization steps

use crate::gate::MEGABYTE;
use crate::outcome::RenderOutcome;
use crate::prompt::ChoicePrompt;
use flowbench_data::{DataError, DataHandle};
use std::io::Read;

/// Message returned when a handle is neither a value nor a reference
pub(crate) const NOT_A_VALUE_MESSAGE: &str =
    "Failed to obtain the data to render: data is not a value or reference";

/// A MIME-type-specific renderer
///
/// Implementations decide how to present a handle's content as text. Every
/// failure path is absorbed into [`RenderOutcome::Error`]; `render` never
/// fails fatally.
pub trait Renderer {
    /// Whether this renderer handles `mime_type`
    fn can_handle(&self, mime_type: &str) -> bool;

    /// Display name for this renderer
    fn type_name(&self) -> &'static str;

    /// Render the handle's content, consulting `prompt` for oversized data
    fn render(&self, handle: &dyn DataHandle, prompt: &dyn ChoicePrompt) -> RenderOutcome;
}

/// Materialize the full content as display text
pub(crate) fn materialize_string(handle: &dyn DataHandle) -> RenderOutcome {
    match handle.as_string() {
        Ok(text) => RenderOutcome::DisplayText(text),
        Err(e) => {
            tracing::error!(error = %e, "failed to render data as string");
            RenderOutcome::Error(format!(
                "Failed to render data as string (see error log for more details): \n{e}"
            ))
        }
    }
}

/// Materialize at most the first [`MEGABYTE`] bytes as display text
///
/// The prefix is decoded lossily and is not guaranteed to be complete
/// text: it may cut a multibyte character at the boundary.
pub(crate) fn materialize_prefix(handle: &dyn DataHandle) -> RenderOutcome {
    match read_prefix(handle, MEGABYTE) {
        Ok(bytes) => RenderOutcome::DisplayText(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            tracing::error!(error = %e, "failed to render data as bytes");
            RenderOutcome::Error(format!(
                "Failed to render data as bytes (see error log for more details): \n{e}"
            ))
        }
    }
}

fn read_prefix(handle: &dyn DataHandle, limit: u64) -> Result<Vec<u8>, DataError> {
    let mut bytes = Vec::new();
    handle.open()?.take(limit).read_to_end(&mut bytes)?;
    Ok(bytes)
}
