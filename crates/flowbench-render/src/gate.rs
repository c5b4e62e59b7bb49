//! The size threshold policy
//!
//! Payloads above 1 MiB get one blocking question before anything is
//! materialized; payloads at or below the threshold render straight away.

use crate::prompt::ChoicePrompt;

/// The size-gating threshold, exactly 1 MiB
pub const MEGABYTE: u64 = 1024 * 1024;

/// Constant message shown when the user declines a large render
///
/// Cancellation is a terminal display outcome, not an error.
pub const CANCELLED_MESSAGE: &str =
    "Rendering cancelled due to size of data. Try saving and viewing in an external application.";

/// Which policy options a renderer can offer above the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateMode {
    /// Offer render-all, render-partial and cancel
    AllowPartial,
    /// Offer continue and cancel only
    FullOnly,
}

/// The policy chosen for a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Materialize the full content
    RenderAll,
    /// Materialize at most the first [`MEGABYTE`] bytes
    RenderPartial,
    /// Do not materialize; display the cancellation message
    Cancelled,
}

/// Floor megabyte count used in prompt messages
///
/// Truncating integer division, kept deliberately: the prompt only ever
/// showed the floored count and callers rely on the approximate figure.
#[inline]
#[must_use]
pub fn floor_megabytes(bytes: u64) -> u64 {
    bytes / MEGABYTE
}

/// Size threshold policy
///
/// Compares a probed size against the threshold and, when exceeded, asks
/// the host's dialog subsystem which way to proceed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeGate {
    threshold: u64,
}

impl SizeGate {
    /// Gate at the standard 1 MiB threshold
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            threshold: MEGABYTE,
        }
    }

    /// Gate at a custom threshold
    #[inline]
    #[must_use]
    pub fn with_threshold(threshold: u64) -> Self {
        Self { threshold }
    }

    /// The active threshold in bytes
    #[inline]
    #[must_use]
    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    /// Decide how to proceed for a payload of `size` bytes
    ///
    /// At or below the threshold the decision is [`GateDecision::RenderAll`]
    /// and the prompt is never consulted. Above it, the prompt is consulted
    /// exactly once; dismissal or any non-affirmative answer cancels.
    pub fn evaluate(
        &self,
        size: u64,
        mode: GateMode,
        title: &str,
        prompt: &dyn ChoicePrompt,
    ) -> GateDecision {
        if size <= self.threshold {
            return GateDecision::RenderAll;
        }

        let megabytes = floor_megabytes(size);
        match mode {
            GateMode::AllowPartial => {
                let message = format!(
                    "Result is approximately {megabytes} MB in size, \
                     there could be issues with rendering this\n\
                     Do you want to cancel, render all of the result, or only the first part?"
                );
                let options = ["Continue rendering", "Render partial", "Cancel"];
                match prompt.choose(title, &message, &options, 2) {
                    Some(0) => GateDecision::RenderAll,
                    Some(1) => GateDecision::RenderPartial,
                    _ => GateDecision::Cancelled,
                }
            }
            GateMode::FullOnly => {
                let message = format!(
                    "Result is approximately {megabytes} MB in size, \
                     there could be issues with rendering this\n\
                     Do you want to continue?"
                );
                let options = ["Continue", "Cancel"];
                match prompt.choose(title, &message, &options, 0) {
                    Some(0) => GateDecision::RenderAll,
                    _ => GateDecision::Cancelled,
                }
            }
        }
    }
}

impl Default for SizeGate {
    fn default() -> Self {
        Self::new()
    }
}
