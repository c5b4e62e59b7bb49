//! FlowBench Renderers
//!
//! The size-gated rendering core:
//! - Decides, per data handle and MIME type, how to present content as text
//! - Trades completeness against responsiveness for large payloads
//! - Absorbs every failure into a displayable outcome
//!
//! Rendering is a single synchronous call. When a payload crosses the
//! 1 MiB threshold the flow suspends on one blocking question to the
//! host's dialog subsystem (the [`ChoicePrompt`] boundary) and resumes with
//! the chosen policy: render everything, render a bounded prefix (plain
//! text only), or cancel. Cancellation is a valid terminal outcome, not an
//! error.
//!
//! # Example
//!
//! ```rust
//! use flowbench_data::InMemoryHandle;
//! use flowbench_render::{ChoicePrompt, Renderer, RendererRegistry};
//!
//! /// A host dialog that always picks the default option.
//! struct DefaultChoice;
//!
//! impl ChoicePrompt for DefaultChoice {
//!     fn choose(&self, _: &str, _: &str, _: &[&str], default: usize) -> Option<usize> {
//!         Some(default)
//!     }
//! }
//!
//! let registry = RendererRegistry::with_defaults();
//! let handle = InMemoryHandle::from_text("result");
//! let outcome = registry.render("text/plain", &handle, &DefaultChoice);
//! assert_eq!(outcome.text(), Some("result"));
//! ```

pub mod gate;
pub mod mime;
pub mod outcome;
pub mod prompt;
pub mod registry;
pub mod renderer;
pub mod text;
pub mod xml;

// Re-exports
pub use gate::{floor_megabytes, GateDecision, GateMode, SizeGate, CANCELLED_MESSAGE, MEGABYTE};
pub use mime::MimePattern;
pub use outcome::RenderOutcome;
pub use prompt::ChoicePrompt;
pub use registry::RendererRegistry;
pub use renderer::Renderer;
pub use text::TextRenderer;
pub use xml::XmlRenderer;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for rendering workflow results
    pub use crate::{
        ChoicePrompt, GateDecision, GateMode, RenderOutcome, Renderer, RendererRegistry, SizeGate,
        TextRenderer, XmlRenderer, MEGABYTE,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
