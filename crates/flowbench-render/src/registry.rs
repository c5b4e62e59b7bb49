//! Renderer selection by MIME type

use crate::outcome::RenderOutcome;
use crate::prompt::ChoicePrompt;
use crate::renderer::Renderer;
use crate::text::TextRenderer;
use crate::xml::XmlRenderer;
use flowbench_data::DataHandle;

/// Ordered collection of renderers
///
/// Selection walks the registration order and the first renderer whose
/// matcher accepts the MIME type wins.
#[derive(Default)]
pub struct RendererRegistry {
    renderers: Vec<Box<dyn Renderer>>,
}

impl RendererRegistry {
    /// Empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the standard renderers (XML before plain text)
    ///
    /// The plain-text matcher also accepts `text/xml`, so the stricter XML
    /// renderer must come first.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(XmlRenderer::new()));
        registry.register(Box::new(TextRenderer::new()));
        registry
    }

    /// Add a renderer at the end of the selection order
    pub fn register(&mut self, renderer: Box<dyn Renderer>) {
        self.renderers.push(renderer);
    }

    /// Number of registered renderers
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    /// Whether the registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    /// First renderer that handles `mime_type`
    #[must_use]
    pub fn find(&self, mime_type: &str) -> Option<&dyn Renderer> {
        self.renderers
            .iter()
            .find(|renderer| renderer.can_handle(mime_type))
            .map(|renderer| &**renderer)
    }

    /// Render `handle` with the first renderer matching `mime_type`
    pub fn render(
        &self,
        mime_type: &str,
        handle: &dyn DataHandle,
        prompt: &dyn ChoicePrompt,
    ) -> RenderOutcome {
        match self.find(mime_type) {
            Some(renderer) => renderer.render(handle, prompt),
            None => RenderOutcome::Error(format!("No renderer found for MIME type {mime_type}")),
        }
    }
}

impl std::fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.renderers.iter().map(|r| r.type_name()).collect();
        f.debug_struct("RendererRegistry")
            .field("renderers", &names)
            .finish()
    }
}
