//! Named Entity Recognition annotator: wraps a `NerBackend` behind the `Annotator` trait.

use nerchunk::{AnnotatedChunk, AnnotationError, Annotator};

use crate::services::ner::{NerBackend, RegexNerBackend};
use crate::services::render::EntityRenderer;

/// Annotator that extracts named entities from a chunk and renders them.
///
/// Accepts any `NerBackend` implementation. Defaults to `RegexNerBackend`;
/// model-backed backends can be swapped in via `with_backend()`.
pub struct NerAnnotator {
    backend: Box<dyn NerBackend>,
    renderer: EntityRenderer,
}

impl NerAnnotator {
    pub fn new() -> Self {
        Self::with_backend(Box::new(RegexNerBackend::new()))
    }

    pub fn with_backend(backend: Box<dyn NerBackend>) -> Self {
        Self {
            backend,
            renderer: EntityRenderer::default(),
        }
    }

    pub fn with_renderer(mut self, renderer: EntityRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn backend_id(&self) -> &str {
        self.backend.backend_id()
    }
}

impl Default for NerAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl Annotator for NerAnnotator {
    fn display_name(&self) -> &str {
        "Named Entity Recognition"
    }

    fn annotate(&self, text: &str) -> Result<AnnotatedChunk, AnnotationError> {
        let result = self.backend.extract(text);
        tracing::debug!(
            "{} backend found {} entities",
            self.backend.backend_id(),
            result.entities.len()
        );

        let fragment = self.renderer.render(text, &result.entities);
        Ok(AnnotatedChunk {
            entities: result.entities,
            fragment,
        })
    }
}
