//! Annotator trait: the opaque entity-recognition capability driven per chunk.

use crate::error::AnnotationError;
use crate::models::AnnotatedChunk;

/// A backend that annotates one bounded chunk of text.
///
/// Implementations return the chunk's entities (with chunk-relative offsets)
/// together with a rendered fragment that already carries the entity
/// highlighting. The driver calls `annotate` once per chunk, sequentially.
pub trait Annotator: Send + Sync {
    /// Human-readable name for progress output.
    fn display_name(&self) -> &str {
        "Annotator"
    }

    /// Annotate a single chunk.
    fn annotate(&self, text: &str) -> Result<AnnotatedChunk, AnnotationError>;
}

impl<F> Annotator for F
where
    F: Fn(&str) -> Result<AnnotatedChunk, AnnotationError> + Send + Sync,
{
    fn annotate(&self, text: &str) -> Result<AnnotatedChunk, AnnotationError> {
        self(text)
    }
}
