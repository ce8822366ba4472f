//! Values passed between the pipeline stages.

use serde::{Deserialize, Serialize};

use crate::error::StructuralMismatch;

/// An annotated span. Offsets are character offsets into the chunk that
/// produced the entity, not into the original document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub start: usize,
    pub end: usize,
    pub label: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kb_id: Option<String>,
}

impl Entity {
    pub fn new(start: usize, end: usize, label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
            text: text.into(),
            kb_id: None,
        }
    }

    pub fn with_kb_id(mut self, kb_id: impl Into<String>) -> Self {
        self.kb_id = Some(kb_id.into());
        self
    }

    /// Span length in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Output of one annotation call: the chunk's entities and its rendered markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatedChunk {
    pub entities: Vec<Entity>,
    pub fragment: String,
}

/// Per-chunk results accumulated by the driver, before merging.
#[derive(Debug, Clone, Default)]
pub struct ChunkedAnnotations {
    pub entities: Vec<Entity>,
    pub fragments: Vec<String>,
    pub chunk_count: usize,
}

/// A merged document plus the fragments that had to be skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedDocument {
    pub html: String,
    pub warnings: Vec<StructuralMismatch>,
}

/// Final result of a chunked run.
#[derive(Debug, Clone, Serialize)]
pub struct MergedResult {
    pub entities: Vec<Entity>,
    pub document: String,
    pub chunk_count: usize,
    #[serde(skip)]
    pub warnings: Vec<StructuralMismatch>,
}
