//! nerchunk - chunked named entity recognition for large documents.
//!
//! Entity recognition engines only handle bounded input. This crate splits a
//! document into paragraph-aligned chunks, runs an injected [`Annotator`] on
//! each one, and merges the rendered fragments back into a single document.

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod services;
pub mod utils;

pub use config::{
    ChunkingConfig, DEFAULT_MAX_CHUNK_SIZE, DEFAULT_MERGE_TITLE, DEFAULT_PROCESSED_TITLE,
    MIN_CHUNK_SIZE,
};
pub use error::{AnnotationError, ChunkError, Result, StructuralMismatch, TransliterationError};
pub use models::{AnnotatedChunk, ChunkedAnnotations, Entity, MergedDocument, MergedResult};
pub use services::{
    annotate_chunks, chunk_text, merge_fragments, merge_fragments_with_report, process_in_chunks,
    split_into_paragraphs, validate_language, Annotator, ChunkProcessor, ProgressCallback,
    Transliterator,
};
