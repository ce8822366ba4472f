//! Drives an annotator over the chunks of a document and merges the results.

use std::path::PathBuf;

use crate::config::{ChunkingConfig, DEFAULT_MAX_CHUNK_SIZE};
use crate::error::{ChunkError, Result};
use crate::models::{ChunkedAnnotations, MergedResult};
use crate::output::save_document;
use crate::services::annotator::Annotator;
use crate::services::merger::merge_fragments_with_report;
use crate::services::segmenter::chunk_text;
use crate::services::transliterate::{validate_language, Transliterator};

/// Progress sink called with `(completed_chunks, total_chunks)`: once with
/// zero before the first chunk, then after every completed chunk.
pub type ProgressCallback<'a> = &'a mut dyn FnMut(usize, usize);

/// Chunk `text` and annotate each chunk in order.
///
/// Entities and fragments are accumulated in chunk order. An annotator
/// failure aborts the run and is returned as-is; nothing accumulated so far
/// is kept.
pub fn annotate_chunks(
    annotator: Option<&dyn Annotator>,
    text: &str,
    max_chunk_size: usize,
    mut progress: Option<ProgressCallback<'_>>,
) -> Result<ChunkedAnnotations> {
    let annotator = require_annotator(annotator)?;
    require_text(text)?;

    let chunks = chunk_text(text, max_chunk_size)?;
    let total = chunks.len();

    tracing::info!(
        "{}: annotating {} characters in {} chunk(s)",
        annotator.display_name(),
        text.chars().count(),
        total
    );

    if let Some(report) = progress.as_deref_mut() {
        report(0, total);
    }

    let mut entities = Vec::new();
    let mut fragments = Vec::with_capacity(total);

    for (i, chunk) in chunks.iter().enumerate() {
        tracing::debug!(
            "Annotating chunk {}/{} ({} characters)",
            i + 1,
            total,
            chunk.chars().count()
        );

        let annotated = annotator.annotate(chunk)?;
        entities.extend(annotated.entities);
        fragments.push(annotated.fragment);

        if let Some(report) = progress.as_deref_mut() {
            report(i + 1, total);
        }
    }

    Ok(ChunkedAnnotations {
        entities,
        fragments,
        chunk_count: total,
    })
}

/// Chunk, annotate and merge `text` with default settings for everything but
/// the chunk size.
pub fn process_in_chunks(
    annotator: Option<&dyn Annotator>,
    text: &str,
    max_chunk_size: usize,
    progress: Option<ProgressCallback<'_>>,
) -> Result<MergedResult> {
    ChunkProcessor::new(ChunkingConfig::with_max_chunk_size(max_chunk_size)).process(
        annotator,
        text,
        progress,
    )
}

/// Configurable chunked pipeline: optional transliteration before chunking
/// and optional persistence of the merged document afterwards.
pub struct ChunkProcessor<'t> {
    config: ChunkingConfig,
    transliteration: Option<(&'t dyn Transliterator, String)>,
    output_path: Option<PathBuf>,
}

impl Default for ChunkProcessor<'_> {
    fn default() -> Self {
        Self::new(ChunkingConfig::default())
    }
}

impl<'t> ChunkProcessor<'t> {
    pub fn new(config: ChunkingConfig) -> Self {
        Self {
            config,
            transliteration: None,
            output_path: None,
        }
    }

    pub fn config(&self) -> &ChunkingConfig {
        &self.config
    }

    /// Transliterate input to Latin script with `transliterator` before chunking.
    /// Fails immediately when `lang` is not a supported code.
    pub fn with_transliterator(
        mut self,
        transliterator: &'t dyn Transliterator,
        lang: &str,
    ) -> Result<Self> {
        validate_language(lang)?;
        self.transliteration = Some((transliterator, lang.to_string()));
        Ok(self)
    }

    /// Write the merged document to `path` after a successful run.
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Run the whole pipeline on `text`.
    pub fn process(
        &self,
        annotator: Option<&dyn Annotator>,
        text: &str,
        progress: Option<ProgressCallback<'_>>,
    ) -> Result<MergedResult> {
        let annotator = require_annotator(annotator)?;
        require_text(text)?;
        self.config.validate()?;

        let transliterated;
        let text = match &self.transliteration {
            Some((transliterator, lang)) => {
                tracing::debug!(
                    "Transliterating input to Latin ({}, via {})",
                    lang,
                    transliterator.backend_id()
                );
                transliterated = transliterator.to_latin(text, lang)?;
                transliterated.as_str()
            }
            None => text,
        };

        let annotations =
            annotate_chunks(Some(annotator), text, self.config.max_chunk_size, progress)?;
        let merged = merge_fragments_with_report(&annotations.fragments, &self.config.title)?;

        if let Some(path) = &self.output_path {
            save_document(path, &merged.html)?;
        }

        tracing::info!(
            "Found {} entities across {} chunk(s)",
            annotations.entities.len(),
            annotations.chunk_count
        );

        Ok(MergedResult {
            entities: annotations.entities,
            document: merged.html,
            chunk_count: annotations.chunk_count,
            warnings: merged.warnings,
        })
    }
}

/// Convenience for callers that want the library default chunk size.
pub fn process_with_defaults(annotator: &dyn Annotator, text: &str) -> Result<MergedResult> {
    process_in_chunks(Some(annotator), text, DEFAULT_MAX_CHUNK_SIZE, None)
}

fn require_annotator(annotator: Option<&dyn Annotator>) -> Result<&dyn Annotator> {
    annotator.ok_or_else(|| ChunkError::InvalidInput("annotator cannot be None".to_string()))
}

fn require_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(ChunkError::InvalidInput("text cannot be empty".to_string()));
    }
    Ok(())
}
