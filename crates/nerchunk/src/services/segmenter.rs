//! Splits documents into bounded chunks along natural-language boundaries.
//!
//! Paragraphs are packed into chunks first. A paragraph that is too large on
//! its own is packed sentence by sentence, and a sentence that is still too
//! large is cut into fixed character windows. Every chunk is at most
//! `max_chunk_size` characters.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{validate_max_chunk_size, PARAGRAPH_SEPARATOR, SENTENCE_SEPARATOR};
use crate::error::Result;
use crate::utils::text::{char_len, char_windows};

/// A whitespace run containing at least two newlines (one or more blank lines).
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("paragraph pattern should compile"));

/// Sentence-ending punctuation followed by whitespace.
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("sentence pattern should compile"));

/// Split text into trimmed, non-empty paragraphs.
pub fn split_into_paragraphs(text: &str) -> Vec<String> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a paragraph after each `.`, `!` or `?` that is followed by whitespace.
/// The punctuation stays with its sentence; the whitespace is dropped.
pub fn split_into_sentences(paragraph: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut last = 0;

    for m in SENTENCE_BREAK.find_iter(paragraph) {
        // Punctuation is ASCII, so start + 1 is a char boundary.
        let end = m.start() + 1;
        if end > last {
            sentences.push(&paragraph[last..end]);
        }
        last = m.end();
    }

    if last < paragraph.len() {
        sentences.push(&paragraph[last..]);
    }

    sentences
}

/// Chunk text into segments of at most `max_chunk_size` characters.
///
/// Text that already fits is returned unchanged as the only chunk. Larger
/// text is re-assembled from its paragraphs, so whitespace between
/// paragraphs and sentences is normalised to a single separator.
pub fn chunk_text(text: &str, max_chunk_size: usize) -> Result<Vec<String>> {
    validate_max_chunk_size(max_chunk_size)?;

    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    if char_len(text) <= max_chunk_size {
        return Ok(vec![text.to_string()]);
    }

    let mut chunks = Vec::new();
    let mut buffer = ChunkBuffer::new(PARAGRAPH_SEPARATOR, max_chunk_size);

    for paragraph in split_into_paragraphs(text) {
        let size = char_len(&paragraph);

        if size > max_chunk_size {
            buffer.flush_into(&mut chunks);
            chunk_paragraph(&paragraph, max_chunk_size, &mut chunks);
            continue;
        }

        if !buffer.fits(size) {
            buffer.flush_into(&mut chunks);
        }
        buffer.push(&paragraph, size);
    }

    buffer.flush_into(&mut chunks);

    tracing::debug!(
        "Chunked {} characters into {} chunks (max {})",
        char_len(text),
        chunks.len(),
        max_chunk_size
    );

    Ok(chunks)
}

/// Chunk one oversized paragraph by sentences, falling back to character windows.
fn chunk_paragraph(paragraph: &str, max_chunk_size: usize, chunks: &mut Vec<String>) {
    let mut buffer = ChunkBuffer::new(SENTENCE_SEPARATOR, max_chunk_size);

    for sentence in split_into_sentences(paragraph) {
        let size = char_len(sentence);

        if size > max_chunk_size {
            // Emit pending sentences first so chunks stay in document order.
            buffer.flush_into(chunks);
            chunks.extend(
                char_windows(sentence, max_chunk_size)
                    .into_iter()
                    .map(str::to_string),
            );
            continue;
        }

        if !buffer.fits(size) {
            buffer.flush_into(chunks);
        }
        buffer.push(sentence, size);
    }

    buffer.flush_into(chunks);
}

/// Accumulates whole units (paragraphs or sentences) up to a character budget.
struct ChunkBuffer {
    parts: Vec<String>,
    size: usize,
    separator: &'static str,
    separator_size: usize,
    max_size: usize,
}

impl ChunkBuffer {
    fn new(separator: &'static str, max_size: usize) -> Self {
        Self {
            parts: Vec::new(),
            size: 0,
            separator,
            separator_size: char_len(separator),
            max_size,
        }
    }

    /// Whether a unit of `unit_size` characters can join without exceeding the budget.
    fn fits(&self, unit_size: usize) -> bool {
        if self.parts.is_empty() {
            unit_size <= self.max_size
        } else {
            self.size + self.separator_size + unit_size <= self.max_size
        }
    }

    fn push(&mut self, unit: &str, unit_size: usize) {
        if !self.parts.is_empty() {
            self.size += self.separator_size;
        }
        self.size += unit_size;
        self.parts.push(unit.to_string());
    }

    fn flush_into(&mut self, chunks: &mut Vec<String>) {
        if self.parts.is_empty() {
            return;
        }
        chunks.push(self.parts.join(self.separator));
        self.parts.clear();
        self.size = 0;
    }
}
