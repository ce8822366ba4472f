//! Chunk and paragraph inspection commands.

use std::path::Path;

use console::style;

use nerchunk::utils::{char_len, preview};
use nerchunk::{chunk_text, split_into_paragraphs};

use crate::cli::helpers::{format_bytes, load_text};
use crate::config::Config;

const PREVIEW_CHARS: usize = 60;

pub fn cmd_chunk(
    config: &Config,
    file: Option<&Path>,
    max_chunk_size: Option<usize>,
) -> anyhow::Result<()> {
    let text = load_text(file, config.max_file_size())?;
    let max_chunk_size = max_chunk_size.unwrap_or(config.chunking.max_chunk_size);

    let chunks = chunk_text(&text, max_chunk_size)?;

    println!(
        "{} {} characters ({}) in {} chunk(s) of at most {} characters",
        style("→").cyan(),
        char_len(&text),
        format_bytes(text.len() as u64),
        chunks.len(),
        max_chunk_size
    );
    for (i, chunk) in chunks.iter().enumerate() {
        println!(
            "  {:>4}  {:>8}  {}",
            i + 1,
            char_len(chunk),
            style(preview(chunk, PREVIEW_CHARS)).dim()
        );
    }
    Ok(())
}

pub fn cmd_paragraphs(config: &Config, file: Option<&Path>) -> anyhow::Result<()> {
    let text = load_text(file, config.max_file_size())?;
    let paragraphs = split_into_paragraphs(&text);

    println!(
        "{} {} paragraph(s)",
        style("→").cyan(),
        paragraphs.len()
    );
    for (i, paragraph) in paragraphs.iter().enumerate() {
        println!(
            "  {:>4}  {:>8}  {}",
            i + 1,
            char_len(paragraph),
            style(preview(paragraph, PREVIEW_CHARS)).dim()
        );
    }
    Ok(())
}
