//! Chunked annotation of a whole document.

use std::path::PathBuf;

use anyhow::Context;
use console::style;

use nerchunk::output::timestamped_output_path;
use nerchunk::utils::html_escape;
use nerchunk::{split_into_paragraphs, ChunkProcessor, ChunkingConfig, MergedResult};
use nerchunk_annotate::{CyrillicTransliterator, Gazetteer, NerAnnotator, RegexNerBackend};

use crate::cli::helpers::load_text;
use crate::cli::progress::ChunkProgress;
use crate::config::Config;

/// Entities shown in the summary table.
const MAX_LISTED_ENTITIES: usize = 100;

pub struct ProcessArgs {
    pub file: Option<PathBuf>,
    pub max_chunk_size: Option<usize>,
    pub title: Option<String>,
    pub output: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub gazetteer: Option<PathBuf>,
    pub transliterate: Option<String>,
    pub json: bool,
    pub show_progress: bool,
}

pub fn cmd_process(config: &Config, args: ProcessArgs) -> anyhow::Result<()> {
    let text = load_text(args.file.as_deref(), config.max_file_size())?;

    let chunking = ChunkingConfig {
        max_chunk_size: args
            .max_chunk_size
            .unwrap_or(config.chunking.max_chunk_size),
        title: html_escape(args.title.as_deref().unwrap_or(&config.chunking.title)),
    };

    let output_path = match (args.output, args.output_dir) {
        (Some(path), _) => path,
        (None, Some(dir)) => timestamped_output_path(&dir),
        (None, None) => timestamped_output_path(&config.output_dir()),
    };

    let backend = match args.gazetteer.or_else(|| config.gazetteer_path()) {
        Some(path) => {
            let gazetteer = Gazetteer::load(&path)
                .with_context(|| format!("Failed to load gazetteer {}", path.display()))?;
            RegexNerBackend::with_gazetteer(gazetteer)
        }
        None => RegexNerBackend::new(),
    };
    let annotator = NerAnnotator::with_backend(Box::new(backend));

    let paragraph_count = split_into_paragraphs(&text).len();
    let transliterator = CyrillicTransliterator::new();
    let mut processor = ChunkProcessor::new(chunking).with_output_path(&output_path);
    if let Some(lang) = args.transliterate.as_deref() {
        processor = processor.with_transliterator(&transliterator, lang)?;
    }

    let progress = ChunkProgress::new(args.show_progress && !args.json);
    let mut report = |completed: usize, total: usize| progress.update(completed, total);
    let result = processor.process(Some(&annotator), &text, Some(&mut report));
    progress.finish();
    let result = result?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result.entities)?);
        return Ok(());
    }

    print_summary(&result, paragraph_count);
    println!(
        "{} Saved merged document to {}",
        style("✓").green(),
        output_path.display()
    );
    Ok(())
}

fn print_summary(result: &MergedResult, paragraph_count: usize) {
    for warning in &result.warnings {
        println!("{} {}", style("!").yellow(), warning);
    }

    if result.entities.is_empty() {
        println!("{} No entities found", style("!").yellow());
    } else {
        println!(
            "{:<40} | {:<8} | {:>7} | {:>7}",
            style("Entity").bold(),
            style("Label").bold(),
            style("Start").bold(),
            style("End").bold()
        );
        for entity in result.entities.iter().take(MAX_LISTED_ENTITIES) {
            let kb = entity
                .kb_id
                .as_deref()
                .map(|id| format!(" ({})", id))
                .unwrap_or_default();
            println!(
                "{:<40} | {:<8} | {:>7} | {:>7}{}",
                nerchunk::utils::preview(&entity.text, 40),
                entity.label,
                entity.start,
                entity.end,
                kb
            );
        }
        if result.entities.len() > MAX_LISTED_ENTITIES {
            println!(
                "  ... and {} more",
                result.entities.len() - MAX_LISTED_ENTITIES
            );
        }
    }

    println!();
    println!(
        "{} {} entities in {} chunk(s), {} paragraph(s)",
        style("→").cyan(),
        result.entities.len(),
        result.chunk_count,
        paragraph_count
    );
}
