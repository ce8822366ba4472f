//! Merge previously rendered fragments.

use std::path::{Path, PathBuf};

use anyhow::Context;
use console::style;

use nerchunk::output::save_document;
use nerchunk::utils::html_escape;
use nerchunk::{merge_fragments_with_report, DEFAULT_MERGE_TITLE};

pub fn cmd_merge(
    fragments: &[PathBuf],
    title: Option<&str>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let contents = fragments
        .iter()
        .map(|path| {
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read fragment {}", path.display()))
        })
        .collect::<anyhow::Result<Vec<String>>>()?;

    let title = html_escape(title.unwrap_or(DEFAULT_MERGE_TITLE));
    let merged = merge_fragments_with_report(&contents, &title)?;

    for warning in &merged.warnings {
        eprintln!(
            "{} {} ({})",
            style("!").yellow(),
            warning,
            fragments[warning.position - 1].display()
        );
    }

    match output {
        Some(path) => {
            save_document(path, &merged.html)?;
            eprintln!(
                "{} Merged {} fragment(s) into {}",
                style("✓").green(),
                fragments.len() - merged.warnings.len(),
                path.display()
            );
        }
        None => print!("{}", merged.html),
    }
    Ok(())
}
