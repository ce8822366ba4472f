//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod inspect;
mod merge;
mod process;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "nerchunk")]
#[command(about = "Chunked named entity recognition for large documents")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Chunk, annotate and merge a document
    Process {
        /// Input text file (reads stdin when omitted or "-")
        file: Option<PathBuf>,
        /// Maximum characters per chunk
        #[arg(short, long)]
        max_chunk_size: Option<usize>,
        /// Title of the merged document
        #[arg(short, long)]
        title: Option<String>,
        /// Write the merged document to this file
        #[arg(short, long, conflicts_with = "output_dir")]
        output: Option<PathBuf>,
        /// Write a timestamped document into this directory
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Gazetteer JSON file of known entities
        #[arg(short, long)]
        gazetteer: Option<PathBuf>,
        /// Transliterate Cyrillic input to Latin before annotating (bg, kk, me, mk, ru, sr, uk)
        #[arg(long, value_name = "LANG")]
        transliterate: Option<String>,
        /// Print entities as JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Show how a document would be chunked
    Chunk {
        /// Input text file (reads stdin when omitted or "-")
        file: Option<PathBuf>,
        /// Maximum characters per chunk
        #[arg(short, long)]
        max_chunk_size: Option<usize>,
    },

    /// Show the paragraphs of a document
    Paragraphs {
        /// Input text file (reads stdin when omitted or "-")
        file: Option<PathBuf>,
    },

    /// Merge previously rendered HTML fragments into one document
    Merge {
        /// Fragment files, in order
        #[arg(required = true)]
        fragments: Vec<PathBuf>,
        /// Title of the merged document
        #[arg(short, long)]
        title: Option<String>,
        /// Write the merged document to this file (prints to stdout otherwise)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)
            .await
            .map_err(anyhow::Error::msg)?,
        None => Config::load().await,
    };

    match cli.command {
        Commands::Process {
            file,
            max_chunk_size,
            title,
            output,
            output_dir,
            gazetteer,
            transliterate,
            json,
            no_progress,
        } => process::cmd_process(
            &config,
            process::ProcessArgs {
                file,
                max_chunk_size,
                title,
                output,
                output_dir,
                gazetteer,
                transliterate,
                json,
                show_progress: !no_progress,
            },
        ),
        Commands::Chunk {
            file,
            max_chunk_size,
        } => inspect::cmd_chunk(&config, file.as_deref(), max_chunk_size),
        Commands::Paragraphs { file } => inspect::cmd_paragraphs(&config, file.as_deref()),
        Commands::Merge {
            fragments,
            title,
            output,
        } => merge::cmd_merge(&fragments, title.as_deref(), output.as_deref()),
    }
}
