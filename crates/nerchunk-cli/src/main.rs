//! nerchunk - chunked named entity recognition for large documents.
//!
//! Splits a document into paragraph-aligned chunks, annotates each chunk and
//! merges the rendered results into a single HTML document.

mod cli;
mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    let default_filter = if cli::is_verbose() {
        "nerchunk=info,nerchunk_annotate=info"
    } else {
        "nerchunk=warn,nerchunk_annotate=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    cli::run().await
}
