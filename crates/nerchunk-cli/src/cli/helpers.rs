//! Shared helper functions for CLI commands.

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context};

/// Read a document from `path`, or from stdin when `path` is `None` or `-`.
///
/// Files larger than `max_size` bytes are refused. Input that is not valid
/// UTF-8 is decoded as Latin-1.
pub fn load_text(path: Option<&Path>, max_size: u64) -> anyhow::Result<String> {
    let bytes = match path.filter(|p| p.as_os_str() != "-") {
        Some(path) => {
            let size = std::fs::metadata(path)
                .with_context(|| format!("Failed to read {}", path.display()))?
                .len();
            if size > max_size {
                bail!(
                    "{} is too large ({} bytes, limit {} bytes)",
                    path.display(),
                    size,
                    max_size
                );
            }
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?
        }
        None => {
            let mut bytes = Vec::new();
            std::io::stdin()
                .take(max_size + 1)
                .read_to_end(&mut bytes)
                .context("Failed to read stdin")?;
            if bytes.len() as u64 > max_size {
                bail!("stdin input exceeds limit of {} bytes", max_size);
            }
            bytes
        }
    };

    Ok(decode_text(bytes))
}

/// UTF-8 when valid, otherwise Latin-1.
pub fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::info!("Input is not valid UTF-8, decoding as Latin-1");
            e.into_bytes().into_iter().map(char::from).collect()
        }
    }
}

/// Format bytes as human-readable size.
pub fn format_bytes(bytes: u64) -> String {
    if bytes >= 1_000_000 {
        format!("{:.2} MB", bytes as f64 / 1_000_000.0)
    } else if bytes >= 1_000 {
        format!("{:.2} KB", bytes as f64 / 1_000.0)
    } else {
        format!("{} bytes", bytes)
    }
}
