//! Writing merged documents to disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ChunkError, Result};

/// Prefix of generated output filenames.
pub const OUTPUT_FILE_PREFIX: &str = "ner_output_";

/// Write `html` to `path` as UTF-8, creating missing parent directories.
pub fn save_document(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }
    fs::write(path, html).map_err(|e| io_error(path, e))?;
    tracing::info!("Wrote {} bytes to {}", html.len(), path.display());
    Ok(())
}

/// `dir/ner_output_YYYYMMDD_HHMMSS.html` for the current local time.
pub fn timestamped_output_path(dir: &Path) -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    dir.join(format!("{}{}.html", OUTPUT_FILE_PREFIX, timestamp))
}

fn io_error(path: &Path, source: std::io::Error) -> ChunkError {
    ChunkError::Io {
        path: path.display().to_string(),
        source,
    }
}
