//! Chunking configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ChunkError, Result};

/// Default maximum chunk size in characters.
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 100_000;

/// Smallest accepted `max_chunk_size`.
pub const MIN_CHUNK_SIZE: usize = 100;

/// Title used by `merge_fragments` callers that have no better one.
pub const DEFAULT_MERGE_TITLE: &str = "NER Output";

/// Title given to documents produced by the chunked pipeline.
pub const DEFAULT_PROCESSED_TITLE: &str = "Chunked NER Output";

/// Separator placed between paragraphs packed into one chunk.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Separator placed between sentences packed into one chunk.
pub const SENTENCE_SEPARATOR: &str = " ";

/// Settings for a chunked annotation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Maximum characters (code points) per chunk.
    #[serde(default = "default_max_chunk_size")]
    pub max_chunk_size: usize,
    /// Title of the merged document.
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_max_chunk_size() -> usize {
    DEFAULT_MAX_CHUNK_SIZE
}

fn default_title() -> String {
    DEFAULT_PROCESSED_TITLE.to_string()
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: default_max_chunk_size(),
            title: default_title(),
        }
    }
}

impl ChunkingConfig {
    /// Config with an explicit chunk size and the default title.
    pub fn with_max_chunk_size(max_chunk_size: usize) -> Self {
        Self {
            max_chunk_size,
            ..Default::default()
        }
    }

    /// Reject chunk sizes below [`MIN_CHUNK_SIZE`].
    pub fn validate(&self) -> Result<()> {
        validate_max_chunk_size(self.max_chunk_size)
    }
}

pub(crate) fn validate_max_chunk_size(max_chunk_size: usize) -> Result<()> {
    if max_chunk_size < MIN_CHUNK_SIZE {
        return Err(ChunkError::InvalidConfiguration {
            max_chunk_size,
            minimum: MIN_CHUNK_SIZE,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_is_accepted() {
        assert!(ChunkingConfig::with_max_chunk_size(MIN_CHUNK_SIZE)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_below_minimum_is_rejected() {
        let err = ChunkingConfig::with_max_chunk_size(99).validate().unwrap_err();
        assert!(matches!(
            err,
            ChunkError::InvalidConfiguration {
                max_chunk_size: 99,
                minimum: MIN_CHUNK_SIZE
            }
        ));
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: ChunkingConfig = serde_json::from_str(r#"{"max_chunk_size": 4000}"#).unwrap();
        assert_eq!(config.max_chunk_size, 4000);
        assert_eq!(config.title, DEFAULT_PROCESSED_TITLE);
    }

    #[test]
    fn test_default_uses_constants() {
        let config = ChunkingConfig::default();
        assert_eq!(config.max_chunk_size, DEFAULT_MAX_CHUNK_SIZE);
        assert_eq!(config.title, DEFAULT_PROCESSED_TITLE);
    }
}
