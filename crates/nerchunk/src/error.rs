//! Error types shared across the chunking pipeline.

use thiserror::Error;

/// Errors raised by the segmenter, driver and merger.
#[derive(Debug, Error)]
pub enum ChunkError {
    #[error("max_chunk_size must be at least {minimum} characters (got {max_chunk_size})")]
    InvalidConfiguration {
        max_chunk_size: usize,
        minimum: usize,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error(transparent)]
    Annotation(#[from] AnnotationError),

    #[error(transparent)]
    Transliteration(#[from] TransliterationError),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from annotation capabilities.
#[derive(Debug, Error)]
pub enum AnnotationError {
    #[error("Annotation failed: {0}")]
    Failed(String),
}

/// Errors from transliteration capabilities.
#[derive(Debug, Error)]
pub enum TransliterationError {
    #[error("Unsupported language code '{code}'. Supported codes: {supported}")]
    UnsupportedLanguage { code: String, supported: String },
}

/// A rendered fragment that does not follow the style block + entities
/// container convention. Reported as a warning; the merge carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Fragment {position} doesn't match expected markup pattern and will be skipped")]
pub struct StructuralMismatch {
    /// 1-based position of the fragment in the merge input.
    pub position: usize,
}

pub type Result<T> = std::result::Result<T, ChunkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_mentions_values() {
        let err = ChunkError::InvalidConfiguration {
            max_chunk_size: 50,
            minimum: 100,
        };
        let message = err.to_string();
        assert!(message.contains("at least 100"));
        assert!(message.contains("50"));
    }

    #[test]
    fn test_annotation_error_is_transparent() {
        let err: ChunkError = AnnotationError::Failed("model crashed".to_string()).into();
        assert_eq!(err.to_string(), "Annotation failed: model crashed");
    }

    #[test]
    fn test_structural_mismatch_position() {
        let warning = StructuralMismatch { position: 2 };
        assert!(warning.to_string().starts_with("Fragment 2 "));
    }
}
