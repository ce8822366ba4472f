//! Configuration management for nerchunk using the prefer crate.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use nerchunk::ChunkingConfig;

/// Default input size ceiling for `process`, `chunk` and `paragraphs`.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Environment variable overriding `chunking.max_chunk_size`.
pub const MAX_CHUNK_SIZE_ENV: &str = "NERCHUNK_MAX_CHUNK_SIZE";

/// Environment variable overriding `chunking.title`.
pub const TITLE_ENV: &str = "NERCHUNK_TITLE";

/// Subdirectory of the user's documents folder used for generated output.
const DEFAULT_OUTPUT_SUBDIR: &str = "nerchunk/outputs";

/// Configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Chunk size and merged document title.
    #[serde(default)]
    pub chunking: ChunkingConfig,
    /// Directory for timestamped output documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
    /// Largest input file accepted, in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_file_size: Option<u64>,
    /// Gazetteer JSON file for the built-in annotator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gazetteer: Option<String>,
    /// Path to the config file this was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration using prefer crate for discovery.
    /// Falls back to defaults (with environment overrides) when no file is found
    /// or the discovered file cannot be parsed.
    pub async fn load() -> Self {
        match prefer::load("nerchunk").await {
            Ok(pref_config) => match pref_config.source_path() {
                Some(path) => match Self::load_from_path(path).await {
                    Ok(config) => config,
                    Err(e) => {
                        tracing::warn!("{}; using defaults", e);
                        Self::default_with_env()
                    }
                },
                None => Self::default_with_env(),
            },
            Err(_) => Self::default_with_env(),
        }
    }

    /// Create a default config with environment variable overrides applied.
    pub fn default_with_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply `NERCHUNK_MAX_CHUNK_SIZE` and `NERCHUNK_TITLE` from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up by environment variable name.
    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(val) = lookup(MAX_CHUNK_SIZE_ENV) {
            match val.trim().parse() {
                Ok(size) => self.chunking.max_chunk_size = size,
                Err(_) => tracing::warn!("Ignoring invalid {}: {}", MAX_CHUNK_SIZE_ENV, val),
            }
        }
        if let Some(title) = lookup(TITLE_ENV).filter(|t| !t.trim().is_empty()) {
            self.chunking.title = title;
        }
        self
    }

    /// Load configuration from a specific file path.
    /// Supports JSON, TOML and YAML based on file extension.
    pub async fn load_from_path(path: &Path) -> Result<Self, String> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read config file {}: {}", path.display(), e))?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

        let mut config: Config = match ext {
            "toml" => toml::from_str(&contents)
                .map_err(|e| format!("Failed to parse TOML config: {}", e))?,
            "yaml" | "yml" => serde_yaml::from_str(&contents)
                .map_err(|e| format!("Failed to parse YAML config: {}", e))?,
            _ => serde_json::from_str(&contents)
                .map_err(|e| format!("Failed to parse JSON config: {}", e))?,
        };

        config.source_path = Some(path.to_path_buf());
        let config = config.with_env_overrides();
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Get the base directory for resolving relative paths.
    /// Returns the config file's parent directory if available, otherwise the CWD.
    pub fn base_dir(&self) -> PathBuf {
        self.source_path
            .as_ref()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve a path that may be relative to the config file.
    /// - Absolute paths are returned as-is
    /// - Paths starting with ~ are expanded
    /// - Relative paths are resolved relative to the config file location
    pub fn resolve_path(&self, path_str: &str) -> PathBuf {
        let expanded = shellexpand::tilde(path_str);
        let path = Path::new(expanded.as_ref());

        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir().join(path)
        }
    }

    /// Directory for generated output documents.
    pub fn output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => self.resolve_path(dir),
            None => dirs::document_dir()
                .or_else(dirs::home_dir)
                .unwrap_or_else(|| PathBuf::from("."))
                .join(DEFAULT_OUTPUT_SUBDIR),
        }
    }

    pub fn max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(DEFAULT_MAX_FILE_SIZE)
    }

    pub fn gazetteer_path(&self) -> Option<PathBuf> {
        self.gazetteer.as_deref().map(|p| self.resolve_path(p))
    }
}
