//! Gazetteer: a user-supplied list of known entities with knowledge-base ids.
//!
//! Stored as JSON:
//!
//! ```json
//! [
//!   { "text": "Nikola Tesla", "label": "PERSON", "kb_id": "Q9036" },
//!   { "text": "Beograd", "label": "LOC" }
//! ]
//! ```

use std::collections::HashMap;
use std::path::Path;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Compiled size ceiling for the gazetteer alternation.
const PATTERN_SIZE_LIMIT: usize = 64 * 1024 * 1024;

/// One known surface form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GazetteerEntry {
    pub text: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kb_id: Option<String>,
}

/// Errors from loading or compiling a gazetteer.
#[derive(Debug, Error)]
pub enum GazetteerError {
    #[error("Failed to read gazetteer {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse gazetteer: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to compile gazetteer pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// A single gazetteer hit, in byte offsets.
#[derive(Debug, Clone, Copy)]
pub struct GazetteerMatch<'g> {
    pub start: usize,
    pub end: usize,
    pub entry: &'g GazetteerEntry,
}

/// Matches known entity names in text.
#[derive(Debug)]
pub struct Gazetteer {
    entries: Vec<GazetteerEntry>,
    by_text: HashMap<String, usize>,
    pattern: Option<Regex>,
}

impl Gazetteer {
    /// Build a gazetteer. Entries with empty text are dropped; when the same
    /// text appears twice the first entry wins.
    pub fn new(entries: Vec<GazetteerEntry>) -> Result<Self, GazetteerError> {
        let entries: Vec<GazetteerEntry> = entries
            .into_iter()
            .filter(|e| !e.text.trim().is_empty())
            .collect();

        let mut by_text = HashMap::new();
        for (i, entry) in entries.iter().enumerate() {
            by_text.entry(entry.text.clone()).or_insert(i);
        }

        let pattern = if by_text.is_empty() {
            None
        } else {
            // Longest first so the alternation prefers "Novi Sad" over "Novi".
            let mut texts: Vec<&str> = by_text.keys().map(String::as_str).collect();
            texts.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
            let alternation = texts
                .iter()
                .map(|t| bounded(t))
                .collect::<Vec<_>>()
                .join("|");
            Some(
                RegexBuilder::new(&alternation)
                    .size_limit(PATTERN_SIZE_LIMIT)
                    .build()?,
            )
        };

        Ok(Self {
            entries,
            by_text,
            pattern,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, GazetteerError> {
        let entries: Vec<GazetteerEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    pub fn load(path: &Path) -> Result<Self, GazetteerError> {
        let json = std::fs::read_to_string(path).map_err(|source| GazetteerError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let gazetteer = Self::from_json(&json)?;
        tracing::info!(
            "Loaded {} gazetteer entries from {}",
            gazetteer.len(),
            path.display()
        );
        Ok(gazetteer)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[GazetteerEntry] {
        &self.entries
    }

    /// Non-overlapping matches in `text`, left to right.
    pub fn find_iter<'g>(&'g self, text: &str) -> Vec<GazetteerMatch<'g>> {
        let Some(pattern) = &self.pattern else {
            return Vec::new();
        };

        pattern
            .find_iter(text)
            .filter_map(|m| {
                self.by_text.get(m.as_str()).map(|&i| GazetteerMatch {
                    start: m.start(),
                    end: m.end(),
                    entry: &self.entries[i],
                })
            })
            .collect()
    }
}

/// Escape `text` and add word boundaries on the sides that start or end with a word character.
fn bounded(text: &str) -> String {
    let is_word = |c: Option<char>| c.is_some_and(|c| c.is_alphanumeric() || c == '_');
    let mut pattern = String::new();
    if is_word(text.chars().next()) {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&regex::escape(text));
    if is_word(text.chars().last()) {
        pattern.push_str(r"\b");
    }
    pattern
}
