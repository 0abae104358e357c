//! Dictionary loading utilities
//!
//! Provides the `DictionaryProvider` seam plus the JSON file and embedded implementations.

use super::SAMPLE_ENTRIES;
use crate::core::DictionaryEntry;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Name that selects the embedded dictionary instead of a file path
pub const EMBEDDED_NAME: &str = "embedded";

/// Error type for dictionary acquisition
#[derive(Debug)]
pub enum DictionaryError {
    Io(io::Error),
    Parse(serde_json::Error),
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read dictionary: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse dictionary: {e}"),
            Self::Empty => write!(f, "Dictionary is empty or failed to load"),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Empty => None,
        }
    }
}

impl From<io::Error> for DictionaryError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for DictionaryError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Source of dictionary entries
pub trait DictionaryProvider {
    /// Load every entry, in dictionary order
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if the source holds no entries, or the
    /// underlying I/O or parse error.
    fn load(&self) -> Result<Vec<DictionaryEntry>, DictionaryError>;

    /// Human-readable description of the source
    fn describe(&self) -> String;
}

/// The `{"dictionary": [...]}` file layout
#[derive(Deserialize)]
struct WrappedDictionary {
    dictionary: Vec<DictionaryEntry>,
}

/// Parse dictionary JSON
///
/// Accepts `{"dictionary": [...]}` or a bare array of entries. The layout is picked from the
/// first non-blank character, so parse errors carry the line and column of the bad entry.
///
/// # Errors
///
/// Returns `DictionaryError::Parse` for malformed JSON and `DictionaryError::Empty`
/// if there are no entries.
///
/// # Examples
/// ```
/// use anagram_finder::dictionary::loader::parse_json;
///
/// let entries = parse_json(r#"{"dictionary": [{"word": "kare", "arti": "curry", "type": 1}]}"#).unwrap();
/// assert_eq!(entries[0].word, "kare");
/// ```
pub fn parse_json(content: &str) -> Result<Vec<DictionaryEntry>, DictionaryError> {
    let entries: Vec<DictionaryEntry> = if content.trim_start().starts_with('[') {
        serde_json::from_str(content)?
    } else {
        serde_json::from_str::<WrappedDictionary>(content)?.dictionary
    };

    if entries.is_empty() {
        return Err(DictionaryError::Empty);
    }
    Ok(entries)
}

/// Load dictionary entries from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid dictionary JSON,
/// or holds no entries.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<DictionaryEntry>, DictionaryError> {
    let content = fs::read_to_string(path)?;
    parse_json(&content)
}

/// Convert embedded tuples to owned entries
#[must_use]
pub fn entries_from_slice(slice: &[(&str, i64, &str)]) -> Vec<DictionaryEntry> {
    slice
        .iter()
        .map(|&(word, kind, definition)| DictionaryEntry::new(word, definition, kind))
        .collect()
}

/// Dictionary stored in a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DictionaryProvider for JsonFileProvider {
    fn load(&self) -> Result<Vec<DictionaryEntry>, DictionaryError> {
        let entries = load_from_file(&self.path)?;
        info!(path = %self.path.display(), entries = entries.len(), "loaded dictionary");
        Ok(entries)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Dictionary compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedProvider;

impl DictionaryProvider for EmbeddedProvider {
    fn load(&self) -> Result<Vec<DictionaryEntry>, DictionaryError> {
        let entries = entries_from_slice(SAMPLE_ENTRIES);
        if entries.is_empty() {
            return Err(DictionaryError::Empty);
        }
        info!(entries = entries.len(), "loaded embedded dictionary");
        Ok(entries)
    }

    fn describe(&self) -> String {
        "embedded sample dictionary".to_string()
    }
}

/// Pick a provider from a `--dictionary` argument
///
/// `"embedded"` selects the built-in list; anything else is a file path.
#[must_use]
pub fn provider_for(source: &str) -> Box<dyn DictionaryProvider> {
    if source == EMBEDDED_NAME {
        Box::new(EmbeddedProvider)
    } else {
        Box::new(JsonFileProvider::new(source))
    }
}
