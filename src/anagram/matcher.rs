//! Anagram matching against a dictionary
//!
//! Filters dictionary entries down to base words whose letters are a permutation
//! of the input, keeping dictionary order.

use crate::core::{DictionaryEntry, PermutationSet, normalize};
use rustc_hash::FxHashSet;
use serde::Serialize;

/// Result of matching one permutation set against a dictionary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// Unique matched words, in first-occurrence order
    pub words: Vec<String>,
    /// Every matched entry, in dictionary order (a word may appear more than once)
    pub entries: Vec<DictionaryEntry>,
}

impl MatchResult {
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All matched entries for one word
    pub fn entries_for<'a>(&'a self, word: &'a str) -> impl Iterator<Item = &'a DictionaryEntry> {
        let key = normalize(word);
        self.entries
            .iter()
            .filter(move |entry| normalize(&entry.word) == key)
    }
}

/// Find every base-word entry whose normalized word is in `permutations`
///
/// Dictionary words are trimmed and lowercased before the lookup, so mixed-case
/// dictionaries match lowercase input. An empty dictionary or no hits simply
/// yields an empty result.
///
/// # Examples
/// ```
/// use anagram_finder::anagram::find_matches;
/// use anagram_finder::core::{DictionaryEntry, PermutationSet};
///
/// let dictionary = vec![
///     DictionaryEntry::new("abet", "def1", 1),
///     DictionaryEntry::new("abet", "def2", 1),
/// ];
/// let result = find_matches(&PermutationSet::new("beat"), &dictionary);
/// assert_eq!(result.words, ["abet"]);
/// assert_eq!(result.entries.len(), 2);
/// ```
#[must_use]
pub fn find_matches(permutations: &PermutationSet, dictionary: &[DictionaryEntry]) -> MatchResult {
    let entries: Vec<DictionaryEntry> = dictionary
        .iter()
        .filter(|entry| entry.is_base_word() && permutations.contains(&normalize(&entry.word)))
        .cloned()
        .collect();

    let mut seen: FxHashSet<String> = FxHashSet::default();
    let words = entries
        .iter()
        .filter(|entry| seen.insert(normalize(&entry.word)))
        .map(|entry| entry.word.trim().to_string())
        .collect();

    MatchResult { words, entries }
}
