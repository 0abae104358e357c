//! Anagram lookup service
//!
//! Runs the full flow for one user word: normalize, permute, match.

use super::matcher::{MatchResult, find_matches};
use crate::core::{DictionaryEntry, InputError, InputWord, PermutationSet};
use serde::Serialize;
use tracing::debug;

/// Outcome of one anagram lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupReport {
    /// Normalized input word
    pub input: String,
    /// Number of distinct permutations that were checked
    pub permutation_count: usize,
    #[serde(flatten)]
    pub result: MatchResult,
}

impl LookupReport {
    /// Number of distinct dictionary words found
    #[inline]
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.result.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_found(&self) -> bool {
        !self.result.is_empty()
    }
}

/// Look up every anagram of `raw` in `dictionary`
///
/// # Errors
///
/// Returns `InputError` if the input is blank or longer than `max_len` characters.
/// Finding nothing is not an error.
///
/// # Examples
/// ```
/// use anagram_finder::anagram::lookup;
/// use anagram_finder::core::DictionaryEntry;
///
/// let dictionary = vec![DictionaryEntry::new("abet", "to assist", 1)];
/// let report = lookup("  BEAT ", &dictionary, 10).unwrap();
/// assert_eq!(report.input, "beat");
/// assert_eq!(report.permutation_count, 24);
/// assert_eq!(report.result.words, ["abet"]);
/// ```
pub fn lookup(
    raw: &str,
    dictionary: &[DictionaryEntry],
    max_len: usize,
) -> Result<LookupReport, InputError> {
    let word = InputWord::bounded(raw, max_len)?;
    let permutations = PermutationSet::new(word.text());
    let result = find_matches(&permutations, dictionary);

    debug!(
        input = word.text(),
        permutations = permutations.len(),
        matches = result.words.len(),
        "anagram lookup"
    );

    Ok(LookupReport {
        input: word.text().to_string(),
        permutation_count: permutations.len(),
        result,
    })
}
