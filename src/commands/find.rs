//! Single word lookup command
//!
//! Finds the anagrams of one word and optionally renders them as JSON.

use crate::anagram::{LookupReport, lookup};
use crate::core::{DEFAULT_MAX_LENGTH, DictionaryEntry, InputError};

/// Configuration for one lookup
pub struct FindConfig {
    pub word: String,
    pub max_length: usize,
}

impl FindConfig {
    #[must_use]
    pub const fn new(word: String) -> Self {
        Self {
            word,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

/// Find every anagram of the configured word
///
/// # Errors
///
/// Returns an error if the word is blank or longer than `max_length`.
pub fn find_anagrams(
    config: &FindConfig,
    dictionary: &[DictionaryEntry],
) -> Result<LookupReport, InputError> {
    lookup(&config.word, dictionary, config.max_length)
}

/// Render a lookup report as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn report_to_json(report: &LookupReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::entries_from_slice;

    fn dictionary() -> Vec<DictionaryEntry> {
        entries_from_slice(&[
            ("earth", 1, "<b>n</b> the planet"),
            ("heart", 1, "<b>n</b> the organ"),
            ("hater", 1, "<b>n</b> a person who hates"),
            ("Heart", 3, "<b>prop</b> a band"),
        ])
    }

    #[test]
    fn find_returns_all_base_words() {
        let config = FindConfig::new("HEART".to_string());
        let report = find_anagrams(&config, &dictionary()).unwrap();
        assert_eq!(report.result.words, ["earth", "heart", "hater"]);
        assert_eq!(report.permutation_count, 120);
    }

    #[test]
    fn find_respects_max_length() {
        let mut config = FindConfig::new("earth".to_string());
        config.max_length = 4;
        assert_eq!(
            find_anagrams(&config, &dictionary()),
            Err(InputError::TooLong { len: 5, max: 4 })
        );
    }

    #[test]
    fn find_blank_word() {
        let config = FindConfig::new("  ".to_string());
        assert_eq!(find_anagrams(&config, &dictionary()), Err(InputError::Empty));
    }

    #[test]
    fn json_output_contains_words_and_entries() {
        let config = FindConfig::new("earth".to_string());
        let report = find_anagrams(&config, &dictionary()).unwrap();
        let json = report_to_json(&report).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["input"], "earth");
        assert_eq!(value["words"].as_array().unwrap().len(), 3);
        assert_eq!(value["entries"][1]["word"], "heart");
        assert_eq!(value["entries"][1]["type"], 1);
    }
}
