//! Anagram Finder
//!
//! Finds every dictionary word whose letters are a permutation of a given word.
//!
//! # Quick Start
//!
//! ```rust
//! use anagram_finder::anagram::{find_matches, lookup};
//! use anagram_finder::core::{DictionaryEntry, PermutationSet};
//!
//! let dictionary = vec![
//!     DictionaryEntry::new("kare", "a curry dish", 1),
//!     DictionaryEntry::new("rake", "a garden tool", 2),
//! ];
//!
//! // Low level: permute, then match
//! let result = find_matches(&PermutationSet::new("kare"), &dictionary);
//! assert_eq!(result.words, ["kare"]);
//!
//! // High level: normalize, permute and match in one go
//! let report = lookup("  KARE ", &dictionary, 10).unwrap();
//! println!("{} of {} permutations found", report.found_count(), report.permutation_count);
//! ```

// Core domain types
pub mod core;

// Anagram matching
pub mod anagram;

// Dictionary sources
pub mod dictionary;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
