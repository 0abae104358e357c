//! Core domain types for anagram lookup
//!
//! This module contains the fundamental domain types: normalized input words,
//! permutation generation and dictionary entries. Everything here is pure.

mod entry;
mod permutation;
mod word;

pub use entry::{BASE_WORD_TYPE, DictionaryEntry};
pub use permutation::{
    PermutationSet, distinct_permutation_count, factorial, for_each_permutation, permute,
};
pub use word::{DEFAULT_MAX_LENGTH, InputError, InputWord, normalize};
