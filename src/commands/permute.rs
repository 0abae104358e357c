//! Permutation dump command

use crate::core::{InputError, InputWord, distinct_permutation_count, for_each_permutation};
use rustc_hash::FxHashSet;

/// Permutations generated for one word
pub struct PermuteResult {
    pub input: String,
    pub permutations: Vec<String>,
    pub generated_count: usize,
    pub distinct_count: u128,
    pub truncated: bool,
}

/// Generate the permutations of a word
///
/// With `unique` set, repeated strings are dropped (first occurrence wins).
/// `limit` caps how many permutations are kept for display.
///
/// # Errors
///
/// Returns an error if the word is blank or longer than `max_length`.
pub fn permute_word(
    raw: &str,
    max_length: usize,
    unique: bool,
    limit: Option<usize>,
) -> Result<PermuteResult, InputError> {
    let word = InputWord::bounded(raw, max_length)?;
    let mut seen: FxHashSet<Box<str>> = FxHashSet::default();
    let mut permutations = Vec::new();
    let mut generated_count = 0;
    let mut kept_count = 0;

    // Only the displayed prefix is ever turned into owned strings
    for_each_permutation(word.text(), |perm| {
        generated_count += 1;
        if unique {
            if seen.contains(perm) {
                return;
            }
            seen.insert(Box::from(perm));
        }
        kept_count += 1;
        if limit.is_none_or(|limit| permutations.len() < limit) {
            permutations.push(perm.to_string());
        }
    });

    let truncated = limit.is_some_and(|limit| kept_count > limit);

    Ok(PermuteResult {
        input: word.text().to_string(),
        permutations,
        generated_count,
        distinct_count: distinct_permutation_count(word.text()),
        truncated,
    })
}
