//! Permutation generation
//!
//! Enumerates every ordering of a word's characters with Heap's algorithm, run
//! iteratively: one transposition per emitted permutation, no recursion.

use rustc_hash::{FxHashMap, FxHashSet};

/// Generate every character permutation of `s`
///
/// The first element is always `s` itself, followed by the remaining orderings
/// in transposition order (not alphabetical). Exactly `n!` strings are returned
/// for `n` characters; repeated characters therefore produce repeated strings.
/// Use [`PermutationSet`] for the deduplicated view.
///
/// # Examples
/// ```
/// use anagram_finder::core::permute;
///
/// assert_eq!(permute("abc"), ["abc", "bac", "cab", "acb", "bca", "cba"]);
/// assert_eq!(permute(""), [""]);
/// ```
#[must_use]
pub fn permute(s: &str) -> Vec<String> {
    let n = s.chars().count();
    let mut results = Vec::with_capacity(factorial(n).min(1 << 20) as usize);
    for_each_permutation(s, |perm| results.push(perm.to_string()));
    results
}

/// Hand each of the `n!` orderings of `s` to `visit`, in the order [`permute`] returns them
///
/// The borrowed string is a reused buffer, only valid for the duration of the call.
pub fn for_each_permutation(s: &str, mut visit: impl FnMut(&str)) {
    let chars: Vec<char> = s.chars().collect();
    let n = chars.len();

    visit(s);

    let mut buffer = String::with_capacity(s.len());
    let mut indices: Vec<usize> = (0..n).collect();
    // counters[i] = swaps already done at level i
    let mut counters = vec![0_usize; n];

    let mut i = 1;
    while i < n {
        if counters[i] < i {
            let j = if i % 2 == 0 { 0 } else { counters[i] };
            indices.swap(i, j);
            buffer.clear();
            buffer.extend(indices.iter().map(|&p| chars[p]));
            visit(&buffer);
            counters[i] += 1;
            i = 1;
        } else {
            // Carry into the next level
            counters[i] = 0;
            i += 1;
        }
    }
}

/// `n!`, saturating at `u128::MAX`
#[must_use]
pub fn factorial(n: usize) -> u128 {
    (1..=n as u128).try_fold(1_u128, u128::checked_mul).unwrap_or(u128::MAX)
}

/// Number of distinct orderings of `s`: `n! / (m1! * m2! * ... * mk!)`
///
/// `mj` is the multiplicity of each distinct character.
///
/// # Examples
/// ```
/// use anagram_finder::core::distinct_permutation_count;
///
/// assert_eq!(distinct_permutation_count("kare"), 24);
/// assert_eq!(distinct_permutation_count("aab"), 3);
/// ```
#[must_use]
pub fn distinct_permutation_count(s: &str) -> u128 {
    let mut multiplicities: FxHashMap<char, usize> = FxHashMap::default();
    for ch in s.chars() {
        *multiplicities.entry(ch).or_insert(0) += 1;
    }

    // Build the multinomial coefficient one binomial at a time to stay exact
    // without computing n! up front.
    let mut placed = 0_usize;
    let mut total = 1_u128;
    for &count in multiplicities.values() {
        for k in 1..=count {
            placed += 1;
            total = total.saturating_mul(placed as u128) / k as u128;
        }
    }
    total
}

/// Deduplicated set of permutations of one input word
///
/// Only distinct orderings are ever allocated; repeats are rejected against the set as they
/// are generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationSet {
    source: String,
    permutations: FxHashSet<Box<str>>,
}

impl PermutationSet {
    /// Generate and deduplicate all permutations of `s`
    #[must_use]
    pub fn new(s: &str) -> Self {
        let mut permutations: FxHashSet<Box<str>> = FxHashSet::default();
        permutations.reserve(distinct_permutation_count(s).min(1 << 20) as usize);
        for_each_permutation(s, |perm| {
            if !permutations.contains(perm) {
                permutations.insert(Box::from(perm));
            }
        });
        Self {
            source: s.to_string(),
            permutations,
        }
    }

    /// The word the set was generated from
    #[inline]
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Check whether `candidate` is one of the permutations
    #[inline]
    #[must_use]
    pub fn contains(&self, candidate: &str) -> bool {
        self.permutations.contains(candidate)
    }

    /// Number of distinct permutations
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.permutations.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.permutations.is_empty()
    }

    /// Iterate over the permutations in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.permutations.iter().map(|perm| &**perm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_chars(s: &str) -> Vec<char> {
        let mut chars: Vec<char> = s.chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn permute_empty_string() {
        assert_eq!(permute(""), vec![String::new()]);
    }

    #[test]
    fn permute_single_char() {
        assert_eq!(permute("a"), vec!["a".to_string()]);
    }

    #[test]
    fn permute_transposition_order() {
        assert_eq!(permute("ab"), ["ab", "ba"]);
        assert_eq!(permute("abc"), ["abc", "bac", "cab", "acb", "bca", "cba"]);
    }

    #[test]
    fn permute_first_is_identity() {
        for word in ["kare", "listen", "aab", "mississ"] {
            assert_eq!(permute(word)[0], word);
        }
    }

    #[test]
    fn permute_yields_n_factorial() {
        assert_eq!(permute("abcd").len(), 24);
        assert_eq!(permute("abcdef").len(), 720);
        // Duplicates are still emitted individually
        assert_eq!(permute("aab").len(), 6);
    }

    #[test]
    fn permute_distinct_letters_all_unique() {
        for word in ["abcd", "kare", "listen", "abcdefg"] {
            let all = permute(word);
            let unique: FxHashSet<&String> = all.iter().collect();
            assert_eq!(unique.len(), all.len(), "duplicates for '{word}'");
        }
    }

    #[test]
    fn permute_members_are_rearrangements() {
        let word = "stone";
        let expected = sorted_chars(word);
        for perm in permute(word) {
            assert_eq!(perm.chars().count(), 5);
            assert_eq!(sorted_chars(&perm), expected);
        }
    }

    #[test]
    fn permute_multibyte_characters() {
        let perms = permute("éa");
        assert_eq!(perms, ["éa", "aé"]);
    }

    #[test]
    fn visitor_matches_permute() {
        for word in ["", "a", "abc", "aab", "stone"] {
            let mut visited = Vec::new();
            for_each_permutation(word, |perm| visited.push(perm.to_string()));
            assert_eq!(visited, permute(word), "order differs for '{word}'");
        }
    }

    #[test]
    fn visitor_counts_without_collecting() {
        let mut count = 0_u128;
        for_each_permutation("abcdefgh", |_| count += 1);
        assert_eq!(count, factorial(8));
    }

    #[test]
    fn factorial_values() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(10), 3_628_800);
        assert_eq!(factorial(100), u128::MAX);
    }

    #[test]
    fn distinct_count_formula() {
        assert_eq!(distinct_permutation_count(""), 1);
        assert_eq!(distinct_permutation_count("a"), 1);
        assert_eq!(distinct_permutation_count("abcd"), 24);
        assert_eq!(distinct_permutation_count("aab"), 3);
        assert_eq!(distinct_permutation_count("aaaa"), 1);
        // 11! / (4! * 4! * 2!)
        assert_eq!(distinct_permutation_count("mississippi"), 34_650);
    }

    #[test]
    fn set_size_matches_formula() {
        for word in ["", "a", "ab", "aab", "abcd", "beat", "aabb", "mississ", "letter"] {
            let set = PermutationSet::new(word);
            assert_eq!(
                set.len() as u128,
                distinct_permutation_count(word),
                "wrong count for '{word}'"
            );
        }
    }

    #[test]
    fn set_built_from_repeated_letters() {
        // 10 letters but only 10!/(4!*3!*3!) = 4200 distinct orderings are kept
        let word = "aaaabbbccc";
        let set = PermutationSet::new(word);
        assert_eq!(set.len(), 4200);
        assert_eq!(set.len() as u128, distinct_permutation_count(word));
        assert!(set.contains("cccbbbaaaa"));
        assert!(set.iter().all(|perm| sorted_chars(perm) == sorted_chars(word)));
    }

    #[test]
    fn set_contains_source_and_anagrams() {
        let set = PermutationSet::new("beat");
        assert_eq!(set.source(), "beat");
        assert!(set.contains("beat"));
        assert!(set.contains("abet"));
        assert!(set.contains("beta"));
        assert!(set.contains("bate"));
        assert!(!set.contains("bet"));
        assert!(!set.contains("beats"));
    }

    #[test]
    fn set_iter_covers_everything() {
        let set = PermutationSet::new("aab");
        let mut items: Vec<&str> = set.iter().collect();
        items.sort_unstable();
        assert_eq!(items, ["aab", "aba", "baa"]);
        assert!(!set.is_empty());
    }
}
