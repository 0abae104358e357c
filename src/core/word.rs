//! User input word representation
//!
//! An `InputWord` is the normalized (trimmed, lowercased) form of whatever the user typed.

use std::fmt;

/// Default upper bound on input length, in characters
///
/// 10! = 3,628,800 orderings is still interactive; every extra letter multiplies the work.
pub const DEFAULT_MAX_LENGTH: usize = 10;

/// A normalized, non-empty lookup word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputWord {
    text: String,
    len: usize,
}

/// Error type for rejected input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Empty,
    TooLong { len: usize, max: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Enter a word first"),
            Self::TooLong { len, max } => {
                write!(f, "Word is {len} letters long, the limit is {max}")
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Trim surrounding whitespace and lowercase
///
/// Both user input and dictionary words go through this before comparison.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

impl InputWord {
    /// Create a new `InputWord` from raw user input
    ///
    /// # Errors
    /// Returns `InputError::Empty` if nothing is left after trimming.
    ///
    /// # Examples
    /// ```
    /// use anagram_finder::core::InputWord;
    ///
    /// let word = InputWord::new("  KARE ").unwrap();
    /// assert_eq!(word.text(), "kare");
    ///
    /// assert!(InputWord::new("   ").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self, InputError> {
        let text = normalize(raw);
        if text.is_empty() {
            return Err(InputError::Empty);
        }

        let len = text.chars().count();
        Ok(Self { text, len })
    }

    /// Create a new `InputWord`, rejecting anything longer than `max_len` characters
    ///
    /// # Errors
    /// Returns `InputError::Empty` for blank input and `InputError::TooLong` past the bound.
    pub fn bounded(raw: &str, max_len: usize) -> Result<Self, InputError> {
        let word = Self::new(raw)?;
        if word.len > max_len {
            return Err(InputError::TooLong {
                len: word.len,
                max: max_len,
            });
        }
        Ok(word)
    }

    /// Get the normalized word
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters (not bytes)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// A constructed word is never empty
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for InputWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_word_normalized() {
        let word = InputWord::new("  KARE  ").unwrap();
        assert_eq!(word.text(), "kare");
        assert_eq!(word.len(), 4);

        let word2 = InputWord::new("\tBeAt\n").unwrap();
        assert_eq!(word2.text(), "beat");
    }

    #[test]
    fn input_word_empty_rejected() {
        assert_eq!(InputWord::new(""), Err(InputError::Empty));
        assert_eq!(InputWord::new("   \t "), Err(InputError::Empty));
    }

    #[test]
    fn input_word_bounded() {
        assert!(InputWord::bounded("listen", 6).is_ok());
        assert_eq!(
            InputWord::bounded("listens", 6),
            Err(InputError::TooLong { len: 7, max: 6 })
        );
        assert_eq!(InputWord::bounded("  ", 6), Err(InputError::Empty));
    }

    #[test]
    fn input_word_length_counts_characters() {
        // "çà" is 4 bytes but 2 characters
        let word = InputWord::new("ÇÀ").unwrap();
        assert_eq!(word.text(), "çà");
        assert_eq!(word.len(), 2);
        assert!(InputWord::bounded("çà", 2).is_ok());
    }

    #[test]
    fn inner_whitespace_kept() {
        let word = InputWord::new(" live wire ").unwrap();
        assert_eq!(word.text(), "live wire");
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Stone "), "stone");
        assert_eq!(normalize("ABET"), "abet");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn input_error_display() {
        assert_eq!(InputError::Empty.to_string(), "Enter a word first");
        assert_eq!(
            InputError::TooLong { len: 12, max: 10 }.to_string(),
            "Word is 12 letters long, the limit is 10"
        );
    }

    #[test]
    fn input_word_display() {
        let word = InputWord::new("Earth").unwrap();
        assert_eq!(format!("{word}"), "earth");
    }
}
