//! Formatting utilities for terminal output

use crate::anagram::LookupReport;

/// Extract plain text from a marked-up definition
///
/// Drops tags, decodes the common HTML entities and collapses whitespace runs.
///
/// # Examples
/// ```
/// use anagram_finder::output::formatters::strip_markup;
///
/// assert_eq!(strip_markup("<b>n</b> curry &amp; rice"), "n curry & rice");
/// ```
#[must_use]
pub fn strip_markup(definition: &str) -> String {
    let mut text = String::with_capacity(definition.len());
    let mut in_tag = false;
    let mut chars = definition.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '<' if starts_tag(chars.as_str()) => {
                in_tag = true;
                // Tags separate words the way block elements do
                text.push(' ');
            }
            '>' if in_tag => in_tag = false,
            _ if in_tag => {}
            '&' => {
                let rest = chars.as_str();
                if let Some((decoded, consumed)) = decode_entity(rest) {
                    text.push(decoded);
                    chars = rest[consumed..].chars();
                } else {
                    text.push('&');
                }
            }
            _ => text.push(ch),
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A tag opens with a name, a closing `/` or a `!` comment/doctype; anything else is a literal `<`
fn starts_tag(rest: &str) -> bool {
    rest.chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '/' || c == '!')
}

/// Decode an entity body following `&`; returns the character and bytes consumed
fn decode_entity(rest: &str) -> Option<(char, usize)> {
    let end = rest.find(';')?;
    // Entities are short; a far-away ';' means this '&' is literal
    if end > 10 {
        return None;
    }

    let name = &rest[..end];
    let decoded = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" | "#39" => '\'',
        "nbsp" => ' ',
        _ => {
            let code = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                name.strip_prefix('#')?.parse().ok()?
            };
            match char::from_u32(code)? {
                // NUL and non-whitespace controls never reach the terminal
                c if c.is_control() && !c.is_whitespace() => char::REPLACEMENT_CHARACTER,
                c => c,
            }
        }
    };

    Some((decoded, end + 1))
}

/// One-line summary of a lookup
#[must_use]
pub fn summary_line(report: &LookupReport) -> String {
    if report.is_found() {
        format!(
            "Found {} of {} permutations in the dictionary",
            report.found_count(),
            report.permutation_count
        )
    } else {
        "Word not found in the dictionary".to_string()
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anagram::lookup;
    use crate::core::DictionaryEntry;

    #[test]
    fn strip_markup_removes_tags() {
        assert_eq!(strip_markup("<b>v</b> to assist"), "v to assist");
        assert_eq!(
            strip_markup("<b>v</b> <i>(law)</i> to aid"),
            "v (law) to aid"
        );
    }

    #[test]
    fn strip_markup_tags_separate_words() {
        assert_eq!(strip_markup("one<br>two"), "one two");
        assert_eq!(strip_markup("<p>first</p><p>second</p>"), "first second");
    }

    #[test]
    fn strip_markup_decodes_entities() {
        assert_eq!(strip_markup("curry &amp; rice"), "curry & rice");
        assert_eq!(strip_markup("&quot;bated&quot;"), "\"bated\"");
        assert_eq!(strip_markup("a &lt; b &gt; c"), "a < b > c");
        assert_eq!(strip_markup("it&#39;s"), "it's");
        assert_eq!(strip_markup("caf&#xE9;"), "café");
        assert_eq!(strip_markup("a&nbsp;b"), "a b");
    }

    #[test]
    fn strip_markup_keeps_stray_ampersand() {
        assert_eq!(strip_markup("salt & pepper"), "salt & pepper");
        assert_eq!(strip_markup("R&D; research"), "R&D; research");
        assert_eq!(strip_markup("&unknown;"), "&unknown;");
    }

    #[test]
    fn strip_markup_literal_less_than() {
        assert_eq!(
            strip_markup("used when x < y holds, as in maths"),
            "used when x < y holds, as in maths"
        );
        assert_eq!(strip_markup("a <3 b"), "a <3 b");
        assert_eq!(strip_markup("trailing <"), "trailing <");
        // Real tags around a literal still go
        assert_eq!(strip_markup("<i>x < y</i>"), "x < y");
        assert_eq!(strip_markup("a<!-- note -->b"), "a b");
    }

    #[test]
    fn strip_markup_replaces_control_entities() {
        assert_eq!(strip_markup("a&#0;b"), "a\u{FFFD}b");
        assert_eq!(strip_markup("bell&#7;"), "bell\u{FFFD}");
        assert_eq!(strip_markup("esc&#x1b;[2J"), "esc\u{FFFD}[2J");
        // Whitespace controls collapse like any other whitespace
        assert_eq!(strip_markup("two&#10;lines"), "two lines");
        assert!(!strip_markup("&#127;&#x9b;").chars().any(char::is_control));
    }

    #[test]
    fn strip_markup_plain_text_untouched() {
        assert_eq!(strip_markup("the planet on which we live"), "the planet on which we live");
        assert_eq!(strip_markup(""), "");
    }

    #[test]
    fn summary_found() {
        let dictionary = vec![DictionaryEntry::new("abet", "", 1)];
        let report = lookup("beat", &dictionary, 10).unwrap();
        assert_eq!(
            summary_line(&report),
            "Found 1 of 24 permutations in the dictionary"
        );
    }

    #[test]
    fn summary_not_found() {
        let report = lookup("zzzzz", &[], 10).unwrap();
        assert_eq!(summary_line(&report), "Word not found in the dictionary");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
