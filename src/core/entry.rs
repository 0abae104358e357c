//! Dictionary entry representation

use serde::{Deserialize, Serialize};

/// Type tag for base words, the only entries that take part in matching
pub const BASE_WORD_TYPE: i64 = 1;

/// One dictionary record: a word, its (possibly marked-up) definition and a type tag
///
/// The serialized field names follow the dictionary file layout: `word`, `arti`
/// (also accepted as `definition`) and `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    #[serde(rename = "arti", alias = "definition", default)]
    pub definition: String,
    #[serde(rename = "type")]
    pub kind: i64,
}

impl DictionaryEntry {
    #[must_use]
    pub fn new(word: impl Into<String>, definition: impl Into<String>, kind: i64) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
            kind,
        }
    }

    /// Whether this entry is a base word (type 1)
    #[inline]
    #[must_use]
    pub const fn is_base_word(&self) -> bool {
        self.kind == BASE_WORD_TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_word_flag() {
        assert!(DictionaryEntry::new("kare", "", 1).is_base_word());
        assert!(!DictionaryEntry::new("rake", "", 2).is_base_word());
        assert!(!DictionaryEntry::new("Levi", "", 3).is_base_word());
    }

    #[test]
    fn deserialize_arti_field() {
        let entry: DictionaryEntry =
            serde_json::from_str(r#"{"word": "abet", "arti": "<b>v</b> to assist", "type": 1}"#)
                .unwrap();
        assert_eq!(entry, DictionaryEntry::new("abet", "<b>v</b> to assist", 1));
    }

    #[test]
    fn deserialize_definition_alias_and_extra_fields() {
        let entry: DictionaryEntry = serde_json::from_str(
            r#"{"word": "beat", "definition": "to strike", "type": 2, "id": 7}"#,
        )
        .unwrap();
        assert_eq!(entry.definition, "to strike");
        assert_eq!(entry.kind, 2);
    }

    #[test]
    fn deserialize_missing_definition_defaults() {
        let entry: DictionaryEntry =
            serde_json::from_str(r#"{"word": "beta", "type": 1}"#).unwrap();
        assert!(entry.definition.is_empty());
    }

    #[test]
    fn serialize_uses_file_field_names() {
        let json = serde_json::to_value(DictionaryEntry::new("kare", "curry", 1)).unwrap();
        assert_eq!(json["word"], "kare");
        assert_eq!(json["arti"], "curry");
        assert_eq!(json["type"], 1);
    }
}
