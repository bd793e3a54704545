//! Catalog word entries
//!
//! A `WordEntry` is the surface form plus its corpus frequency and dictionary meanings.
//! Meanings are display payload only; matching never looks at them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One dictionary sense of a word
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordMeaning {
    #[serde(default)]
    pub word_class: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub descriptors: Vec<String>,
}

/// A catalog word with frequency and meanings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub meanings: Vec<WordMeaning>,
}

impl WordEntry {
    /// Create an entry without meanings
    ///
    /// # Examples
    /// ```
    /// use sanapeli::core::WordEntry;
    ///
    /// let entry = WordEntry::new("kala", 50);
    /// assert_eq!(entry.word, "kala");
    /// assert!(entry.meanings.is_empty());
    /// ```
    #[must_use]
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
            meanings: Vec::new(),
        }
    }

    /// Attach a meaning, builder style
    #[must_use]
    pub fn with_meaning(mut self, meaning: WordMeaning) -> Self {
        self.meanings.push(meaning);
        self
    }

    /// Length of the word in characters (not bytes)
    #[inline]
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.word.chars().count()
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}

impl WordMeaning {
    /// Descriptors joined the way the lookup panel shows them
    #[must_use]
    pub fn descriptor_line(&self) -> String {
        self.descriptors.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_len_counts_chars_not_bytes() {
        let entry = WordEntry::new("päivä", 610);
        assert_eq!(entry.word.len(), 7);
        assert_eq!(entry.char_len(), 5);
    }

    #[test]
    fn deserialize_full_entry() {
        let json = r#"{"word":"kala","count":50,"meanings":[
            {"word_class":"substantiivi","description":"eläin vedessä","descriptors":["eläin","ruoka"]}
        ]}"#;
        let entry: WordEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.word, "kala");
        assert_eq!(entry.count, 50);
        assert_eq!(entry.meanings.len(), 1);
        assert_eq!(entry.meanings[0].word_class, "substantiivi");
        assert_eq!(entry.meanings[0].descriptor_line(), "eläin, ruoka");
    }

    #[test]
    fn deserialize_missing_optional_fields() {
        let entry: WordEntry = serde_json::from_str(r#"{"word":"ala"}"#).unwrap();
        assert_eq!(entry.count, 0);
        assert!(entry.meanings.is_empty());
    }

    #[test]
    fn with_meaning_appends_in_order() {
        let entry = WordEntry::new("kuusi", 80)
            .with_meaning(WordMeaning {
                word_class: "substantiivi".to_string(),
                ..WordMeaning::default()
            })
            .with_meaning(WordMeaning {
                word_class: "lukusana".to_string(),
                ..WordMeaning::default()
            });

        assert_eq!(entry.meanings.len(), 2);
        assert_eq!(entry.meanings[1].word_class, "lukusana");
    }

    #[test]
    fn display_is_surface_form() {
        assert_eq!(WordEntry::new("Kala", 1).to_string(), "Kala");
    }
}
