//! Word-list backed spell checker
//!
//! A hash set of lowercase words tagged with the language they belong to.

use super::DICTIONARY_WORDS;
use super::loader::{WordSourceError, load_from_file};
use crate::core::{DEFAULT_LANGUAGE, SpellChecker};
use rustc_hash::FxHashSet;
use std::path::Path;

/// In-memory dictionary for one language
#[derive(Debug, Clone)]
pub struct Dictionary {
    language: String,
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from any collection of words
    ///
    /// Words are trimmed and lowercased; blanks are ignored.
    pub fn new<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self {
            language: language.into(),
            words,
        }
    }

    /// The English dictionary compiled into the binary
    #[must_use]
    pub fn bundled() -> Self {
        Self::new(DEFAULT_LANGUAGE, DICTIONARY_WORDS.iter())
    }

    /// Load a newline-separated dictionary file for `language`
    ///
    /// # Errors
    ///
    /// Returns [`WordSourceError::Unavailable`] if the file cannot be read.
    pub fn load<P: AsRef<Path>>(
        path: P,
        language: impl Into<String>,
    ) -> Result<Self, WordSourceError> {
        Ok(Self::new(language, load_from_file(path)?))
    }

    /// Check if a word exists, ignoring case
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Whether this dictionary covers `language`
    ///
    /// Only primary subtags are compared: "en", "en-US" and "EN_gb" match.
    #[must_use]
    pub fn speaks(&self, language: &str) -> bool {
        primary_subtag(language).eq_ignore_ascii_case(primary_subtag(&self.language))
    }
}

impl SpellChecker for Dictionary {
    fn is_valid_word(&self, word: &str, language: &str) -> bool {
        self.speaks(language) && self.contains(word)
    }
}

fn primary_subtag(tag: &str) -> &str {
    tag.split(['-', '_']).next().unwrap_or(tag)
}
