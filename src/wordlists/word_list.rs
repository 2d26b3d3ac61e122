//! Root word list
//!
//! The immutable list a round's root word is drawn from.

use super::START_WORDS;
use super::loader::{WordSourceError, load_from_file, parse_lines, words_from_slice};
use std::path::Path;

/// Candidate root words, read-only once loaded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// The root words compiled into the binary
    #[must_use]
    pub fn bundled() -> Self {
        Self::from_slice(START_WORDS)
    }

    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Self {
        Self {
            words: words_from_slice(slice),
        }
    }

    /// Parse newline-separated text
    #[must_use]
    pub fn parse(content: &str) -> Self {
        Self {
            words: parse_lines(content),
        }
    }

    /// Load a newline-separated word file
    ///
    /// # Errors
    ///
    /// Returns [`WordSourceError::Unavailable`] if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, WordSourceError> {
        Ok(Self {
            words: load_from_file(path)?,
        })
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_list_is_not_empty() {
        let list = WordList::bundled();
        assert!(!list.is_empty());
        assert_eq!(list.len(), START_WORDS.len());
    }

    #[test]
    fn parse_keeps_order() {
        let list = WordList::parse("silent\namateurs\n\ntreasure\n");
        assert_eq!(
            list.iter().collect::<Vec<_>>(),
            vec!["silent", "amateurs", "treasure"]
        );
    }

    #[test]
    fn default_is_empty() {
        assert!(WordList::default().is_empty());
    }

    #[test]
    fn load_missing_file_fails() {
        let result = WordList::load("/definitely/not/a/real/start.txt");
        assert!(matches!(result, Err(WordSourceError::Unavailable { .. })));
    }
}
