//! Word sources for Word Scramble
//!
//! The bundled root words and English dictionary are compiled into the binary;
//! custom newline-separated files can be loaded at runtime.

mod dictionary;
mod embedded;
pub mod loader;
mod word_list;

pub use dictionary::Dictionary;
pub use embedded::{DICTIONARY_WORDS, DICTIONARY_WORDS_COUNT, START_WORDS, START_WORDS_COUNT};
pub use loader::WordSourceError;
pub use word_list::WordList;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_count_matches_const() {
        assert_eq!(START_WORDS.len(), START_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY_WORDS.len(), DICTIONARY_WORDS_COUNT);
    }

    #[test]
    fn start_words_are_playable_roots() {
        for &word in START_WORDS {
            assert_eq!(word.len(), 8, "Root '{word}' is not 8 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Root '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_words_are_lowercase() {
        for &word in DICTIONARY_WORDS {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }
}
