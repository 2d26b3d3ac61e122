//! Round rules
//!
//! The constants a round is played under: minimum word length, the per-word
//! bonus, how letter feasibility is judged and the dictionary language.

use super::validator::Feasibility;

/// Words shorter than this are rejected
pub const MIN_WORD_LENGTH: usize = 3;

/// Flat bonus awarded for every accepted word, on top of one point per letter
pub const WORD_BONUS: u32 = 5;

/// Language tag handed to the spell checker
pub const DEFAULT_LANGUAGE: &str = "en";

/// Configuration for a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    pub min_length: usize,
    pub word_bonus: u32,
    pub feasibility: Feasibility,
    pub language: String,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            min_length: MIN_WORD_LENGTH,
            word_bonus: WORD_BONUS,
            feasibility: Feasibility::default(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl Rules {
    #[must_use]
    pub const fn with_feasibility(mut self, feasibility: Feasibility) -> Self {
        self.feasibility = feasibility;
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Points awarded for accepting `word`: one per letter plus the word bonus
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Rules;
    ///
    /// assert_eq!(Rules::default().points_for("lines"), 10);
    /// ```
    #[must_use]
    pub fn points_for(&self, word: &str) -> u32 {
        word.chars().count() as u32 + self.word_bonus
    }
}
