//! Submission validation
//!
//! Pure predicates checking a normalized candidate against the current round.
//! [`validate`] runs them in the order the game applies them and reports the
//! first rule that fails.

use super::round::RoundState;
use super::rules::Rules;
use rustc_hash::FxHashMap;

/// Capability deciding whether a word is a real word in a language
///
/// Implemented by [`crate::wordlists::Dictionary`] and by any
/// `Fn(&str, &str) -> bool` closure.
pub trait SpellChecker {
    /// Returns true if `word` is spelled correctly in `language`
    fn is_valid_word(&self, word: &str, language: &str) -> bool;
}

impl<F> SpellChecker for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_valid_word(&self, word: &str, language: &str) -> bool {
        self(word, language)
    }
}

/// How a candidate's letters are matched against the root word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Feasibility {
    /// Every letter of the candidate appears somewhere in the root.
    /// Letters may be reused any number of times.
    #[default]
    Letters,
    /// Each letter is used at most as many times as it appears in the root
    Multiset,
}

/// Why a submission was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionKind {
    TooShortOrIsRoot,
    NotOriginal,
    NotPossible,
    NotRealWord,
}

/// Returns true if `word` is shorter than `min_length` letters or restates the root
#[inline]
#[must_use]
pub fn is_too_short_or_root(word: &str, root_word: &str, min_length: usize) -> bool {
    word.chars().count() < min_length || word == root_word
}

/// Returns true if `word` has not been accepted yet this round
#[inline]
#[must_use]
pub fn is_original(word: &str, used_words: &[String]) -> bool {
    !used_words.iter().any(|used| used == word)
}

/// Returns true if `word` can be spelled from the root's letters
///
/// # Examples
/// ```
/// use word_scramble::core::{Feasibility, is_possible};
///
/// assert!(is_possible("lines", "silent", Feasibility::Letters));
/// assert!(is_possible("tilt", "silent", Feasibility::Letters));
/// assert!(!is_possible("tilt", "silent", Feasibility::Multiset));
/// assert!(!is_possible("xyz", "silent", Feasibility::Letters));
/// ```
#[must_use]
pub fn is_possible(word: &str, root_word: &str, feasibility: Feasibility) -> bool {
    match feasibility {
        Feasibility::Letters => word.chars().all(|letter| root_word.contains(letter)),
        Feasibility::Multiset => {
            let mut available = letter_counts(root_word);
            word.chars().all(|letter| match available.get_mut(&letter) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    true
                }
                _ => false,
            })
        }
    }
}

/// Returns true if the spell checker recognizes `word` in `language`
#[inline]
pub fn is_real_word<C: SpellChecker + ?Sized>(word: &str, checker: &C, language: &str) -> bool {
    checker.is_valid_word(word, language)
}

/// Run every rule against a normalized candidate, stopping at the first failure
///
/// Order: length/root, originality, feasibility, dictionary.
///
/// # Errors
///
/// Returns the [`RejectionKind`] of the first rule the word breaks.
pub fn validate<C: SpellChecker + ?Sized>(
    word: &str,
    state: &RoundState,
    rules: &Rules,
    checker: &C,
) -> Result<(), RejectionKind> {
    if is_too_short_or_root(word, state.root_word(), rules.min_length) {
        return Err(RejectionKind::TooShortOrIsRoot);
    }

    if !is_original(word, state.used_words()) {
        return Err(RejectionKind::NotOriginal);
    }

    if !is_possible(word, state.root_word(), rules.feasibility) {
        return Err(RejectionKind::NotPossible);
    }

    if !is_real_word(word, checker, &rules.language) {
        return Err(RejectionKind::NotRealWord);
    }

    Ok(())
}

fn letter_counts(word: &str) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for letter in word.chars() {
        *counts.entry(letter).or_insert(0) += 1;
    }
    counts
}
