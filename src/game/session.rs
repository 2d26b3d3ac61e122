//! Interactive game session
//!
//! Owns the word list, spell checker, rules, random source and the single
//! live round. Presentation layers drive the game through this type.

use crate::core::{RoundState, Rules, SpellChecker, Submission, SubmissionResult};
use crate::wordlists::WordList;
use rand::Rng;
use rand::rngs::StdRng;
use tracing::info;

/// One player's session: a sequence of rounds sharing the same sources
pub struct Session<C: SpellChecker, R: Rng = StdRng> {
    words: WordList,
    checker: C,
    rules: Rules,
    rng: R,
    state: RoundState,
    rounds_played: usize,
    best_score: u32,
}

impl<C: SpellChecker, R: Rng> Session<C, R> {
    /// Create a session and start its first round
    pub fn new(words: WordList, checker: C, rules: Rules, mut rng: R) -> Self {
        let state = RoundState::start(words.words(), &mut rng);

        Self {
            words,
            checker,
            rules,
            rng,
            state,
            rounds_played: 1,
            best_score: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &RoundState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    #[inline]
    #[must_use]
    pub const fn checker(&self) -> &C {
        &self.checker
    }

    /// Number of rounds started, including the current one
    #[inline]
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Highest score reached in any round of this session
    #[inline]
    #[must_use]
    pub const fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Submit a raw candidate to the current round
    ///
    /// Returns `None` for blank input, which should be ignored.
    pub fn submit(&mut self, raw: &str) -> Option<SubmissionResult> {
        let Submission { state, result } = self.state.submit(raw, &self.rules, &self.checker)?;

        self.best_score = self.best_score.max(state.score());
        self.state = state;
        Some(result)
    }

    /// Replace the current round with a fresh one
    pub fn reset(&mut self) -> &RoundState {
        info!(
            root = %self.state.root_word(),
            score = self.state.score(),
            words = self.state.word_count(),
            "round finished"
        );

        self.state = RoundState::reset(self.words.words(), &mut self.rng);
        self.rounds_played += 1;
        &self.state
    }
}
