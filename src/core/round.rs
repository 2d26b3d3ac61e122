//! Round state and its transitions
//!
//! A [`RoundState`] is a value: starting, submitting and resetting all return
//! a new state instead of mutating the old one.

use super::rules::Rules;
use super::validator::{RejectionKind, SpellChecker, validate};
use rand::Rng;
use rand::seq::IteratorRandom;
use tracing::{debug, info, warn};

/// Root word used when the word list has nothing to draw from
pub const DEFAULT_ROOT_WORD: &str = "amateurs";

/// State of one round: the root word, accepted words and the running score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    root_word: String,
    used_words: Vec<String>,
    score: u32,
}

/// Outcome of a single submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Accepted { word: String, points: u32 },
    Rejected(Rejection),
}

/// A rejected submission with the text exactly as the player typed it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub kind: RejectionKind,
    pub input: String,
}

/// The state after a submission together with its result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub state: RoundState,
    pub result: SubmissionResult,
}

impl SubmissionResult {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// The rejection kind, if the submission was turned down
    #[must_use]
    pub const fn rejection_kind(&self) -> Option<RejectionKind> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected(rejection) => Some(rejection.kind),
        }
    }
}

/// Trim surrounding whitespace and lowercase
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Lines\n"), "lines");
/// assert_eq!(normalize(" \t "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl RoundState {
    /// Start a round with a root drawn uniformly from `words`
    ///
    /// Blank entries are never drawn. Falls back to [`DEFAULT_ROOT_WORD`]
    /// when nothing is left to draw from.
    pub fn start<S, R>(words: &[S], rng: &mut R) -> Self
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let drawn = words
            .iter()
            .map(|word| normalize(word.as_ref()))
            .filter(|word| !word.is_empty())
            .choose(rng);

        let root_word = drawn.unwrap_or_else(|| {
            warn!("word list is empty, falling back to {DEFAULT_ROOT_WORD:?}");
            DEFAULT_ROOT_WORD.to_string()
        });

        info!(root = %root_word, "round started");
        Self::with_root(&root_word)
    }

    /// Start a fresh round; same as [`RoundState::start`]
    pub fn reset<S, R>(words: &[S], rng: &mut R) -> Self
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        Self::start(words, rng)
    }

    /// A fresh round on a fixed root word
    #[must_use]
    pub fn with_root(root_word: &str) -> Self {
        let root_word = normalize(root_word);
        let root_word = if root_word.is_empty() {
            DEFAULT_ROOT_WORD.to_string()
        } else {
            root_word
        };

        Self {
            root_word,
            used_words: Vec::new(),
            score: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.used_words.len()
    }

    /// Submit a raw candidate
    ///
    /// Returns `None` when the input is blank after normalization; the caller
    /// should ignore it. Otherwise returns the next state and the result. A
    /// rejection leaves the state unchanged and echoes `raw` untouched.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{RejectionKind, RoundState, Rules, SubmissionResult};
    ///
    /// let checker = |word: &str, _: &str| ["lines", "tiles"].contains(&word);
    /// let rules = Rules::default();
    /// let round = RoundState::with_root("silent");
    ///
    /// let next = round.submit(" Lines ", &rules, &checker).unwrap();
    /// assert_eq!(next.state.score(), 10);
    ///
    /// let again = next.state.submit("lines", &rules, &checker).unwrap();
    /// assert_eq!(again.result.rejection_kind(), Some(RejectionKind::NotOriginal));
    /// assert_eq!(again.state, next.state);
    ///
    /// assert!(round.submit("   ", &rules, &checker).is_none());
    /// ```
    pub fn submit<C: SpellChecker + ?Sized>(
        &self,
        raw: &str,
        rules: &Rules,
        checker: &C,
    ) -> Option<Submission> {
        let word = normalize(raw);
        if word.is_empty() {
            return None;
        }

        let submission = match validate(&word, self, rules, checker) {
            Ok(()) => {
                let points = rules.points_for(&word);
                debug!(%word, points, "word accepted");

                let mut used_words = Vec::with_capacity(self.used_words.len() + 1);
                used_words.push(word.clone());
                used_words.extend(self.used_words.iter().cloned());

                Submission {
                    state: Self {
                        root_word: self.root_word.clone(),
                        used_words,
                        score: self.score + points,
                    },
                    result: SubmissionResult::Accepted { word, points },
                }
            }
            Err(kind) => {
                debug!(%word, ?kind, "word rejected");
                Submission {
                    state: self.clone(),
                    result: SubmissionResult::Rejected(Rejection {
                        kind,
                        input: raw.to_string(),
                    }),
                }
            }
        };

        Some(submission)
    }

    /// Prepend a word without running any checks
    #[cfg(test)]
    pub(crate) fn accept_unchecked(mut self, word: &str, points: u32) -> Self {
        self.used_words.insert(0, word.to_string());
        self.score += points;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WORDS: &[&str] = &["lines", "tiles", "inlet", "listen", "islet", "stein", "tinsel"];

    fn checker(word: &str, _: &str) -> bool {
        WORDS.contains(&word)
    }

    fn submit(state: &RoundState, raw: &str) -> Submission {
        state
            .submit(raw, &Rules::default(), &checker)
            .expect("non-blank input yields a submission")
    }

    #[test]
    fn start_draws_from_list() {
        let words = ["silent", "amateurs", "treasure"];
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let state = RoundState::start(&words, &mut rng);
            assert!(words.contains(&state.root_word()));
            assert!(state.used_words().is_empty());
            assert_eq!(state.score(), 0);
        }
    }

    #[test]
    fn start_eventually_draws_every_word() {
        let words = ["silent", "amateurs", "treasure"];
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            seen.insert(RoundState::start(&words, &mut rng).root_word().to_string());
        }

        assert_eq!(seen.len(), words.len());
    }

    #[test]
    fn start_on_empty_list_uses_default() {
        let words: [&str; 0] = [];
        let state = RoundState::start(&words, &mut StdRng::seed_from_u64(1));
        assert_eq!(state.root_word(), DEFAULT_ROOT_WORD);
    }

    #[test]
    fn start_skips_blank_entries() {
        let words = ["", "  ", "Silent\r"];
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..10 {
            assert_eq!(RoundState::start(&words, &mut rng).root_word(), "silent");
        }

        let blank = ["", "\n"];
        assert_eq!(
            RoundState::start(&blank, &mut rng).root_word(),
            DEFAULT_ROOT_WORD
        );
    }

    #[test]
    fn with_root_normalizes() {
        assert_eq!(RoundState::with_root(" SILENT ").root_word(), "silent");
        assert_eq!(RoundState::with_root("").root_word(), DEFAULT_ROOT_WORD);
    }

    #[test]
    fn silent_scenario() {
        let round = RoundState::with_root("silent");

        let first = submit(&round, "lines");
        assert_eq!(
            first.result,
            SubmissionResult::Accepted {
                word: "lines".to_string(),
                points: 10
            }
        );
        assert_eq!(first.state.score(), 10);
        assert_eq!(first.state.used_words(), ["lines"]);

        let state = first.state;
        for (input, kind) in [
            ("lines", RejectionKind::NotOriginal),
            ("xyz", RejectionKind::NotPossible),
            ("it", RejectionKind::TooShortOrIsRoot),
            ("silent", RejectionKind::TooShortOrIsRoot),
        ] {
            let next = submit(&state, input);
            assert_eq!(next.result.rejection_kind(), Some(kind), "input {input:?}");
            assert_eq!(next.state, state);
        }
    }

    #[test]
    fn accepted_words_are_prepended() {
        let round = RoundState::with_root("silent");
        let round = submit(&round, "lines").state;
        let round = submit(&round, "inlet").state;
        let round = submit(&round, "tinsel").state;

        assert_eq!(round.used_words(), ["tinsel", "inlet", "lines"]);
        assert_eq!(round.word_count(), 3);
    }

    #[test]
    fn score_is_sum_of_letters_plus_bonus() {
        let mut round = RoundState::with_root("silent");

        for word in ["lines", "inlet", "listen", "islet", "tinsel"] {
            let before = round.score();
            round = submit(&round, word).state;
            assert_eq!(round.score(), before + word.len() as u32 + 5);
        }

        let expected: u32 = round
            .used_words()
            .iter()
            .map(|word| word.chars().count() as u32 + 5)
            .sum();
        assert_eq!(round.score(), expected);
    }

    #[test]
    fn unknown_word_is_not_real() {
        let round = RoundState::with_root("silent");
        let next = submit(&round, "tenils");
        assert_eq!(next.result.rejection_kind(), Some(RejectionKind::NotRealWord));
        assert_eq!(next.state, round);
    }

    #[test]
    fn blank_input_yields_nothing() {
        let round = RoundState::with_root("silent");
        assert!(round.submit("", &Rules::default(), &checker).is_none());
        assert!(round.submit(" \t\n", &Rules::default(), &checker).is_none());
    }

    #[test]
    fn input_is_normalized_before_checks() {
        let round = RoundState::with_root("silent");
        let next = submit(&round, "  LiNeS\n");
        assert!(next.result.is_accepted());
        assert_eq!(next.state.used_words(), ["lines"]);

        let again = submit(&next.state, "LINES");
        assert_eq!(again.result.rejection_kind(), Some(RejectionKind::NotOriginal));
    }

    #[test]
    fn rejection_echoes_raw_input() {
        let round = RoundState::with_root("silent");
        let next = submit(&round, "  XyZ ");
        assert_eq!(
            next.result,
            SubmissionResult::Rejected(Rejection {
                kind: RejectionKind::NotPossible,
                input: "  XyZ ".to_string(),
            })
        );
    }

    #[test]
    fn root_in_other_case_is_still_root() {
        let round = RoundState::with_root("silent");
        let next = submit(&round, "SILENT");
        assert_eq!(
            next.result.rejection_kind(),
            Some(RejectionKind::TooShortOrIsRoot)
        );
    }

    #[test]
    fn reset_starts_over() {
        let words = ["silent"];
        let mut rng = StdRng::seed_from_u64(9);
        let round = RoundState::start(&words, &mut rng);
        let played = submit(&round, "lines").state;
        assert_eq!(played.score(), 10);

        let fresh = RoundState::reset(&words, &mut rng);
        assert_eq!(fresh.root_word(), "silent");
        assert!(fresh.used_words().is_empty());
        assert_eq!(fresh.score(), 0);
        // The played round is untouched
        assert_eq!(played.used_words(), ["lines"]);
    }
}
