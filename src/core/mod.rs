//! Core game types for Word Scramble
//!
//! Round state, its transitions and the validation rules. Nothing here does
//! I/O or formats text for the player; presentation lives in `output` and
//! `interactive`.

mod round;
mod rules;
mod validator;

pub use round::{
    DEFAULT_ROOT_WORD, Rejection, RoundState, Submission, SubmissionResult, normalize,
};
pub use rules::{DEFAULT_LANGUAGE, MIN_WORD_LENGTH, Rules, WORD_BONUS};
pub use validator::{
    Feasibility, RejectionKind, SpellChecker, is_original, is_possible, is_real_word,
    is_too_short_or_root, validate,
};
