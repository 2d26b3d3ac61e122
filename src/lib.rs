//! Word Scramble
//!
//! Build as many words as you can from the letters of a random root word.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{RoundState, Rules, SubmissionResult};
//! use word_scramble::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::bundled();
//! let round = RoundState::with_root("silent");
//!
//! let next = round.submit("lines", &Rules::default(), &dictionary).unwrap();
//! assert_eq!(
//!     next.result,
//!     SubmissionResult::Accepted { word: "lines".to_string(), points: 10 }
//! );
//! assert_eq!(next.state.score(), 10);
//! ```

// Core game types
pub mod core;

// Session owning the live round
pub mod game;

// Word lists and dictionary
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
