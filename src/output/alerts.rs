//! Player-facing notifications
//!
//! Titles and messages for every modal notification the game shows.

use crate::core::{Rejection, RejectionKind};

/// A notification shown to the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    WordSourceUnavailable(String),
    ShortOrRoot(String),
    NotOriginal(String),
    NotPossible(String),
    NotRealWord(String),
    ScoreHelp,
    ResetConfirm,
}

impl Alert {
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::WordSourceUnavailable(_) => "Something went wrong",
            Self::ShortOrRoot(_) => "Short or Root",
            Self::NotOriginal(_) => "Not original",
            Self::NotPossible(_) => "Not possible",
            Self::NotRealWord(_) => "Not real word",
            Self::ScoreHelp => "Score calculation",
            Self::ResetConfirm => "Reset game",
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::WordSourceUnavailable(source) => {
                format!("Could not load {source}.\nTry checking the file and running again.")
            }
            Self::ShortOrRoot(word) => {
                format!("`{word}` is either the root word OR less than 3 letters.")
            }
            Self::NotOriginal(word) => format!("`{word}` is already used."),
            Self::NotPossible(word) => {
                format!("`{word}` is not possible based on root word letters.")
            }
            Self::NotRealWord(word) => format!("`{word}` is not a real word."),
            Self::ScoreHelp => "5 points for each new word, and 1 point for each letter in a word.\n\
                 Try finding longer words for higher score!"
                .to_string(),
            Self::ResetConfirm => "A new root word will be picked, and score and guessed words \
                 will be reset.\nAre you sure?"
                .to_string(),
        }
    }

    /// Whether the alert reports a failure rather than information
    #[must_use]
    pub const fn is_error(&self) -> bool {
        !matches!(self, Self::ScoreHelp | Self::ResetConfirm)
    }

    /// Whether the alert asks the player to confirm before acting
    #[must_use]
    pub const fn needs_confirmation(&self) -> bool {
        matches!(self, Self::ResetConfirm)
    }
}

impl From<&Rejection> for Alert {
    fn from(rejection: &Rejection) -> Self {
        let word = rejection.input.clone();
        match rejection.kind {
            RejectionKind::TooShortOrIsRoot => Self::ShortOrRoot(word),
            RejectionKind::NotOriginal => Self::NotOriginal(word),
            RejectionKind::NotPossible => Self::NotPossible(word),
            RejectionKind::NotRealWord => Self::NotRealWord(word),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejection(kind: RejectionKind, input: &str) -> Rejection {
        Rejection {
            kind,
            input: input.to_string(),
        }
    }

    #[test]
    fn rejections_map_to_alerts() {
        assert_eq!(
            Alert::from(&rejection(RejectionKind::TooShortOrIsRoot, "it")),
            Alert::ShortOrRoot("it".to_string())
        );
        assert_eq!(
            Alert::from(&rejection(RejectionKind::NotOriginal, "lines")),
            Alert::NotOriginal("lines".to_string())
        );
        assert_eq!(
            Alert::from(&rejection(RejectionKind::NotPossible, "xyz")),
            Alert::NotPossible("xyz".to_string())
        );
        assert_eq!(
            Alert::from(&rejection(RejectionKind::NotRealWord, "tenils")),
            Alert::NotRealWord("tenils".to_string())
        );
    }

    #[test]
    fn messages_quote_the_raw_input() {
        let alert = Alert::from(&rejection(RejectionKind::NotPossible, " XyZ"));
        assert_eq!(alert.title(), "Not possible");
        assert_eq!(
            alert.message(),
            "` XyZ` is not possible based on root word letters."
        );
    }

    #[test]
    fn short_or_root_message() {
        let alert = Alert::ShortOrRoot("silent".to_string());
        assert_eq!(alert.title(), "Short or Root");
        assert_eq!(
            alert.message(),
            "`silent` is either the root word OR less than 3 letters."
        );
    }

    #[test]
    fn only_reset_needs_confirmation() {
        assert!(Alert::ResetConfirm.needs_confirmation());
        assert!(!Alert::ScoreHelp.needs_confirmation());
        assert!(!Alert::NotOriginal("lines".to_string()).needs_confirmation());
    }

    #[test]
    fn informational_alerts_are_not_errors() {
        assert!(!Alert::ScoreHelp.is_error());
        assert!(!Alert::ResetConfirm.is_error());
        assert!(Alert::WordSourceUnavailable("start.txt".to_string()).is_error());
        assert!(Alert::NotRealWord("tenils".to_string()).is_error());
    }

    #[test]
    fn word_source_message_names_the_file() {
        let alert = Alert::WordSourceUnavailable("/tmp/start.txt".to_string());
        assert_eq!(alert.title(), "Something went wrong");
        assert_eq!(
            alert.message(),
            "Could not load /tmp/start.txt.\nTry checking the file and running again."
        );
    }

    #[test]
    fn score_help_explains_points() {
        let message = Alert::ScoreHelp.message();
        assert!(message.starts_with("5 points for each new word"));
        assert!(message.contains("longer words"));
    }
}
