//! Word source selection for the CLI
//!
//! `"bundled"` picks the lists compiled into the binary; anything else is a
//! path to a newline-separated file.

use crate::output::Alert;
use crate::output::display::write_alert;
use crate::wordlists::{Dictionary, WordList, WordSourceError};
use anyhow::{Context, Result};
use std::io::Write;
use tracing::warn;

/// Name that selects the embedded lists
pub const BUNDLED: &str = "bundled";

/// Load the root word list
///
/// On failure the word-source alert is written to `alerts` once and no list
/// is returned, so no round can start.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_word_list<W: Write>(source: &str, alerts: &mut W) -> Result<WordList> {
    let loaded: Result<WordList, WordSourceError> = match source {
        BUNDLED => Ok(WordList::bundled()),
        path => WordList::load(path),
    };

    match loaded {
        Ok(words) => Ok(words),
        Err(err) => {
            let alert = Alert::WordSourceUnavailable(source.to_string());
            if let Err(write_err) = write_alert(alerts, &alert) {
                warn!(error = %write_err, "could not show word source alert");
            }
            Err(err).context("no round was started")
        }
    }
}

/// Load the dictionary for `language`
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_dictionary(source: &str, language: &str) -> Result<Dictionary> {
    match source {
        BUNDLED => Ok(Dictionary::bundled()),
        path => Dictionary::load(path, language)
            .with_context(|| format!("failed to load dictionary for language {language:?}")),
    }
}
