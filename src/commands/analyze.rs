//! Root analysis command
//!
//! Finds every dictionary word a fresh round on a given root would accept.

use crate::core::{RoundState, Rules, normalize, validate};
use crate::wordlists::Dictionary;
use anyhow::{Result, bail};
use rayon::prelude::*;

/// Result of analyzing a root word
pub struct AnalysisResult {
    pub root: String,
    /// Acceptable words, longest first, then alphabetical
    pub words: Vec<String>,
    /// Score for finding every acceptable word
    pub max_score: u32,
    pub dictionary_size: usize,
}

impl AnalysisResult {
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn longest(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }
}

/// Analyze a root word against the dictionary
///
/// # Errors
///
/// Returns an error if the root word is blank.
pub fn analyze_root(root: &str, dictionary: &Dictionary, rules: &Rules) -> Result<AnalysisResult> {
    let root = normalize(root);
    if root.is_empty() {
        bail!("Root word must not be empty");
    }

    let state = RoundState::with_root(&root);
    let candidates: Vec<&str> = dictionary.iter().collect();

    let mut words: Vec<String> = candidates
        .par_iter()
        .filter(|word| validate(word, &state, rules, dictionary).is_ok())
        .map(|word| (*word).to_string())
        .collect();

    words.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });

    let max_score = words.iter().map(|word| rules.points_for(word)).sum();

    Ok(AnalysisResult {
        root,
        words,
        max_score,
        dictionary_size: dictionary.len(),
    })
}
