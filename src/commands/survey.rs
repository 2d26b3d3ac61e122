//! Survey every root word
//!
//! Analyzes each root in the word list and summarizes how playable the list is.

use super::analyze::analyze_root;
use crate::core::Rules;
use crate::wordlists::{Dictionary, WordList};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};
use tracing::warn;

/// Playability of a single root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSummary {
    pub root: String,
    pub word_count: usize,
    pub max_score: u32,
}

/// Statistics from surveying the word list
#[derive(Debug)]
pub struct SurveyStatistics {
    pub total_roots: usize,
    pub average_words: f64,
    pub average_max_score: f64,
    pub richest: Option<RootSummary>,
    pub poorest: Option<RootSummary>,
    /// Roots with no acceptable words at all
    pub unplayable: Vec<String>,
    pub total_time: Duration,
}

/// Analyze every root (or the first `limit` roots) of the word list
#[must_use]
pub fn run_survey(
    words: &WordList,
    dictionary: &Dictionary,
    rules: &Rules,
    limit: Option<usize>,
) -> SurveyStatistics {
    let roots: Vec<&str> = words.iter().take(limit.unwrap_or(words.len())).collect();

    let pb = ProgressBar::new(roots.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .map_or_else(|_| ProgressStyle::default_bar(), |style| {
                style.progress_chars("█▓▒░")
            }),
    );

    let start = Instant::now();
    let mut summaries: Vec<RootSummary> = Vec::with_capacity(roots.len());

    for root in roots {
        match analyze_root(root, dictionary, rules) {
            Ok(result) => {
                pb.set_message(format!("{root}: {} words", result.word_count()));
                summaries.push(RootSummary {
                    root: result.root,
                    word_count: result.words.len(),
                    max_score: result.max_score,
                });
            }
            Err(err) => warn!(%root, "skipping root: {err}"),
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    summarize(summaries, start.elapsed())
}

fn summarize(summaries: Vec<RootSummary>, total_time: Duration) -> SurveyStatistics {
    let total_roots = summaries.len();
    let (average_words, average_max_score) = if total_roots == 0 {
        (0.0, 0.0)
    } else {
        let words: usize = summaries.iter().map(|s| s.word_count).sum();
        let score: u64 = summaries.iter().map(|s| u64::from(s.max_score)).sum();
        (
            words as f64 / total_roots as f64,
            score as f64 / total_roots as f64,
        )
    };

    // Ties keep the earliest root in list order
    let richest = summaries
        .iter()
        .rev()
        .max_by_key(|s| s.word_count)
        .cloned();
    let poorest = summaries.iter().min_by_key(|s| s.word_count).cloned();

    let unplayable = summaries
        .iter()
        .filter(|s| s.word_count == 0)
        .map(|s| s.root.clone())
        .collect();

    SurveyStatistics {
        total_roots,
        average_words,
        average_max_score,
        richest,
        poorest,
        unplayable,
        total_time,
    }
}
