//! Display functions for game state and command results

use super::alerts::Alert;
use super::formatters::{capitalize, create_progress_bar, score_line, word_badge};
use crate::commands::{AnalysisResult, SurveyStatistics};
use crate::core::RoundState;
use colored::Colorize;
use std::io::{self, Write};

/// Write an alert's title and message
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_alert<W: Write>(out: &mut W, alert: &Alert) -> io::Result<()> {
    if alert.is_error() {
        writeln!(out, "\n❌ {}", alert.title().red().bold())?;
    } else {
        writeln!(out, "\nℹ️  {}", alert.title().bright_cyan().bold())?;
    }

    for line in alert.message().lines() {
        writeln!(out, "   {line}")?;
    }
    writeln!(out)
}

/// Write the root word and score of a round
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_round_header<W: Write>(out: &mut W, state: &RoundState) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Root word: {}",
        capitalize(state.root_word()).bright_yellow().bold()
    )?;
    writeln!(out, "{}", score_line(state.score()))?;
    writeln!(out, "{}\n", "─".repeat(60).cyan())
}

/// Write an accepted word with the points it earned
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_accepted<W: Write>(out: &mut W, word: &str, points: u32, score: u32) -> io::Result<()> {
    writeln!(
        out,
        "✅ {} {}  ({})",
        capitalize(word).green().bold(),
        format!("+{points}").bright_yellow(),
        score_line(score)
    )
}

/// Write every word found this round, most recent first
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_used_words<W: Write>(out: &mut W, state: &RoundState) -> io::Result<()> {
    if state.used_words().is_empty() {
        return writeln!(out, "No words found yet.");
    }

    writeln!(out, "\nWords found ({}):", state.word_count())?;
    for word in state.used_words() {
        writeln!(out, "  {}", word_badge(word))?;
    }
    writeln!(out, "{}", score_line(state.score()))
}

/// Print the result of analyzing a root word
pub fn print_analysis_result(result: &AnalysisResult, limit: Option<usize>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ROOT ANALYSIS:".bright_cyan().bold(),
        capitalize(&result.root).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Against {} dictionary words:",
        result.dictionary_size
    );
    println!(
        "   Acceptable words: {}",
        result.word_count().to_string().bright_yellow().bold()
    );
    println!(
        "   Maximum score:    {}",
        result.max_score.to_string().green().bold()
    );
    if let Some(longest) = result.longest() {
        println!("   Longest word:     {}", capitalize(longest));
    }

    if result.words.is_empty() {
        return;
    }

    let shown = limit.unwrap_or(result.words.len()).min(result.words.len());
    println!("\n📖 {}", "Words:".bright_cyan().bold());
    for word in result.words.iter().take(shown) {
        println!("   {}", word_badge(word));
    }
    if shown < result.words.len() {
        println!(
            "   {}",
            format!("… and {} more", result.words.len() - shown).bright_black()
        );
    }
}

/// Print the statistics of a word list survey
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD LIST SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Playability:".bright_cyan().bold());
    println!("   Roots surveyed:     {}", stats.total_roots);
    println!(
        "   Average words:      {}",
        format!("{:.1}", stats.average_words).bright_yellow().bold()
    );
    println!("   Average max score:  {:.1}", stats.average_max_score);
    println!(
        "   Time taken:         {:.2}s",
        stats.total_time.as_secs_f64()
    );

    if let (Some(richest), Some(poorest)) = (&stats.richest, &stats.poorest) {
        let max = richest.word_count as f64;

        println!("\n📈 {}", "Extremes:".bright_cyan().bold());
        for (label, summary) in [("Richest", richest), ("Poorest", poorest)] {
            let bar = create_progress_bar(summary.word_count as f64, max, 30);
            println!(
                "   {label}: {:<10} [{}] {} words, {} points",
                capitalize(&summary.root),
                bar.green(),
                summary.word_count,
                summary.max_score
            );
        }
    }

    if stats.unplayable.is_empty() {
        println!("\n{}", "✅ Every root has at least one word".green().bold());
    } else {
        println!(
            "\n{}",
            format!("⚠️  {} roots have no words:", stats.unplayable.len())
                .yellow()
                .bold()
        );
        for root in &stats.unplayable {
            println!("   {root}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(write: F) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn alert_shows_title_and_message_lines() {
        let text = render(|out| write_alert(out, &Alert::ScoreHelp));
        assert!(text.contains("Score calculation"));
        assert!(text.contains("   5 points for each new word"));
        assert!(text.contains("   Try finding longer words"));
    }

    #[test]
    fn round_header_shows_root_and_score() {
        let text = render(|out| write_round_header(out, &RoundState::with_root("silent")));
        assert!(text.contains("Root word: Silent"));
        assert!(text.contains("Your score: 0"));
    }

    #[test]
    fn used_words_empty_round() {
        let text = render(|out| write_used_words(out, &RoundState::with_root("silent")));
        assert_eq!(text, "No words found yet.\n");
    }

    #[test]
    fn accepted_line() {
        let text = render(|out| write_accepted(out, "lines", 10, 10));
        assert!(text.contains("Lines +10"));
        assert!(text.contains("Your score: 10"));
    }
}
