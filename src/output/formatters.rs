//! Formatting utilities for terminal output

/// Uppercase the first letter, leave the rest as is
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A used word prefixed by its letter count, e.g. ` 5  Lines`
#[must_use]
pub fn word_badge(word: &str) -> String {
    format!("{:>2}  {}", word.chars().count(), capitalize(word))
}

/// Score counter line
#[must_use]
pub fn score_line(score: u32) -> String {
    format!("Your score: {score}")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_words() {
        assert_eq!(capitalize("silent"), "Silent");
        assert_eq!(capitalize("Silent"), "Silent");
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn word_badge_shows_length() {
        assert_eq!(word_badge("lines"), " 5  Lines");
        assert_eq!(word_badge("treasures"), " 9  Treasures");
    }

    #[test]
    fn score_line_format() {
        assert_eq!(score_line(0), "Your score: 0");
        assert_eq!(score_line(42), "Your score: 42");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(5.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }
}
