//! Word source loading
//!
//! Reads newline-separated word files. Every line is trimmed and lowercased;
//! blank lines are dropped.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// A word source could not be loaded
#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("failed to load word source {}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Split newline-separated text into normalized words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::parse_lines;
///
/// let words = parse_lines("Silent\r\n\n  amateurs \n");
/// assert_eq!(words, vec!["silent", "amateurs"]);
/// ```
#[must_use]
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns [`WordSourceError::Unavailable`] if the file cannot be opened or
/// is not valid UTF-8.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordSourceError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordSourceError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_lines(&content);
    info!(path = %path.display(), count = words.len(), "loaded word source");
    Ok(words)
}

/// Convert an embedded string slice to owned words
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .map(|word| word.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("word_scramble_{}_{name}", std::process::id()))
    }

    #[test]
    fn parse_lines_drops_blanks_and_normalizes() {
        let words = parse_lines("Crane\n\n  SLATE  \r\n\t\nirate");
        assert_eq!(words, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn parse_lines_empty() {
        assert!(parse_lines("").is_empty());
        assert!(parse_lines("\n\n").is_empty());
    }

    #[test]
    fn words_from_slice_skips_blank() {
        let words = words_from_slice(&["silent", "", " Listen "]);
        assert_eq!(words, vec!["silent", "listen"]);
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = temp_path("start.txt");
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "amateurs").unwrap();
            writeln!(file, "Treasure").unwrap();
            writeln!(file).unwrap();
        }

        let words = load_from_file(&path).unwrap();
        assert_eq!(words, vec!["amateurs", "treasure"]);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn load_missing_file_is_unavailable() {
        let path = temp_path("does_not_exist.txt");
        let err = load_from_file(&path).unwrap_err();

        let WordSourceError::Unavailable { path: reported, source } = &err;
        assert_eq!(reported, &path);
        assert_eq!(source.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("does_not_exist.txt"));
    }
}
