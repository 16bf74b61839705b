//! Word list loading utilities
//!
//! Provides functions to load custom target lists from files or convert the
//! embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines and `#` comments are ignored. Entries that are not exactly five
/// letters are skipped. Words are normalized to uppercase and de-duplicated,
/// keeping the first occurrence.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use bulls_bears::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/word_bank.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let mut words: Vec<Word> = Vec::new();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match Word::new(trimmed) {
            Ok(word) if !words.contains(&word) => words.push(word),
            Ok(_) => {}
            Err(e) => tracing::debug!(entry = trimmed, error = %e, "skipping word list entry"),
        }
    }

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use bulls_bears::wordlists::loader::words_from_slice;
/// use bulls_bears::wordlists::WORD_BANK;
///
/// let words = words_from_slice(WORD_BANK);
/// assert_eq!(words.len(), WORD_BANK.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_embedded_bank() {
        use crate::wordlists::WORD_BANK;

        let words = words_from_slice(WORD_BANK);
        assert_eq!(words.len(), WORD_BANK.len());
    }

    #[test]
    fn load_from_file_skips_comments_and_malformed_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# custom list").unwrap();
        writeln!(file, "spoon").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  Tiger  ").unwrap();
        writeln!(file, "toolong").unwrap();
        writeln!(file, "sp00n").unwrap();
        writeln!(file, "SPOON").unwrap();

        let words = load_from_file(file.path()).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["SPOON", "TIGER"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from_file(dir.path().join("missing.txt")).is_err());
    }
}
