//! Word lists for target selection
//!
//! Provides the built-in word bank compiled into the binary and the validity set
//! derived from it. The validity set seeds word sources; player guesses are
//! never checked against it.

mod embedded;
pub mod loader;

pub use embedded::{WORD_BANK, WORD_BANK_COUNT};

use rustc_hash::FxHashSet;
use std::sync::LazyLock;

static VALID_WORDS: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| WORD_BANK.iter().copied().collect());

/// The set of accepted target words
#[must_use]
pub fn valid_words() -> &'static FxHashSet<&'static str> {
    &VALID_WORDS
}

/// Check whether `word` (any case, surrounding whitespace ignored) is in the built-in bank
#[must_use]
pub fn is_valid_word(word: &str) -> bool {
    VALID_WORDS.contains(word.trim().to_uppercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_count_matches_const() {
        assert_eq!(WORD_BANK.len(), WORD_BANK_COUNT);
    }

    #[test]
    fn bank_words_are_uppercase_five_letters() {
        for &word in WORD_BANK {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn bank_has_no_duplicates() {
        assert_eq!(valid_words().len(), WORD_BANK_COUNT);
    }

    #[test]
    fn expected_count() {
        assert_eq!(WORD_BANK_COUNT, 160, "Expected 160 built-in words");
    }

    #[test]
    fn validity_is_case_insensitive() {
        assert!(is_valid_word("SPOON"));
        assert!(is_valid_word("spoon"));
        assert!(is_valid_word(" Tiger "));
        assert!(!is_valid_word("ZZZZZ"));
        assert!(!is_valid_word("SPOONS"));
    }
}
