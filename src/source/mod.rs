//! Target word sources
//!
//! A word source hands out random target words. Sources are allowed to fail;
//! `draw_target` always produces a usable target by falling back to the
//! built-in word bank.

use crate::core::Word;
use crate::wordlists::{WORD_BANK, WORD_BANK_COUNT, loader::words_from_slice};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{LazyLock, Mutex, PoisonError};

/// Supplier of random target words
pub trait WordSource: Send + Sync {
    /// Draw a random word, or `None` if the source is unavailable
    fn draw_random_word(&self) -> Option<String>;
}

/// Uniform draw from an in-memory list of words
#[derive(Debug)]
pub struct BankWordSource {
    words: Vec<Word>,
    rng: Mutex<StdRng>,
}

impl BankWordSource {
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self {
            words,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Source with a fixed seed, for reproducible draws
    #[must_use]
    pub fn with_seed(words: Vec<Word>, seed: u64) -> Self {
        Self {
            words,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Source over the built-in word bank
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(words_from_slice(WORD_BANK))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for BankWordSource {
    fn draw_random_word(&self) -> Option<String> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        self.words
            .choose(&mut *rng)
            .map(|word| word.text().to_string())
    }
}

/// Draw a target word from `source`, falling back to the built-in bank
///
/// The fallback kicks in when the source returns nothing or returns something
/// that is not a 5-letter alphabetic word. This never fails.
#[must_use]
pub fn draw_target(source: &dyn WordSource) -> Word {
    match source.draw_random_word().map(Word::new) {
        Some(Ok(word)) => word,
        Some(Err(e)) => {
            tracing::warn!(error = %e, "word source returned a malformed word, using built-in bank");
            fallback_word()
        }
        None => {
            tracing::warn!("word source unavailable, using built-in bank");
            fallback_word()
        }
    }
}

/// The built-in bank as words; build.rs rejects any entry that would be dropped
static BANK: LazyLock<Vec<Word>> = LazyLock::new(|| words_from_slice(WORD_BANK));

const _: () = assert!(WORD_BANK_COUNT > 0, "built-in word bank must not be empty");

/// Uniform draw from the built-in word bank
#[must_use]
pub fn fallback_word() -> Word {
    BANK.choose(&mut rand::rng())
        .cloned()
        .unwrap_or_else(|| unreachable!("built-in word bank is non-empty and valid"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::is_valid_word;

    struct Offline;

    impl WordSource for Offline {
        fn draw_random_word(&self) -> Option<String> {
            None
        }
    }

    struct Garbage;

    impl WordSource for Garbage {
        fn draw_random_word(&self) -> Option<String> {
            Some("x1".to_string())
        }
    }

    #[test]
    fn builtin_source_draws_valid_words() {
        let source = BankWordSource::builtin();
        assert_eq!(source.len(), WORD_BANK.len());
        for _ in 0..50 {
            let word = source.draw_random_word().unwrap();
            assert!(is_valid_word(&word), "{word} not in bank");
        }
    }

    #[test]
    fn empty_source_returns_none() {
        let source = BankWordSource::new(Vec::new());
        assert!(source.is_empty());
        assert!(source.draw_random_word().is_none());
    }

    #[test]
    fn seeded_sources_are_reproducible() {
        let words = words_from_slice(WORD_BANK);
        let a = BankWordSource::with_seed(words.clone(), 7);
        let b = BankWordSource::with_seed(words, 7);
        for _ in 0..10 {
            assert_eq!(a.draw_random_word(), b.draw_random_word());
        }
    }

    #[test]
    fn draw_covers_the_whole_list() {
        let words = words_from_slice(&["apple", "beach", "brain"]);
        let source = BankWordSource::with_seed(words, 1);
        let mut seen = rustc_hash::FxHashSet::default();
        for _ in 0..200 {
            seen.insert(draw_target(&source));
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn offline_source_falls_back_to_bank() {
        let word = draw_target(&Offline);
        assert!(is_valid_word(word.text()));
    }

    #[test]
    fn malformed_source_word_falls_back_to_bank() {
        let word = draw_target(&Garbage);
        assert!(is_valid_word(word.text()));
    }

    #[test]
    fn builtin_bank_loses_no_words() {
        assert_eq!(BANK.len(), WORD_BANK_COUNT);
        for _ in 0..50 {
            assert!(BANK.contains(&fallback_word()));
        }
    }

    #[test]
    fn source_words_are_normalized() {
        let source = BankWordSource::new(words_from_slice(&["tiger"]));
        assert_eq!(draw_target(&source).text(), "TIGER");
    }
}
