//! Five-letter word representation
//!
//! A Word stores a normalized (trimmed, uppercase) 5-letter word. Target words
//! are ASCII; guesses may use any alphabetic letters.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word of the game
pub const WORD_LENGTH: usize = 5;

/// A normalized 5-letter word
///
/// Stores the word both as text and as a byte array for position-wise comparison.
/// Letters outside A-Z are stored as [`Word::OTHER_LETTER`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for malformed words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Byte stored for a letter outside A-Z; never equal to an ASCII letter
    pub const OTHER_LETTER: u8 = 0;

    /// Create a new Word from raw input
    ///
    /// Surrounding whitespace is trimmed and letters are uppercased before
    /// validation. Any 5 letters A-Z are accepted; dictionary membership is not
    /// checked here.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use bulls_bears::core::Word;
    ///
    /// let word = Word::new(" spoon ").unwrap();
    /// assert_eq!(word.text(), "SPOON");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sp0on").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_uppercase();

        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut chars = [0u8; WORD_LENGTH];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Create a guess from raw input
    ///
    /// Like [`Word::new`], but any alphabetic letters are accepted, not only
    /// A-Z. Letters outside A-Z keep their text but can never match a target
    /// letter.
    ///
    /// # Errors
    /// Returns `WordError` if the length is not exactly 5 or a character is not
    /// alphabetic.
    ///
    /// # Examples
    /// ```
    /// use bulls_bears::core::Word;
    ///
    /// let word = Word::guess("crème").unwrap();
    /// assert_eq!(word.text(), "CRÈME");
    /// assert_eq!(word.char_at(2), Word::OTHER_LETTER);
    ///
    /// assert!(Word::guess("cr3me").is_err());
    /// ```
    pub fn guess(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_uppercase();

        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        if !text.chars().all(char::is_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }

        let mut chars = [Self::OTHER_LETTER; WORD_LENGTH];
        for (slot, letter) in chars.iter_mut().zip(text.chars()) {
            if letter.is_ascii_uppercase() {
                *slot = letter as u8;
            }
        }

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
