//! Per-letter feedback for a guess
//!
//! Each position of a guess is classified as:
//! - Exact (a "bull"): right letter, right position
//! - Present (a "bear"): letter occurs elsewhere in the target and has not been credited yet
//! - Absent: everything else
//!
//! On the wire the marks use the colors of the web client: `green`, `yellow`, `gray`.

use super::Word;
use super::word::WORD_LENGTH;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mark {
    #[serde(rename = "gray")]
    Absent,
    #[serde(rename = "yellow")]
    Present,
    #[serde(rename = "green")]
    Exact,
}

impl Mark {
    /// Emoji tile for this mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Color name used by the web client
    #[must_use]
    pub const fn color_name(self) -> &'static str {
        match self {
            Self::Exact => "green",
            Self::Present => "yellow",
            Self::Absent => "gray",
        }
    }
}

/// Feedback for a whole guess, one mark per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// All positions exact
    pub const PERFECT: Self = Self([Mark::Exact; WORD_LENGTH]);

    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// Evaluate `guess` against `target`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume both letters
    /// 2. Second pass: for every letter not yet consumed, credit it as present if
    ///    an unconsumed copy remains in the target, consuming the leftmost copy
    ///
    /// A repeated guess letter is therefore credited at most as many times as it
    /// remains uncredited in the target.
    ///
    /// # Examples
    /// ```
    /// use bulls_bears::core::{Feedback, Mark, Word};
    ///
    /// let guess = Word::new("spool").unwrap();
    /// let target = Word::new("spoon").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target);
    ///
    /// assert_eq!(feedback.marks()[..4], [Mark::Exact; 4]);
    /// assert_eq!(feedback.marks()[4], Mark::Absent);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut guess_left = (*guess.chars()).map(Some);
        let mut target_left = (*target.chars()).map(Some);

        // Allow: Index needed to pair guess[i], target[i] and marks[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess_left[i] == target_left[i] {
                marks[i] = Mark::Exact;
                guess_left[i] = None;
                target_left[i] = None;
            }
        }

        for (i, letter) in guess_left.iter().enumerate() {
            let Some(letter) = letter else { continue };
            if let Some(slot) = target_left.iter_mut().find(|t| **t == Some(*letter)) {
                marks[i] = Mark::Present;
                *slot = None;
            }
        }

        Self(marks)
    }

    /// The marks in position order
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is exact
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&m| m == Mark::Exact)
    }

    /// Count the exact positions
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Exact).count()
    }

    /// Count the present-but-displaced positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Present).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for exact
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (mark, ch) in marks.iter_mut().zip(chars) {
            *mark = match ch {
                'G' | 'g' | '🟩' => Mark::Exact,
                'Y' | 'y' | '🟨' => Mark::Present,
                '-' | '_' | '⬜' => Mark::Absent,
                _ => return None,
            };
        }

        Some(Self(marks))
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
