//! Letter knowledge accumulated across guesses
//!
//! Tracks the strongest mark seen for every letter so a front end can color an
//! on-screen keyboard. Priority is exact > present > absent: once a letter has
//! been seen in its exact position it never downgrades.

use super::{Feedback, Mark, Word};

/// Best known mark for each letter A-Z
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: [Option<Mark>; 26],
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold the feedback of one guess into the tracker
    ///
    /// Letters outside A-Z have no key and are skipped.
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &mark) in guess.chars().iter().zip(feedback.marks()) {
            if !letter.is_ascii_uppercase() {
                continue;
            }
            let slot = &mut self.letters[usize::from(letter - b'A')];
            if slot.is_none_or(|known| mark > known) {
                *slot = Some(mark);
            }
        }
    }

    /// Best mark seen for `letter`, or `None` if it was never guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Mark> {
        let upper = letter.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            self.letters[(upper as u8 - b'A') as usize]
        } else {
            None
        }
    }

    /// Forget everything (new game)
    pub fn clear(&mut self) {
        self.letters = [None; 26];
    }
}
