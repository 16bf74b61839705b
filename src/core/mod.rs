//! Core domain types for the guessing game
//!
//! Pure types with no I/O: normalized words, the feedback evaluator and the
//! keyboard tracker built on top of it.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Feedback, Mark};
pub use keyboard::KeyboardState;
pub use word::{WORD_LENGTH, Word, WordError};
