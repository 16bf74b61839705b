//! Records produced by a session: one per guess, one per finished game

use crate::core::Feedback;
use serde::{Deserialize, Serialize};

/// Classification of a session after a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameResult {
    Win,
    Loss,
    InProgress,
}

impl GameResult {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Win => "WIN",
            Self::Loss => "LOSS",
            Self::InProgress => "IN_PROGRESS",
        }
    }
}

/// One evaluated guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub guess_word: String,
    pub feedback: Feedback,
    /// 1-based ordinal within the session
    pub attempt_number: u32,
}

/// Final result of a session, computed once when the terminating guess is evaluated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub result: GameResult,
    /// Always 0 unless `result` is `Win`
    pub score: f64,
    pub elapsed_seconds: f64,
    pub attempts_used: u32,
}
