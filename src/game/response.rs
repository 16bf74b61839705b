//! Values handed to the API layer
//!
//! Field names on the wire follow the web client (`attempts`, `correct_word`,
//! `time_taken`).

use super::policy::round_to;
use super::record::GameResult;
use crate::core::Feedback;
use serde::Serialize;
use std::time::Duration;

/// Returned when a session starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionInfo {
    /// Seconds allowed for the game
    pub max_time: u64,
    pub max_attempts: u32,
}

/// Returned for every accepted guess, including the terminating one
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuessResult {
    pub feedback: Feedback,
    pub game_over: bool,
    pub score: f64,
    #[serde(rename = "attempts")]
    pub attempts_used: u32,
    pub result: GameResult,
    /// Only revealed once the game is over
    #[serde(rename = "correct_word")]
    pub target_word: Option<String>,
    /// Seconds since the session started, one decimal place
    #[serde(rename = "time_taken")]
    pub elapsed_seconds: f64,
}

/// Read-only view of a session; never includes the target
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionStatus {
    pub active: bool,
    #[serde(rename = "attempts")]
    pub attempts_used: u32,
    pub max_attempts: u32,
    pub elapsed_seconds: f64,
    pub remaining_seconds: f64,
}

impl SessionStatus {
    pub(crate) fn new(
        active: bool,
        attempts_used: u32,
        max_attempts: u32,
        elapsed: Duration,
        max_time: Duration,
    ) -> Self {
        Self {
            active,
            attempts_used,
            max_attempts,
            elapsed_seconds: round_to(elapsed.as_secs_f64(), 1),
            remaining_seconds: max_time.saturating_sub(elapsed).as_secs_f64(),
        }
    }

    /// Whole seconds left, rounded up, for countdown displays
    #[must_use]
    pub fn remaining_whole_seconds(&self) -> u64 {
        self.remaining_seconds.ceil() as u64
    }
}
