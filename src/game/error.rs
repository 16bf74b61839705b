//! Errors returned to callers of the session manager

use crate::core::WordError;
use thiserror::Error;

/// How an API layer should surface a `GameError`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The caller has no game to act on (401-equivalent)
    Unauthorized,
    /// The request cannot be applied to the current game (400-equivalent)
    BadRequest,
}

/// A rejected request. Rejections never mutate session state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("No game session for player '{0}'. Start a new game first.")]
    NoSession(String),
    #[error("No active game. Start a new game first.")]
    SessionInactive,
    #[error("Guess must be exactly 5 letters: {0}")]
    InvalidGuess(#[from] WordError),
}

impl GameError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::NoSession(_) => ErrorClass::Unauthorized,
            Self::SessionInactive | Self::InvalidGuess(_) => ErrorClass::BadRequest,
        }
    }

    /// HTTP status code for this error
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self.class() {
            ErrorClass::Unauthorized => 401,
            ErrorClass::BadRequest => 400,
        }
    }
}
