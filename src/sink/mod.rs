//! Persistence sinks for guesses and finished games
//!
//! The session manager treats every sink as best-effort: errors are logged and
//! never reach the player.

mod jsonl;
mod memory;

pub use jsonl::{JsonlSink, read_entries, read_outcomes};
pub use memory::MemorySink;

use crate::game::{GuessRecord, Outcome};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Sink unavailable: {0}")]
    Unavailable(String),
}

/// Destination for game records
pub trait PersistenceSink: Send + Sync {
    /// Record one evaluated guess
    ///
    /// # Errors
    ///
    /// Returns `SinkError` if the record could not be stored.
    fn record_guess(&self, player_id: &str, record: &GuessRecord) -> Result<(), SinkError>;

    /// Record the outcome of a finished game
    ///
    /// # Errors
    ///
    /// Returns `SinkError` if the outcome could not be stored.
    fn record_outcome(&self, player_id: &str, outcome: &Outcome) -> Result<(), SinkError>;
}

/// A stored record with its owner and time of recording
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SinkEntry {
    Guess {
        player_id: String,
        recorded_at: DateTime<Utc>,
        record: GuessRecord,
    },
    Outcome {
        player_id: String,
        recorded_at: DateTime<Utc>,
        outcome: Outcome,
    },
}

impl SinkEntry {
    #[must_use]
    pub fn guess(player_id: &str, record: &GuessRecord) -> Self {
        Self::Guess {
            player_id: player_id.to_string(),
            recorded_at: Utc::now(),
            record: record.clone(),
        }
    }

    #[must_use]
    pub fn outcome(player_id: &str, outcome: &Outcome) -> Self {
        Self::Outcome {
            player_id: player_id.to_string(),
            recorded_at: Utc::now(),
            outcome: outcome.clone(),
        }
    }

    #[must_use]
    pub fn player_id(&self) -> &str {
        match self {
            Self::Guess { player_id, .. } | Self::Outcome { player_id, .. } => player_id,
        }
    }
}

/// Sink that drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl PersistenceSink for NullSink {
    fn record_guess(&self, _player_id: &str, _record: &GuessRecord) -> Result<(), SinkError> {
        Ok(())
    }

    fn record_outcome(&self, _player_id: &str, _outcome: &Outcome) -> Result<(), SinkError> {
        Ok(())
    }
}
