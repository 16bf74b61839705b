//! In-memory sink

use super::{PersistenceSink, SinkEntry, SinkError};
use crate::game::{GuessRecord, Outcome};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Keeps every record in memory, in arrival order
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<SinkEntry>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<SinkEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of everything recorded so far
    #[must_use]
    pub fn entries(&self) -> Vec<SinkEntry> {
        self.lock().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Guess records of one player, in order
    #[must_use]
    pub fn guesses_for(&self, player: &str) -> Vec<GuessRecord> {
        self.lock()
            .iter()
            .filter_map(|entry| match entry {
                SinkEntry::Guess {
                    player_id, record, ..
                } if player_id == player => Some(record.clone()),
                _ => None,
            })
            .collect()
    }

    /// Outcomes of one player, in order
    #[must_use]
    pub fn outcomes_for(&self, player: &str) -> Vec<Outcome> {
        self.lock()
            .iter()
            .filter_map(|entry| match entry {
                SinkEntry::Outcome {
                    player_id, outcome, ..
                } if player_id == player => Some(outcome.clone()),
                _ => None,
            })
            .collect()
    }
}

impl PersistenceSink for MemorySink {
    fn record_guess(&self, player_id: &str, record: &GuessRecord) -> Result<(), SinkError> {
        self.lock().push(SinkEntry::guess(player_id, record));
        Ok(())
    }

    fn record_outcome(&self, player_id: &str, outcome: &Outcome) -> Result<(), SinkError> {
        self.lock().push(SinkEntry::outcome(player_id, outcome));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use crate::game::GameResult;

    #[test]
    fn filters_by_player() {
        let sink = MemorySink::new();
        let record = GuessRecord {
            guess_word: "SPOON".to_string(),
            feedback: Feedback::PERFECT,
            attempt_number: 1,
        };
        let outcome = Outcome {
            result: GameResult::Win,
            score: 20.0,
            elapsed_seconds: 50.0,
            attempts_used: 1,
        };

        sink.record_guess("alice", &record).unwrap();
        sink.record_guess("bob", &record).unwrap();
        sink.record_outcome("alice", &outcome).unwrap();

        assert_eq!(sink.len(), 3);
        assert_eq!(sink.guesses_for("alice"), vec![record.clone()]);
        assert_eq!(sink.outcomes_for("alice"), vec![outcome]);
        assert!(sink.outcomes_for("bob").is_empty());
        assert_eq!(sink.entries()[1].player_id(), "bob");
    }
}
