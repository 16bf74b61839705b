//! State of one player's game

use super::GameConfig;
use super::policy::{self, Verdict};
use super::record::{GuessRecord, Outcome};
use crate::core::{Feedback, Word};
use std::time::{Duration, Instant};

/// One player's game
///
/// The target word and start time never change after creation. Once a
/// terminating guess has been evaluated the session is inactive for good and
/// holds its `Outcome`.
#[derive(Debug, Clone)]
pub struct Session {
    target: Word,
    attempts_used: u32,
    start_time: Instant,
    last_active: Instant,
    active: bool,
    outcome: Option<Outcome>,
}

/// Everything produced by evaluating one guess
#[derive(Debug, Clone)]
pub struct Turn {
    pub record: GuessRecord,
    pub verdict: Verdict,
    pub elapsed: Duration,
}

impl Session {
    #[must_use]
    pub fn new(target: Word, now: Instant) -> Self {
        Self {
            target,
            attempts_used: 0,
            start_time: now,
            last_active: now,
            active: true,
            outcome: None,
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.start_time)
    }

    #[must_use]
    pub fn idle_for(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last_active)
    }

    /// Count and evaluate a guess, then apply the termination policy
    ///
    /// Callers must check `is_active` first; an inactive session is left untouched
    /// and `None` is returned.
    pub fn apply_guess(&mut self, guess: &Word, now: Instant, config: &GameConfig) -> Option<Turn> {
        if !self.active {
            return None;
        }

        self.attempts_used += 1;
        self.last_active = now;

        let elapsed = self.elapsed(now);
        let feedback = Feedback::evaluate(guess, &self.target);
        let verdict = policy::judge(&feedback, self.attempts_used, elapsed, config);

        if verdict.is_game_over() {
            self.active = false;
            self.outcome = Some(Outcome {
                result: verdict.result,
                score: verdict.score,
                elapsed_seconds: elapsed.as_secs_f64(),
                attempts_used: self.attempts_used,
            });
        }

        Some(Turn {
            record: GuessRecord {
                guess_word: guess.text().to_string(),
                feedback,
                attempt_number: self.attempts_used,
            },
            verdict,
            elapsed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameResult;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn new_session_is_active_and_empty() {
        let now = Instant::now();
        let session = Session::new(word("spoon"), now);
        assert!(session.is_active());
        assert_eq!(session.attempts_used(), 0);
        assert!(session.outcome().is_none());
        assert_eq!(session.elapsed(now), Duration::ZERO);
    }

    #[test]
    fn guesses_are_numbered_from_one() {
        let config = GameConfig::default();
        let now = Instant::now();
        let mut session = Session::new(word("spoon"), now);

        let first = session.apply_guess(&word("tiger"), now, &config).unwrap();
        let second = session.apply_guess(&word("spool"), now, &config).unwrap();
        assert_eq!(first.record.attempt_number, 1);
        assert_eq!(second.record.attempt_number, 2);
        assert_eq!(second.record.guess_word, "SPOOL");
        assert_eq!(second.verdict.result, GameResult::InProgress);
    }

    #[test]
    fn win_freezes_session_with_outcome() {
        let config = GameConfig::default();
        let start = Instant::now();
        let mut session = Session::new(word("spoon"), start);

        let turn = session
            .apply_guess(&word("spoon"), start + Duration::from_secs(40), &config)
            .unwrap();
        assert_eq!(turn.verdict.result, GameResult::Win);
        assert!(!session.is_active());

        let outcome = session.outcome().unwrap();
        assert_eq!(outcome.result, GameResult::Win);
        assert_eq!(outcome.score, 21.0);
        assert_eq!(outcome.attempts_used, 1);
        assert!((outcome.elapsed_seconds - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn inactive_session_ignores_guesses() {
        let config = GameConfig::default();
        let now = Instant::now();
        let mut session = Session::new(word("spoon"), now);
        session.apply_guess(&word("spoon"), now, &config).unwrap();

        assert!(session.apply_guess(&word("tiger"), now, &config).is_none());
        assert_eq!(session.attempts_used(), 1);
        assert_eq!(session.outcome().unwrap().result, GameResult::Win);
    }
}
