//! Session manager
//!
//! Owns one session per player. Guesses for the same player are serialized on
//! that player's session lock; different players never wait on each other. The
//! map lock is only held long enough to look up, insert or remove an entry.

use super::clock::{Clock, SystemClock};
use super::error::GameError;
use super::response::{GuessResult, SessionInfo, SessionStatus};
use super::session::Session;
use super::{GameConfig, GuessRecord, Outcome};
use crate::core::Word;
use crate::sink::PersistenceSink;
use crate::source::{WordSource, draw_target};
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, TryLockError};

pub type PlayerId = String;

type SessionSlot = Arc<Mutex<Session>>;

pub struct SessionManager {
    sessions: RwLock<FxHashMap<PlayerId, SessionSlot>>,
    source: Arc<dyn WordSource>,
    sink: Arc<dyn PersistenceSink>,
    clock: Arc<dyn Clock>,
    config: GameConfig,
}

impl SessionManager {
    /// Create a manager using the wall clock
    pub fn new(
        config: GameConfig,
        source: Arc<dyn WordSource>,
        sink: Arc<dyn PersistenceSink>,
    ) -> Self {
        Self {
            sessions: RwLock::new(FxHashMap::default()),
            source,
            sink,
            clock: Arc::new(SystemClock),
            config,
        }
    }

    /// Replace the time source
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a fresh game for `player_id`
    ///
    /// Any previous session of the player is dropped without recording a result.
    /// Never fails: if the word source cannot supply a target, the built-in bank is used.
    pub fn start_session(&self, player_id: &str) -> SessionInfo {
        let target = draw_target(self.source.as_ref());
        let session = Session::new(target, self.clock.now());

        let previous = self
            .write_sessions()
            .insert(player_id.to_string(), Arc::new(Mutex::new(session)));

        // A session busy with a guess counts as unfinished
        let unfinished = previous.as_ref().is_some_and(|previous| match previous.try_lock() {
            Ok(session) => session.is_active(),
            Err(TryLockError::Poisoned(e)) => e.into_inner().is_active(),
            Err(TryLockError::WouldBlock) => true,
        });
        if unfinished {
            tracing::debug!(player = player_id, "discarding unfinished session");
        }
        tracing::info!(player = player_id, "session started");

        SessionInfo {
            max_time: self.config.max_time.as_secs(),
            max_attempts: self.config.max_attempts,
        }
    }

    /// Evaluate a guess for `player_id`
    ///
    /// # Errors
    ///
    /// Checked in this order, each rejection leaves the session untouched:
    /// - `GameError::NoSession` if the player never started a game
    /// - `GameError::SessionInactive` if the game is already over
    /// - `GameError::InvalidGuess` if the guess is not 5 alphabetic letters
    pub fn submit_guess(&self, player_id: &str, raw_guess: &str) -> Result<GuessResult, GameError> {
        let slot = self
            .slot(player_id)
            .ok_or_else(|| GameError::NoSession(player_id.to_string()))?;
        let mut session = lock_session(&slot);

        if !session.is_active() {
            return Err(GameError::SessionInactive);
        }
        let guess = Word::guess(raw_guess)?;

        let turn = session
            .apply_guess(&guess, self.clock.now(), &self.config)
            .ok_or(GameError::SessionInactive)?;
        let game_over = turn.verdict.is_game_over();

        tracing::debug!(
            player = player_id,
            attempt = turn.record.attempt_number,
            feedback = %turn.record.feedback,
            "guess evaluated"
        );

        self.persist_guess(player_id, &turn.record);
        if let Some(outcome) = session.outcome().filter(|_| game_over) {
            tracing::info!(
                player = player_id,
                result = outcome.result.as_str(),
                score = outcome.score,
                attempts = outcome.attempts_used,
                "session finished"
            );
            self.persist_outcome(player_id, outcome);
        }

        Ok(GuessResult {
            feedback: turn.record.feedback,
            game_over,
            score: turn.verdict.score,
            attempts_used: turn.record.attempt_number,
            result: turn.verdict.result,
            target_word: game_over.then(|| session.target().text().to_string()),
            elapsed_seconds: super::policy::round_to(turn.elapsed.as_secs_f64(), 1),
        })
    }

    /// Progress of the player's current game, if any
    #[must_use]
    pub fn session_status(&self, player_id: &str) -> Option<SessionStatus> {
        let slot = self.slot(player_id)?;
        let session = lock_session(&slot);
        Some(SessionStatus::new(
            session.is_active(),
            session.attempts_used(),
            self.config.max_attempts,
            session.elapsed(self.clock.now()),
            self.config.max_time,
        ))
    }

    /// Drop sessions idle for longer than the configured ttl
    ///
    /// Returns how many sessions were removed. Nothing is recorded for them.
    pub fn reap_idle(&self) -> usize {
        let now = self.clock.now();
        let ttl = self.config.session_ttl;
        let mut sessions = self.write_sessions();
        let before = sessions.len();
        sessions.retain(|_, slot| lock_session(slot).idle_for(now) <= ttl);
        let reaped = before - sessions.len();
        if reaped > 0 {
            tracing::info!(reaped, "reaped idle sessions");
        }
        reaped
    }

    /// Players whose current game is still running
    #[must_use]
    pub fn active_players(&self) -> Vec<PlayerId> {
        let mut players: Vec<PlayerId> = self
            .read_sessions()
            .iter()
            .filter(|(_, slot)| lock_session(slot).is_active())
            .map(|(player, _)| player.clone())
            .collect();
        players.sort();
        players
    }

    fn slot(&self, player_id: &str) -> Option<SessionSlot> {
        self.read_sessions().get(player_id).cloned()
    }

    fn persist_guess(&self, player_id: &str, record: &GuessRecord) {
        if let Err(e) = self.sink.record_guess(player_id, record) {
            tracing::warn!(player = player_id, error = %e, "failed to record guess");
        }
    }

    fn persist_outcome(&self, player_id: &str, outcome: &Outcome) {
        if let Err(e) = self.sink.record_outcome(player_id, outcome) {
            tracing::warn!(player = player_id, error = %e, "failed to record outcome");
        }
    }

    fn read_sessions(&self) -> std::sync::RwLockReadGuard<'_, FxHashMap<PlayerId, SessionSlot>> {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_sessions(&self) -> std::sync::RwLockWriteGuard<'_, FxHashMap<PlayerId, SessionSlot>> {
        self.sessions.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn lock_session(slot: &SessionSlot) -> MutexGuard<'_, Session> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}
