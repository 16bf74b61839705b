//! Game limits

use std::time::Duration;
use thiserror::Error;

/// Guesses allowed per session
pub const MAX_ATTEMPTS: u32 = 6;

/// Time allowed per session
pub const MAX_TIME: Duration = Duration::from_secs(240);

/// Idle time after which a session may be reaped
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 60);

/// Limits applied to every session of a manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: u32,
    pub max_time: Duration,
    pub session_ttl: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            max_time: MAX_TIME,
            session_ttl: DEFAULT_SESSION_TTL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max attempts must be at least 1")]
    ZeroAttempts,
    #[error("max time must be greater than zero")]
    ZeroTime,
    #[error("session ttl ({ttl:?}) must not be shorter than max time ({max_time:?})")]
    TtlTooShort { ttl: Duration, max_time: Duration },
}

impl GameConfig {
    /// Limits with the default idle ttl, stretched to cover long games
    #[must_use]
    pub fn with_limits(max_attempts: u32, max_time: Duration) -> Self {
        Self {
            max_attempts,
            max_time,
            session_ttl: DEFAULT_SESSION_TTL.max(max_time),
        }
    }

    /// Check that the limits describe a playable game
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no guess or no time would be allowed, or if idle
    /// sessions could be reaped before their clock runs out.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        if self.max_time.is_zero() {
            return Err(ConfigError::ZeroTime);
        }
        if self.session_ttl < self.max_time {
            return Err(ConfigError::TtlTooShort {
                ttl: self.session_ttl,
                max_time: self.max_time,
            });
        }
        Ok(())
    }
}
