//! Game sessions: limits, termination policy, per-player state and the manager

pub mod clock;
mod config;
mod error;
mod manager;
pub mod policy;
mod record;
mod response;
mod session;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConfigError, DEFAULT_SESSION_TTL, GameConfig, MAX_ATTEMPTS, MAX_TIME};
pub use error::{ErrorClass, GameError};
pub use manager::{PlayerId, SessionManager};
pub use policy::Verdict;
pub use record::{GameResult, GuessRecord, Outcome};
pub use response::{GuessResult, SessionInfo, SessionStatus};
pub use session::{Session, Turn};
