//! Bulls & Bears
//!
//! A time-boxed five-letter word guessing game engine: six attempts, four minutes,
//! and a score that rewards finishing early.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use bulls_bears::game::{GameConfig, GameResult, SessionManager};
//! use bulls_bears::sink::NullSink;
//! use bulls_bears::source::BankWordSource;
//!
//! let manager = SessionManager::new(
//!     GameConfig::default(),
//!     Arc::new(BankWordSource::builtin()),
//!     Arc::new(NullSink),
//! );
//!
//! manager.start_session("alice");
//! let result = manager.submit_guess("alice", "crane").unwrap();
//! assert_eq!(result.attempts_used, 1);
//! assert!(result.result == GameResult::InProgress || result.game_over);
//! ```

// Words, feedback and the keyboard tracker
pub mod core;

// Sessions, termination policy and the session manager
pub mod game;

// Where finished games and guesses are recorded
pub mod sink;

// Where target words come from
pub mod source;

// Per-player statistics
pub mod stats;

// Word lists
pub mod wordlists;

// Subscriber setup for the binary
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
