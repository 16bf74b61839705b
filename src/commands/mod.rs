//! Command implementations

pub mod evaluate;
pub mod simple;
pub mod simulate;
pub mod stats;

pub use evaluate::{Evaluation, evaluate_words};
pub use simple::run_simple;
pub use simulate::{SimulationConfig, SimulationReport, run_simulation};
pub use stats::load_player_stats;
