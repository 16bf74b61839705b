//! Termination and scoring policy
//!
//! Checked after every guess, first match wins:
//! 1. Timeout: elapsed time beyond the limit is a loss, even for a correct guess
//! 2. Win: every position exact
//! 3. Attempts exhausted: a loss
//! 4. Otherwise the game continues

use super::GameConfig;
use super::record::GameResult;
use crate::core::Feedback;
use std::time::Duration;

/// Points for a win at the deadline
pub const BASE_WIN_SCORE: f64 = 1.0;

/// Points per second left on the clock
pub const TIME_BONUS_PER_SECOND: f64 = 0.1;

/// Result and score after one guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    pub result: GameResult,
    pub score: f64,
}

impl Verdict {
    const fn loss() -> Self {
        Self {
            result: GameResult::Loss,
            score: 0.0,
        }
    }

    const fn in_progress() -> Self {
        Self {
            result: GameResult::InProgress,
            score: 0.0,
        }
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.result.is_terminal()
    }
}

/// Decide the state of a session after its latest guess
#[must_use]
pub fn judge(
    feedback: &Feedback,
    attempts_used: u32,
    elapsed: Duration,
    config: &GameConfig,
) -> Verdict {
    if elapsed > config.max_time {
        Verdict::loss()
    } else if feedback.is_perfect() {
        Verdict {
            result: GameResult::Win,
            score: win_score(elapsed, config.max_time),
        }
    } else if attempts_used >= config.max_attempts {
        Verdict::loss()
    } else {
        Verdict::in_progress()
    }
}

/// Score for a win after `elapsed`: one point plus a bonus for time left
///
/// # Examples
/// ```
/// use bulls_bears::game::policy::win_score;
/// use std::time::Duration;
///
/// let limit = Duration::from_secs(240);
/// assert_eq!(win_score(Duration::ZERO, limit), 25.0);
/// assert_eq!(win_score(limit, limit), 1.0);
/// ```
#[must_use]
pub fn win_score(elapsed: Duration, max_time: Duration) -> f64 {
    let remaining = max_time.saturating_sub(elapsed).as_secs_f64();
    round_to(BASE_WIN_SCORE + remaining * TIME_BONUS_PER_SECOND, 2)
}

/// Round half away from zero to `places` decimals
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    fn miss() -> Feedback {
        Feedback::new([Mark::Exact, Mark::Present, Mark::Absent, Mark::Absent, Mark::Absent])
    }

    #[test]
    fn win_scores_at_the_edges() {
        let config = GameConfig::default();
        assert_eq!(win_score(Duration::ZERO, config.max_time), 25.0);
        assert_eq!(win_score(config.max_time, config.max_time), 1.0);
        assert_eq!(win_score(secs(60.0), config.max_time), 19.0);
    }

    #[test]
    fn win_score_rounds_to_two_places() {
        let config = GameConfig::default();
        assert_eq!(win_score(secs(100.004), config.max_time), 15.0);
        assert_eq!(win_score(secs(12.34), config.max_time), 23.77);
    }

    #[test]
    fn win_score_strictly_decreasing() {
        let config = GameConfig::default();
        let mut previous = f64::INFINITY;
        for tenth in 0..=2400 {
            let score = win_score(secs(f64::from(tenth) / 10.0), config.max_time);
            assert!(score < previous, "score did not drop at {tenth} tenths");
            previous = score;
        }
    }

    #[test]
    fn perfect_guess_in_time_wins() {
        let config = GameConfig::default();
        let verdict = judge(&Feedback::PERFECT, 3, secs(30.0), &config);
        assert_eq!(verdict.result, GameResult::Win);
        assert_eq!(verdict.score, 22.0);
        assert!(verdict.is_game_over());
    }

    #[test]
    fn perfect_guess_exactly_at_deadline_wins() {
        let config = GameConfig::default();
        let verdict = judge(&Feedback::PERFECT, 1, config.max_time, &config);
        assert_eq!(verdict.result, GameResult::Win);
        assert_eq!(verdict.score, 1.0);
    }

    #[test]
    fn timeout_beats_a_correct_guess() {
        let config = GameConfig::default();
        let late = config.max_time + Duration::from_millis(1);
        let verdict = judge(&Feedback::PERFECT, 2, late, &config);
        assert_eq!(verdict.result, GameResult::Loss);
        assert_eq!(verdict.score, 0.0);
    }

    #[test]
    fn timeout_beats_attempts() {
        let config = GameConfig::default();
        let verdict = judge(&miss(), 1, secs(500.0), &config);
        assert_eq!(verdict.result, GameResult::Loss);
    }

    #[test]
    fn win_on_last_attempt_beats_exhaustion() {
        let config = GameConfig::default();
        let verdict = judge(&Feedback::PERFECT, config.max_attempts, secs(10.0), &config);
        assert_eq!(verdict.result, GameResult::Win);
    }

    #[test]
    fn last_attempt_miss_loses() {
        let config = GameConfig::default();
        let verdict = judge(&miss(), config.max_attempts, secs(10.0), &config);
        assert_eq!(verdict.result, GameResult::Loss);
        assert_eq!(verdict.score, 0.0);
    }

    #[test]
    fn earlier_miss_continues() {
        let config = GameConfig::default();
        let verdict = judge(&miss(), config.max_attempts - 1, secs(10.0), &config);
        assert_eq!(verdict.result, GameResult::InProgress);
        assert_eq!(verdict.score, 0.0);
        assert!(!verdict.is_game_over());
    }

    #[test]
    fn round_to_places() {
        assert_eq!(round_to(12.345_67, 1), 12.3);
        assert_eq!(round_to(12.35, 0), 12.0);
        assert_eq!(round_to(0.0, 2), 0.0);
    }
}
