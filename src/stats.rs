//! Per-player statistics over recorded outcomes

use crate::game::policy::round_to;
use crate::game::{GameResult, Outcome};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PlayerStats {
    pub total_games: u32,
    pub wins: u32,
    pub losses: u32,
    /// Highest winning score, 0 without a win
    pub best_score: f64,
    /// Percentage of games won, one decimal place
    pub win_rate: f64,
}

impl PlayerStats {
    /// Summarize finished games
    ///
    /// Unfinished outcomes are ignored; only WIN and LOSS count as games.
    pub fn from_outcomes<'a>(outcomes: impl IntoIterator<Item = &'a Outcome>) -> Self {
        let mut stats = Self::default();

        for outcome in outcomes {
            match outcome.result {
                GameResult::Win => {
                    stats.wins += 1;
                    stats.best_score = stats.best_score.max(outcome.score);
                }
                GameResult::Loss => stats.losses += 1,
                GameResult::InProgress => continue,
            }
            stats.total_games += 1;
        }

        if stats.total_games > 0 {
            stats.win_rate = round_to(
                f64::from(stats.wins) / f64::from(stats.total_games) * 100.0,
                1,
            );
        }
        stats
    }
}

/// Group `(player, outcome)` pairs and summarize each player, ordered by id
#[must_use]
pub fn stats_by_player(records: &[(String, Outcome)]) -> BTreeMap<String, PlayerStats> {
    let mut grouped: BTreeMap<&str, Vec<&Outcome>> = BTreeMap::new();
    for (player, outcome) in records {
        grouped.entry(player.as_str()).or_default().push(outcome);
    }

    grouped
        .into_iter()
        .map(|(player, outcomes)| {
            (
                player.to_string(),
                PlayerStats::from_outcomes(outcomes.into_iter()),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(result: GameResult, score: f64) -> Outcome {
        Outcome {
            result,
            score,
            elapsed_seconds: 30.0,
            attempts_used: 3,
        }
    }

    #[test]
    fn no_games() {
        let stats = PlayerStats::from_outcomes(&[]);
        assert_eq!(stats, PlayerStats::default());
        assert_eq!(stats.win_rate, 0.0);
    }

    #[test]
    fn mixed_results() {
        let outcomes = [
            outcome(GameResult::Win, 18.5),
            outcome(GameResult::Loss, 0.0),
            outcome(GameResult::Win, 22.0),
        ];
        let stats = PlayerStats::from_outcomes(&outcomes);

        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.best_score, 22.0);
        assert_eq!(stats.win_rate, 66.7);
    }

    #[test]
    fn only_losses_have_zero_best_score() {
        let outcomes = [outcome(GameResult::Loss, 0.0), outcome(GameResult::Loss, 0.0)];
        let stats = PlayerStats::from_outcomes(&outcomes);
        assert_eq!(stats.best_score, 0.0);
        assert_eq!(stats.win_rate, 0.0);
    }

    #[test]
    fn in_progress_is_not_a_game() {
        let outcomes = [
            outcome(GameResult::InProgress, 0.0),
            outcome(GameResult::Win, 5.0),
        ];
        let stats = PlayerStats::from_outcomes(&outcomes);
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.win_rate, 100.0);
    }

    #[test]
    fn grouped_by_player() {
        let records = vec![
            ("bob".to_string(), outcome(GameResult::Loss, 0.0)),
            ("alice".to_string(), outcome(GameResult::Win, 10.0)),
            ("bob".to_string(), outcome(GameResult::Win, 3.0)),
        ];
        let stats = stats_by_player(&records);

        let players: Vec<&str> = stats.keys().map(String::as_str).collect();
        assert_eq!(players, ["alice", "bob"]);
        assert_eq!(stats["bob"].total_games, 2);
        assert_eq!(stats["bob"].win_rate, 50.0);
        assert_eq!(stats["alice"].best_score, 10.0);
    }
}
