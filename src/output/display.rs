//! Display functions for command results

use super::formatters::{create_progress_bar, tile_row};
use crate::commands::{Evaluation, SimulationReport};
use crate::game::{GameResult, GuessResult};
use crate::stats::PlayerStats;
use colored::Colorize;
use std::collections::BTreeMap;

/// Print the feedback for a single guess against a known target
pub fn print_evaluation(evaluation: &Evaluation) {
    println!(
        "\n{} vs {}",
        evaluation.guess.text().bright_white().bold(),
        evaluation.target.text().bright_yellow().bold()
    );
    println!(
        "\n  {}   {}",
        tile_row(evaluation.guess.text(), &evaluation.feedback),
        evaluation.feedback.to_emoji()
    );
    println!(
        "\n  Exact: {}  Present: {}",
        evaluation.feedback.count_exact().to_string().green(),
        evaluation.feedback.count_present().to_string().yellow()
    );
}

/// Print one accepted guess and, when the game ended, its result
pub fn print_guess_result(guess: &str, result: &GuessResult, max_attempts: u32) {
    println!(
        "  {}  {}/{}  {:.1}s",
        tile_row(guess, &result.feedback),
        result.attempts_used,
        max_attempts,
        result.elapsed_seconds
    );

    if !result.game_over {
        return;
    }

    let word = result.target_word.as_deref().unwrap_or("?????");
    println!();
    match result.result {
        GameResult::Win => println!(
            "{} {} in {} {}",
            "🎉 Solved".green().bold(),
            word.bright_yellow().bold(),
            result.attempts_used,
            if result.attempts_used == 1 {
                "guess"
            } else {
                "guesses"
            }
        ),
        GameResult::Loss | GameResult::InProgress => println!(
            "{} The word was {}",
            "❌ Game over.".red().bold(),
            word.bright_yellow().bold()
        ),
    }
    println!(
        "   Score: {}",
        format!("{:.2}", result.score).bright_cyan().bold()
    );
}

/// Print the result of a simulation run
pub fn print_simulation_report(report: &SimulationReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Outcomes:".bright_cyan().bold());
    println!("   Players:          {}", report.players);
    println!("   Wins:             {}", report.wins.to_string().green());
    println!("   Losses:           {}", report.losses.to_string().red());
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", report.win_rate()).bright_yellow().bold()
    );
    println!("   Average score:    {:.2}", report.average_score);
    println!("   Best score:       {:.2}", report.best_score);
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", report.games_per_second);

    if report.wins == 0 {
        return;
    }

    println!("\n📈 {}", "Winning attempt:".bright_cyan().bold());
    for (attempt, &count) in &report.distribution {
        let pct = count as f64 / report.wins as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {attempt}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}

/// Print statistics for each player
pub fn print_player_stats(stats: &BTreeMap<String, PlayerStats>) {
    if stats.is_empty() {
        println!("No finished games recorded.");
        return;
    }

    println!(
        "\n{:<20} {:>6} {:>6} {:>6} {:>9} {:>10}",
        "Player".bold(),
        "Games".bold(),
        "Wins".bold(),
        "Losses".bold(),
        "Win rate".bold(),
        "Best".bold()
    );
    println!("{}", "─".repeat(62).bright_black());
    for (player, s) in stats {
        println!(
            "{:<20} {:>6} {:>6} {:>6} {:>8.1}% {:>10.2}",
            player, s.total_games, s.wins, s.losses, s.win_rate, s.best_score
        );
    }
}
