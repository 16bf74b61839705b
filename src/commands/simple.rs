//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. The clock keeps running while the player
//! types; a late guess is still evaluated and then ends the game.

use crate::game::SessionManager;
use crate::output::formatters::format_clock;
use crate::output::print_guess_result;
use colored::Colorize;
use std::io::{self, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Quit,
    NewGame,
    Status,
    Guess(String),
}

impl LineCommand {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" | ":q" => Self::Quit,
            "new" | ":n" => Self::NewGame,
            "time" | "status" | ":t" => Self::Status,
            _ => Self::Guess(line.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(manager: &SessionManager, player_id: &str) -> io::Result<()> {
    let config = *manager.config();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Bulls & Bears - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "Guess the five-letter word in {} tries within {}.",
        config.max_attempts,
        format_clock(config.max_time.as_secs())
    );
    println!("  - {} right letter, right spot", " G ".black().on_green());
    println!("  - {} in the word, wrong spot", " Y ".black().on_yellow());
    println!("  - {} not in the word", " - ".white().on_bright_black());
    println!("\nCommands: 'time' for the clock, 'new' for a new game, 'quit' to exit\n");

    manager.start_session(player_id);

    loop {
        let Some(line) = get_user_input("Guess")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match LineCommand::parse(&line) {
            LineCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineCommand::NewGame => {
                manager.start_session(player_id);
                println!("\n🔄 New game started!\n");
            }
            LineCommand::Status => print_status(manager, player_id),
            LineCommand::Guess(guess) => match manager.submit_guess(player_id, &guess) {
                Ok(result) => {
                    print_guess_result(&guess.trim().to_uppercase(), &result, config.max_attempts);
                    if result.game_over {
                        if !ask_play_again()? {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                        manager.start_session(player_id);
                        println!("\n🔄 New game started!\n");
                    }
                }
                Err(e) => println!("❌ {e}"),
            },
        }
    }
}

fn print_status(manager: &SessionManager, player_id: &str) {
    match manager.session_status(player_id) {
        Some(status) if status.active => println!(
            "⏱  {} left, attempt {}/{}",
            format_clock(status.remaining_whole_seconds()),
            status.attempts_used + 1,
            status.max_attempts
        ),
        Some(_) => println!("Game over. Type 'new' to play again."),
        None => println!("No game yet. Type 'new' to start."),
    }
}

fn ask_play_again() -> io::Result<bool> {
    Ok(get_user_input("Play again? (yes/no)")?
        .is_some_and(|answer| matches!(answer.to_lowercase().as_str(), "yes" | "y")))
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
