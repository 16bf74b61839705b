//! TUI application state and logic

use crate::core::{KeyboardState, WORD_LENGTH};
use crate::game::{GameResult, GuessRecord, Outcome, SessionManager};
use crate::stats::PlayerStats;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Redraw interval for the countdown
const TICK: Duration = Duration::from_millis(200);

/// Application state
pub struct App<'a> {
    pub manager: &'a SessionManager,
    pub player_id: String,
    pub phase: Phase,
    pub rows: Vec<GuessRecord>,
    pub input_buffer: String,
    pub keyboard: KeyboardState,
    pub messages: Vec<Message>,
    pub outcomes: Vec<Outcome>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Playing,
    Finished {
        result: GameResult,
        score: f64,
        target: String,
    },
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    #[must_use]
    pub fn new(manager: &'a SessionManager, player_id: &str) -> Self {
        let mut app = Self {
            manager,
            player_id: player_id.to_string(),
            phase: Phase::Playing,
            rows: Vec::new(),
            input_buffer: String::new(),
            keyboard: KeyboardState::new(),
            messages: Vec::new(),
            outcomes: Vec::new(),
            should_quit: false,
        };
        app.new_game();
        app
    }

    pub fn new_game(&mut self) {
        let info = self.manager.start_session(&self.player_id);
        self.phase = Phase::Playing;
        self.rows.clear();
        self.input_buffer.clear();
        self.keyboard.clear();
        self.messages.clear();
        self.add_message(
            &format!(
                "New game! {} tries, {} seconds.",
                info.max_attempts, info.max_time
            ),
            MessageStyle::Info,
        );
    }

    pub fn push_letter(&mut self, letter: char) {
        let upper: Vec<char> = letter.to_uppercase().collect();
        if self.phase == Phase::Playing
            && letter.is_alphabetic()
            && self.typed_len() + upper.len() <= WORD_LENGTH
        {
            self.input_buffer.extend(upper);
        }
    }

    fn typed_len(&self) -> usize {
        self.input_buffer.chars().count()
    }

    pub fn pop_letter(&mut self) {
        self.input_buffer.pop();
    }

    /// Send the typed word to the session manager
    pub fn submit(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        if self.typed_len() < WORD_LENGTH {
            self.add_message("Not enough letters", MessageStyle::Error);
            return;
        }

        let guess = std::mem::take(&mut self.input_buffer);
        match self.manager.submit_guess(&self.player_id, &guess) {
            Ok(result) => {
                let record = GuessRecord {
                    guess_word: guess,
                    feedback: result.feedback,
                    attempt_number: result.attempts_used,
                };
                if let Ok(word) = crate::core::Word::guess(&record.guess_word) {
                    self.keyboard.record(&word, &record.feedback);
                }
                self.rows.push(record);

                if result.game_over {
                    self.finish(
                        result.result,
                        result.score,
                        result.target_word.unwrap_or_default(),
                        result.elapsed_seconds,
                        result.attempts_used,
                    );
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn finish(
        &mut self,
        result: GameResult,
        score: f64,
        target: String,
        elapsed_seconds: f64,
        attempts_used: u32,
    ) {
        self.outcomes.push(Outcome {
            result,
            score,
            elapsed_seconds,
            attempts_used,
        });

        match result {
            GameResult::Win => {
                let celebration = match attempts_used {
                    1 => "🎯 HOLE IN ONE!",
                    2 => "🔥 MAGNIFICENT!",
                    3 => "✨ SPLENDID!",
                    4 => "👏 GREAT JOB!",
                    5 => "🎉 NICE WORK!",
                    _ => "😅 PHEW!",
                };
                self.add_message(
                    &format!("{celebration} Score {score:.2}"),
                    MessageStyle::Success,
                );
            }
            GameResult::Loss | GameResult::InProgress => {
                let reason = if self.rows.last().is_some_and(|r| r.feedback.is_perfect()) {
                    "Too late!"
                } else {
                    "Out of luck."
                };
                self.add_message(
                    &format!("{reason} The word was {target}"),
                    MessageStyle::Error,
                );
            }
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);

        self.phase = Phase::Finished {
            result,
            score,
            target,
        };
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.phase {
            Phase::Finished { .. } => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
            Phase::Playing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game();
                }
                KeyCode::Char(c) => self.push_letter(c),
                KeyCode::Backspace => self.pop_letter(),
                KeyCode::Enter => self.submit(),
                _ => {}
            },
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Whole seconds left on the clock; 0 once the game is over
    #[must_use]
    pub fn remaining_seconds(&self) -> u64 {
        self.manager
            .session_status(&self.player_id)
            .filter(|status| status.active)
            .map_or(0, |status| status.remaining_whole_seconds())
    }

    /// Clock ran out but the game has not been closed by a guess yet
    #[must_use]
    pub fn out_of_time(&self) -> bool {
        self.phase == Phase::Playing && self.remaining_seconds() == 0
    }

    #[must_use]
    pub fn stats(&self) -> PlayerStats {
        PlayerStats::from_outcomes(&self.outcomes)
    }

    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.manager.config().max_attempts
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Poll so the countdown keeps moving without input
        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
