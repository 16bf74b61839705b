//! TUI rendering with ratatui
//!
//! Board, countdown, keyboard tracker and session stats.

use super::app::{App, MessageStyle, Phase};
use crate::core::{Mark, WORD_LENGTH};
use crate::game::GameResult;
use crate::output::formatters::format_clock;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Countdown turns red below this many seconds
const LOW_TIME: u64 = 30;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Keyboard
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Clock, stats, messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🐂 BULLS & BEARS 🐻")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn mark_style(mark: Mark) -> Style {
    let bg = match mark {
        Mark::Exact => Color::Green,
        Mark::Present => Color::Yellow,
        Mark::Absent => Color::DarkGray,
    };
    Style::new().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
}

fn tile(letter: char, style: Style) -> [Span<'static>; 2] {
    [Span::styled(format!(" {letter} "), style), Span::raw(" ")]
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let empty = Style::new().fg(Color::DarkGray);
    let typing = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();

    for row in 0..app.max_attempts() as usize {
        let spans: Vec<Span> = if let Some(record) = app.rows.get(row) {
            record
                .guess_word
                .chars()
                .zip(record.feedback.marks())
                .flat_map(|(letter, &mark)| tile(letter, mark_style(mark)))
                .collect()
        } else if row == app.rows.len() && app.phase == Phase::Playing {
            let mut typed: Vec<char> = app.input_buffer.chars().collect();
            typed.resize(WORD_LENGTH, '_');
            typed
                .into_iter()
                .flat_map(|letter| tile(letter, if letter == '_' { empty } else { typing }))
                .collect()
        } else {
            (0..WORD_LENGTH).flat_map(|_| tile('·', empty)).collect()
        };
        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Countdown
            Constraint::Length(7), // Stats
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_countdown(f, app, chunks[0]);
    render_stats(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_countdown(f: &mut Frame, app: &App, area: Rect) {
    let max_time = app.manager.config().max_time.as_secs().max(1);
    let remaining = app.remaining_seconds();
    let color = if remaining <= LOW_TIME {
        Color::Red
    } else {
        Color::Cyan
    };
    let label = match &app.phase {
        Phase::Playing if app.out_of_time() => "00:00 | time's up, any guess ends the game".to_string(),
        Phase::Playing => format_clock(remaining),
        Phase::Finished { .. } => "--:--".to_string(),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Time ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent((remaining.min(max_time) * 100 / max_time) as u16)
        .label(label);

    f.render_widget(gauge, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.stats();
    let mut lines = vec![
        Line::from(format!("Games:    {}", stats.total_games)),
        Line::from(format!("Win rate: {:.1}%", stats.win_rate)),
        Line::from(format!("Best:     {:.2}", stats.best_score)),
    ];

    if let Phase::Finished {
        result,
        score,
        target,
    } = &app.phase
    {
        let (text, color) = match result {
            GameResult::Win => (format!("Solved {target} for {score:.2}"), Color::Green),
            GameResult::Loss | GameResult::InProgress => {
                (format!("The word was {target}"), Color::Red)
            }
        };
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Session ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let unknown = Style::new().fg(Color::White);
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|letter| {
                    let style = app.keyboard.get(letter).map_or(unknown, mark_style);
                    tile(letter, style)
                })
                .collect();
            Line::from(spans).alignment(Alignment::Center)
        })
        .collect();

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.phase {
        Phase::Playing => "Type a word | Enter: Submit | Backspace: Delete | Ctrl-N: New Game | Esc: Quit",
        Phase::Finished { .. } => "n: New Game | q: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{GameConfig, ManualClock, SessionManager};
    use crate::sink::NullSink;
    use crate::source::BankWordSource;
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;
    use std::time::Duration;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn manager(clock: Arc<ManualClock>) -> SessionManager {
        let source = BankWordSource::new(vec![Word::new("spoon").unwrap()]);
        SessionManager::new(GameConfig::default(), Arc::new(source), Arc::new(NullSink))
            .with_clock(clock)
    }

    #[test]
    fn shows_full_clock_at_start() {
        let manager = manager(Arc::new(ManualClock::new()));
        let app = App::new(&manager, "local");
        assert!(screen(&app).contains("04:00"));
    }

    #[test]
    fn shows_countdown_and_guesses() {
        let clock = Arc::new(ManualClock::new());
        let manager = manager(clock.clone());
        let mut app = App::new(&manager, "local");

        clock.advance(Duration::from_secs(75));
        app.input_buffer = "TIGER".to_string();
        app.submit();

        let text = screen(&app);
        assert!(text.contains("02:45"));
        assert!(text.contains(" T "));
    }

    #[test]
    fn shows_target_after_loss() {
        let clock = Arc::new(ManualClock::new());
        let manager = manager(clock.clone());
        let mut app = App::new(&manager, "local");

        clock.advance(Duration::from_secs(300));
        app.input_buffer = "TIGER".to_string();
        app.submit();

        assert!(screen(&app).contains("The word was SPOON"));
    }
}
