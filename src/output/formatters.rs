//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile
#[must_use]
pub fn tile(letter: char, mark: Mark) -> ColoredString {
    let text = format!(" {letter} ");
    match mark {
        Mark::Exact => text.black().on_green().bold(),
        Mark::Present => text.black().on_yellow().bold(),
        Mark::Absent => text.white().on_bright_black().bold(),
    }
}

/// Render a guess as a row of colored tiles
#[must_use]
pub fn tile_row(guess: &str, feedback: &Feedback) -> String {
    guess
        .chars()
        .zip(feedback.marks())
        .map(|(letter, &mark)| tile(letter, mark).to_string())
        .collect()
}

/// Format whole seconds as a `MM:SS` countdown
#[must_use]
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_pads_minutes_and_seconds() {
        assert_eq!(format_clock(240), "04:00");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(0), "00:00");
    }

    #[test]
    fn tile_row_keeps_letter_order() {
        colored::control::set_override(false);
        let feedback: Feedback = "GGGG-".parse().unwrap();
        assert_eq!(tile_row("SPOOL", &feedback), " S  P  O  O  L ");
        colored::control::unset_override();
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_without_total() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
