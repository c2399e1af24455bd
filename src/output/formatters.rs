//! Formatting utilities for terminal output

use crate::core::{Mark, Pattern};
use colored::{ColoredString, Colorize};

/// Render a pattern as its G/Y/B letters, each tinted with its own color
#[must_use]
pub fn colored_pattern(pattern: &Pattern) -> String {
    pattern
        .marks()
        .iter()
        .map(|&mark| colored_mark(mark).to_string())
        .collect()
}

fn colored_mark(mark: Mark) -> ColoredString {
    let symbol = mark.symbol().to_string();
    match mark {
        Mark::Green => symbol.bright_green().bold(),
        Mark::Yellow => symbol.bright_yellow().bold(),
        Mark::Black => symbol.bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colored_pattern_keeps_symbols() {
        colored::control::set_override(false);
        let pattern: Pattern = "GYB".parse().unwrap();
        assert_eq!(colored_pattern(&pattern), "GYB");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
