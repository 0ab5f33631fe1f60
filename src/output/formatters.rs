//! Formatting utilities for terminal output

use crate::core::{Code, Feedback};

/// Column headings of a guess history table
pub const HISTORY_HEADINGS: [&str; 3] = ["Guess", "Correct Position", "Correct Number"];

/// Format feedback as key pegs: `●` exact, `○` value, `·` miss
#[must_use]
pub fn feedback_pegs(feedback: Feedback, length: usize) -> String {
    let exact = usize::from(feedback.exact);
    let value = usize::from(feedback.value);

    format!(
        "{}{}{}",
        "●".repeat(exact),
        "○".repeat(value),
        "·".repeat(length.saturating_sub(exact + value))
    )
}

/// Render guesses and their feedback as a boxed text table
#[must_use]
pub fn history_table(rows: &[(Code, Feedback)]) -> String {
    let cells: Vec<[String; 3]> = rows
        .iter()
        .map(|(guess, feedback)| {
            [
                guess.to_string(),
                feedback.exact.to_string(),
                feedback.value.to_string(),
            ]
        })
        .collect();

    let mut widths = HISTORY_HEADINGS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{left}{}{right}\n", segments.join(mid))
    };
    let line = |row: [&str; 3]| {
        let padded: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!(" {cell:<width$} "))
            .collect();
        format!("│{}│\n", padded.join("│"))
    };

    let mut table = rule("┌", "┬", "┐");
    table.push_str(&line(HISTORY_HEADINGS));
    table.push_str(&rule("├", "┼", "┤"));
    for row in &cells {
        table.push_str(&line([&row[0], &row[1], &row[2]]));
    }
    table.push_str(&rule("└", "┴", "┘"));
    table
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
