//! Formatting utilities for terminal output

use crate::core::Answer;

/// Short spelling of an answer, matching what the player would type
#[must_use]
pub const fn answer_str(answer: Answer) -> &'static str {
    match answer {
        Answer::Yes => "y",
        Answer::No => "n",
        Answer::Exit => "exit",
    }
}

/// Comma-joined candidate listing, truncated past `max` names
#[must_use]
pub fn format_candidates(names: &[String], max: usize) -> String {
    if names.len() <= max {
        return names.join(", ");
    }

    let shown = names[..max].join(", ");
    let hidden = names.len() - max;
    format!("{shown}, … and {hidden} more")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
