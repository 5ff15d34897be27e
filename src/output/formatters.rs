//! Formatting utilities for terminal output

use crate::solver::GameOutcome;

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

/// Bar for a score relative to the best score shown alongside it
#[must_use]
pub fn score_bar(score: f64, best: f64, width: usize) -> String {
    create_progress_bar(score, best, width)
}

/// Row label for a histogram bucket
#[must_use]
pub fn outcome_label(outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::Solved(steps) => steps.to_string(),
        GameOutcome::Failed => "fail".to_string(),
    }
}

/// Share of `count` in `total`, as a percentage
#[must_use]
pub fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
