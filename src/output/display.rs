//! Display functions for command results
//!
//! Results go to stdout; diagnostics go through the [`Reporter`](super::Reporter).

use super::formatters::{create_progress_bar, outcome_label, percent, score_bar};
use crate::solver::{EvaluationReport, GameOutcome, GameTrace, ScoredCandidate};
use colored::Colorize;
use std::io::{self, Write};

/// Print every step of a scripted game
pub fn print_trace(trace: &GameTrace, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        trace.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in trace.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}  {}",
            i + 1,
            step.guess.text().to_uppercase(),
            step.feedback.to_emoji(),
            step.feedback.to_symbols().bright_black()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.pool_before, step.pool_after
            );
            match step.score {
                Some(score) => println!("  Score:      {score:.3}"),
                None => println!("  Score:      (forced first guess)"),
            }
        }
    }

    println!();
    match trace.outcome {
        GameOutcome::Solved(steps) => println!(
            "{}",
            format!("✅ Solved in {steps} guesses!").green().bold()
        ),
        GameOutcome::Failed => println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", trace.steps.len())
                .red()
                .bold()
        ),
    }
}

/// Print the histogram and mean of a batch run
pub fn print_evaluation(report: &EvaluationReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "EVALUATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let games = report.games();
    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {games}");
    println!(
        "   Solved:           {}",
        format!("{}", report.solved()).green()
    );
    println!(
        "   Unsolved:         {}",
        format!("{}", report.unsolved()).yellow()
    );
    println!(
        "   Mean steps:       {} ({:?} failures)",
        format!("{:.3}", report.mean).bright_yellow().bold(),
        report.failure_policy
    );
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&outcome, &count) in &report.histogram {
        let pct = percent(count, games);
        let bar = create_progress_bar(pct, 100.0, 40);
        let bar = if outcome.is_solved() {
            bar.green()
        } else {
            bar.red()
        };
        println!("   {:>4}: {bar} {count:4} ({pct:5.1}%)", outcome_label(outcome));
    }

    if !report.failures.is_empty() {
        println!("\n⚠️  {}", "Errored games:".yellow().bold());
        for failure in &report.failures {
            println!("   {}: {}", failure.target.to_uppercase(), failure.error);
        }
    }
}

/// Write ranked suggestions, best first
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_suggestions<W: Write>(out: &mut W, suggestions: &[ScoredCandidate<'_>]) -> io::Result<()> {
    let best = suggestions.first().map_or(0.0, |c| c.score);
    for (i, candidate) in suggestions.iter().enumerate() {
        writeln!(
            out,
            "  {}. {} [{}] {:.3}",
            i + 1,
            candidate.word.text().to_uppercase().bright_white().bold(),
            score_bar(candidate.score, best, 20).green(),
            candidate.score
        )?;
    }
    Ok(())
}
