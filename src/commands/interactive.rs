//! Interactive CLI mode
//!
//! Line-based manual play: the player types each guess and either the
//! feedback they saw or the target word, and gets ranked suggestions back.

use crate::output::display::print_suggestions;
use crate::session::Session;
use crate::solver::{FeedbackInput, TurnOutcome};
use crate::SolverError;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run manual play on stdin/stdout
///
/// # Errors
///
/// Returns an error on I/O failure reading input or writing output.
pub fn run_interactive(session: &Session) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_interactive_with(session, &mut stdin.lock(), &mut stdout.lock())
}

/// Run manual play over arbitrary input and output
///
/// Ends on `quit` or end of input.
///
/// # Errors
///
/// Returns an error on I/O failure.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_interactive_with<R: BufRead, W: Write>(
    session: &Session,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let max_steps = session.config().step_budget();
    let mut game = session.interactive();

    writeln!(out, "\n{}", "═".repeat(62).bright_cyan())?;
    writeln!(out, "{}", "  Wordle Solver - Interactive Mode".bright_cyan().bold())?;
    writeln!(out, "{}\n", "═".repeat(62).bright_cyan())?;
    writeln!(out, "After each guess, enter the feedback, one symbol per letter:")?;
    writeln!(out, "  0 = correct position, 1 = elsewhere in the word, 2 = not in the word")?;
    writeln!(out, "Or enter the target word itself to score the guess against it.")?;
    writeln!(out, "Press enter at the guess prompt to play the top suggestion.")?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n")?;

    loop {
        let candidates = game.candidates().len();
        writeln!(out, "{}", "─".repeat(62))?;
        writeln!(out, "Turn {}: {candidates} candidates remaining", game.turn())?;
        writeln!(out, "{}", "─".repeat(62))?;

        if game.turn() > max_steps {
            writeln!(out, "{}", format!("❌ Out of guesses ({max_steps})").red().bold())?;
            writeln!(out, "Type 'undo' to go back, or 'new' to start over.")?;
        }

        let suggestions = game.suggestions().context("ranking candidates")?;
        writeln!(out, "\n📊 Suggested guesses:")?;
        print_suggestions(out, &suggestions)?;
        if candidates <= 10 {
            let words: Vec<String> = game
                .candidates()
                .iter()
                .map(|w| w.text().to_uppercase())
                .collect();
            writeln!(out, "Remaining: {}", words.join(", "))?;
        }

        let Some(line) = prompt(input, out, "\nGuess")? else {
            return Ok(());
        };
        let guess = match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" => {
                game.reset();
                writeln!(out, "\n🔄 New game started!\n")?;
                continue;
            }
            "undo" | "u" => {
                if game.undo() {
                    writeln!(out, "✓ Undone! Back to turn {}\n", game.turn())?;
                } else {
                    writeln!(out, "Nothing to undo!\n")?;
                }
                continue;
            }
            "" => match suggestions.first() {
                Some(best) => best.word.text().to_string(),
                None => continue,
            },
            _ => line,
        };

        // Re-prompt until the feedback is usable
        loop {
            let Some(feedback) = prompt(input, out, &format!("Feedback for {}", guess.to_uppercase()))?
            else {
                return Ok(());
            };
            let feedback_input = if !feedback.is_empty() && feedback.chars().all(|c| c.is_ascii_alphabetic()) {
                FeedbackInput::Target(&feedback)
            } else {
                FeedbackInput::Observed(&feedback)
            };

            match game.play(&guess, feedback_input) {
                Ok(TurnOutcome::Solved { steps }) => {
                    writeln!(
                        out,
                        "\n{}",
                        format!("🎉 Solved in {steps} {}!", if steps == 1 { "guess" } else { "guesses" })
                            .bright_green()
                            .bold()
                    )?;
                    for (i, (word, pattern)) in game.history().iter().enumerate() {
                        writeln!(
                            out,
                            "    {}. {} {}",
                            i + 1,
                            word.text().to_uppercase().bright_white().bold(),
                            pattern.to_emoji()
                        )?;
                    }
                    game.reset();
                    writeln!(out, "\n🔄 New game started!\n")?;
                    break;
                }
                Ok(TurnOutcome::Continue { feedback, remaining, .. }) => {
                    writeln!(out, "  {}  {remaining} candidates left\n", feedback.to_emoji())?;
                    break;
                }
                Err(e) if e.is_recoverable() => {
                    writeln!(out, "❌ {e}")?;
                    if matches!(e, SolverError::GuessNotInVocabulary(_)) {
                        break;
                    }
                }
                Err(e) => {
                    // The game cannot continue from here
                    writeln!(out, "{}", format!("❌ {e}").red().bold())?;
                    writeln!(out, "Game state kept; type 'undo' to go back, or 'new' to start over.\n")?;
                    break;
                }
            }
        }
    }
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line).context("reading input")? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
