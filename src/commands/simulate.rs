//! Simulation command
//!
//! With a fixed target, plays one scripted game and prints its trace;
//! otherwise plays every vocabulary word and prints the histogram.

use crate::config::Verbosity;
use crate::output::{print_evaluation, print_trace};
use crate::session::Session;
use crate::solver::{EvaluationReport, GameTrace};
use anyhow::{Context, Result};

/// What a simulation run produced
#[derive(Debug)]
pub enum SimulationResult {
    Single(GameTrace),
    Batch(EvaluationReport),
}

/// Run the configured simulation without printing it
///
/// # Errors
///
/// Returns an error if the scripted game fails or the batch cannot start.
pub fn run_simulation(session: &Session) -> Result<SimulationResult> {
    match session.config().target.as_deref() {
        Some(target) => session
            .simulate(target)
            .map(SimulationResult::Single)
            .with_context(|| format!("simulating game for '{target}'")),
        None => session
            .evaluate()
            .map(SimulationResult::Batch)
            .context("evaluating vocabulary"),
    }
}

/// Run the configured simulation and print the result
///
/// # Errors
///
/// Same as [`run_simulation`].
pub fn simulate_command(session: &Session) -> Result<()> {
    match run_simulation(session)? {
        SimulationResult::Single(trace) => {
            print_trace(&trace, session.config().verbosity >= Verbosity::Normal);
        }
        SimulationResult::Batch(report) => print_evaluation(&report),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Mode, SolverConfig};
    use crate::solver::GameOutcome;

    fn config() -> SolverConfig {
        SolverConfig {
            mode: Mode::Simulate,
            verbosity: Verbosity::Quiet,
            ..SolverConfig::default()
        }
    }

    #[test]
    fn target_runs_single_game() {
        let config = SolverConfig {
            target: Some("bcd".to_string()),
            first_guess: Some("abc".to_string()),
            ..config()
        };
        let session = Session::from_words(["abc", "bcd", "cda"], config).unwrap();

        let SimulationResult::Single(trace) = run_simulation(&session).unwrap() else {
            panic!("expected a single game");
        };
        assert_eq!(trace.steps[0].guess.text(), "abc");
        assert!(trace.outcome.is_solved());
    }

    #[test]
    fn no_target_runs_batch() {
        let session = Session::from_words(["abc", "bcd", "cda"], config()).unwrap();

        let SimulationResult::Batch(report) = run_simulation(&session).unwrap() else {
            panic!("expected a batch");
        };
        assert_eq!(report.games(), 3);
        assert!(!report.histogram.contains_key(&GameOutcome::Failed));
    }

    #[test]
    fn bad_target_is_reported() {
        let config = SolverConfig {
            target: Some("abcd".to_string()),
            ..config()
        };
        let session = Session::from_words(["abc", "bcd", "cda"], config).unwrap();
        let err = run_simulation(&session).unwrap_err();
        assert!(err.to_string().contains("abcd"));
    }
}
