//! Solver configuration
//!
//! Everything a session needs to know, passed in explicitly at construction.
//! There is no global state: verbosity travels with the config.

use crate::feedback::FeedbackRule;
use std::path::PathBuf;

/// How the solver is driven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Manual play: the caller supplies guesses and feedback turn by turn
    #[default]
    Interactive,
    /// Automatic play against a known target, or against every vocabulary word
    Simulate,
}

/// How much diagnostic output the core writes to stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

/// How failed games enter the batch mean
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// A failed game contributes the failure sentinel (-1) to the mean
    #[default]
    Sentinel,
    /// The mean covers solved games only
    Exclude,
}

/// Step budget used by batch simulation unless overridden
pub const DEFAULT_SIMULATION_STEPS: usize = 100;

/// Step budget for a manual game unless overridden
pub const DEFAULT_INTERACTIVE_STEPS: usize = 10;

/// Full configuration for one solver session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Word list the vocabulary was loaded from, if any
    pub word_list: Option<PathBuf>,
    pub mode: Mode,
    /// Forced opening guess
    pub first_guess: Option<String>,
    /// Fixed target for a scripted single game
    pub target: Option<String>,
    /// Batch workers; 0 means one per CPU
    pub workers: usize,
    /// Lookahead depth for ranking, at least 1
    pub depth: usize,
    /// Build the full feedback table before any game starts
    pub precompute_cache: bool,
    /// Step budget per game; `None` picks the mode's default
    pub max_steps: Option<usize>,
    pub feedback_rule: FeedbackRule,
    pub failure_policy: FailurePolicy,
    pub verbosity: Verbosity,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            word_list: None,
            mode: Mode::default(),
            first_guess: None,
            target: None,
            workers: 0,
            depth: 1,
            precompute_cache: false,
            max_steps: None,
            feedback_rule: FeedbackRule::default(),
            failure_policy: FailurePolicy::default(),
            verbosity: Verbosity::default(),
        }
    }
}

impl SolverConfig {
    /// Step budget in effect for the configured mode
    #[must_use]
    pub fn step_budget(&self) -> usize {
        self.max_steps.unwrap_or(match self.mode {
            Mode::Interactive => DEFAULT_INTERACTIVE_STEPS,
            Mode::Simulate => DEFAULT_SIMULATION_STEPS,
        })
    }
}
