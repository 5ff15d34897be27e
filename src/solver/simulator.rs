//! Full-game simulation
//!
//! Plays one game against a known target: rank, guess, observe, prune, repeat
//! until the target is hit or the step budget runs out.

use super::pruner::prune;
use super::ranker::best_guess;
use crate::core::{Pattern, Vocabulary, Word};
use crate::error::Result;
use crate::feedback::FeedbackSource;
use crate::output::Reporter;

/// Value reported for a failed game wherever a single number is needed
pub const FAILURE_SENTINEL: i64 = -1;

/// How a game ended
///
/// Ordered with `Failed` first, then by step count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GameOutcome {
    /// Step budget exhausted without hitting the target
    Failed,
    /// Target guessed on this (1-based) step
    Solved(usize),
}

impl GameOutcome {
    /// Step count, or [`FAILURE_SENTINEL`] for a failed game
    #[must_use]
    pub const fn as_sentinel(self) -> i64 {
        match self {
            Self::Solved(steps) => steps as i64,
            Self::Failed => FAILURE_SENTINEL,
        }
    }

    #[must_use]
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved(_))
    }
}

/// One guess of a simulated game
#[derive(Debug, Clone, PartialEq)]
pub struct TraceStep {
    pub guess: Word,
    pub feedback: Pattern,
    /// Score of the guess, `None` for a forced first guess
    pub score: Option<f64>,
    pub pool_before: usize,
    /// Pool size after pruning; 1 once the target is hit
    pub pool_after: usize,
}

/// Every guess of a simulated game plus its outcome
#[derive(Debug, Clone, PartialEq)]
pub struct GameTrace {
    pub target: Word,
    pub steps: Vec<TraceStep>,
    pub outcome: GameOutcome,
}

/// Drives single games over a fixed vocabulary and feedback source
#[derive(Debug)]
pub struct GameSimulator<'a, F: ?Sized> {
    vocabulary: &'a Vocabulary,
    source: &'a F,
    depth: usize,
    reporter: Reporter,
}

impl<F: ?Sized> Clone for GameSimulator<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: ?Sized> Copy for GameSimulator<'_, F> {}

impl<'a, F> GameSimulator<'a, F>
where
    F: FeedbackSource + ?Sized,
{
    /// Create a simulator ranking at depth 1
    #[must_use]
    pub const fn new(vocabulary: &'a Vocabulary, source: &'a F) -> Self {
        Self {
            vocabulary,
            source,
            depth: 1,
            reporter: Reporter::quiet(),
        }
    }

    /// Rank guesses with this lookahead depth instead of 1
    #[must_use]
    pub const fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Report each step through `reporter`
    #[must_use]
    pub const fn with_reporter(mut self, reporter: Reporter) -> Self {
        self.reporter = reporter;
        self
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }

    /// Play one game and return only the outcome
    ///
    /// # Errors
    /// See [`simulate_traced`](Self::simulate_traced).
    pub fn simulate(
        &self,
        target: &Word,
        max_steps: usize,
        first_guess: Option<&Word>,
    ) -> Result<GameOutcome> {
        self.simulate_traced(target, max_steps, first_guess)
            .map(|trace| trace.outcome)
    }

    /// Play one game, recording every step
    ///
    /// The pool starts as the full vocabulary and only shrinks, so the loop
    /// ends after at most `max_steps` guesses.
    ///
    /// # Errors
    /// - [`SolverError::LengthMismatch`](crate::SolverError::LengthMismatch) if
    ///   `target` or `first_guess` has the wrong length
    /// - [`SolverError::TargetNotRepresentable`](crate::SolverError::TargetNotRepresentable)
    ///   if pruning empties the pool
    /// - any ranking or feedback source error
    pub fn simulate_traced(
        &self,
        target: &Word,
        max_steps: usize,
        first_guess: Option<&Word>,
    ) -> Result<GameTrace> {
        self.vocabulary.check_len(target)?;
        if let Some(first) = first_guess {
            self.vocabulary.check_len(first)?;
        }

        let mut pool = self.vocabulary.pool();
        let mut steps = Vec::new();

        for step in 0..max_steps {
            let (guess, score) = match first_guess {
                Some(first) if step == 0 => (first, None),
                _ => {
                    let best = best_guess(&pool, self.source, self.depth)?;
                    (best.word, Some(best.score))
                }
            };

            let feedback = self.source.feedback(guess, target)?;
            self.reporter.debug(format_args!(
                "step {}: guess <{guess}> score {} feedback {} ({} candidates)",
                step + 1,
                score.map_or_else(|| "forced".to_string(), |s| format!("{s:.4}")),
                feedback.to_emoji(),
                pool.len()
            ));

            let pool_before = pool.len();
            if feedback.is_perfect() {
                steps.push(TraceStep {
                    guess: guess.clone(),
                    feedback,
                    score,
                    pool_before,
                    pool_after: 1,
                });
                return Ok(GameTrace {
                    target: target.clone(),
                    steps,
                    outcome: GameOutcome::Solved(step + 1),
                });
            }

            pool = prune(&pool, guess, feedback, self.source)?;
            steps.push(TraceStep {
                guess: guess.clone(),
                feedback,
                score,
                pool_before,
                pool_after: pool.len(),
            });
        }

        self.reporter
            .debug(format_args!("<{target}> not found within {max_steps} steps"));

        Ok(GameTrace {
            target: target.clone(),
            steps,
            outcome: GameOutcome::Failed,
        })
    }
}
