//! Batch evaluation over the whole vocabulary
//!
//! Runs one independent game per vocabulary word on a fixed-size rayon pool
//! and folds the outcomes into a histogram. A game that errors is recorded
//! against its target and the rest of the batch carries on.

use super::simulator::{GameOutcome, GameSimulator};
use crate::config::FailurePolicy;
use crate::core::Word;
use crate::error::{Result, SolverError};
use crate::feedback::FeedbackSource;
use crate::output::Reporter;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// A game that could not be played to an outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameFailure {
    pub target: String,
    pub error: SolverError,
}

/// Aggregated result of a batch run
#[derive(Debug, Clone)]
pub struct EvaluationReport {
    /// Games per outcome
    pub histogram: BTreeMap<GameOutcome, usize>,
    /// Mean step count under `failure_policy`
    pub mean: f64,
    pub failure_policy: FailurePolicy,
    /// Games that errored instead of finishing, in vocabulary order
    pub failures: Vec<GameFailure>,
    pub duration: Duration,
}

impl EvaluationReport {
    /// Games that reached an outcome
    #[must_use]
    pub fn games(&self) -> usize {
        self.histogram.values().sum()
    }

    #[must_use]
    pub fn solved(&self) -> usize {
        self.histogram
            .iter()
            .filter(|(outcome, _)| outcome.is_solved())
            .map(|(_, count)| count)
            .sum()
    }

    /// Games that ran out of steps
    #[must_use]
    pub fn unsolved(&self) -> usize {
        self.histogram.get(&GameOutcome::Failed).copied().unwrap_or(0)
    }
}

/// Mean over a histogram
///
/// With [`FailurePolicy::Sentinel`] every game counts and a failure counts as
/// -1; with [`FailurePolicy::Exclude`] only solved games count. An empty
/// selection has mean 0.
#[must_use]
pub fn histogram_mean(histogram: &BTreeMap<GameOutcome, usize>, policy: FailurePolicy) -> f64 {
    let (sum, count) = histogram
        .iter()
        .filter(|(outcome, _)| policy == FailurePolicy::Sentinel || outcome.is_solved())
        .fold((0i64, 0usize), |(sum, count), (outcome, &n)| {
            (sum + outcome.as_sentinel() * n as i64, count + n)
        });

    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

/// Runs a simulator once per target on a dedicated worker pool
#[derive(Debug)]
pub struct BatchEvaluator<'a, F: ?Sized> {
    simulator: GameSimulator<'a, F>,
    max_steps: usize,
    workers: usize,
    failure_policy: FailurePolicy,
    reporter: Reporter,
}

impl<'a, F> BatchEvaluator<'a, F>
where
    F: FeedbackSource + ?Sized,
{
    /// # Parameters
    /// - `simulator`: plays each game; shared read-only by all workers
    /// - `max_steps`: step budget per game
    /// - `workers`: worker threads, 0 for one per CPU
    #[must_use]
    pub const fn new(simulator: GameSimulator<'a, F>, max_steps: usize, workers: usize) -> Self {
        Self {
            simulator,
            max_steps,
            workers,
            failure_policy: FailurePolicy::Sentinel,
            reporter: Reporter::quiet(),
        }
    }

    #[must_use]
    pub const fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Show a progress bar through `reporter`
    #[must_use]
    pub const fn with_reporter(mut self, reporter: Reporter) -> Self {
        self.reporter = reporter;
        self
    }

    /// Play one game per vocabulary word
    ///
    /// # Errors
    /// Returns [`SolverError::WorkerPool`] if the worker pool cannot be built.
    /// Per-game errors never abort the batch; they land in
    /// [`EvaluationReport::failures`].
    pub fn evaluate(&self, first_guess: Option<&Word>) -> Result<EvaluationReport> {
        let targets: Vec<&Word> = self.simulator.vocabulary().words().iter().collect();
        self.evaluate_targets(&targets, first_guess)
    }

    /// Play one game per given target
    ///
    /// # Errors
    /// Same as [`evaluate`](Self::evaluate).
    pub fn evaluate_targets(
        &self,
        targets: &[&Word],
        first_guess: Option<&Word>,
    ) -> Result<EvaluationReport> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()
            .map_err(|e| SolverError::WorkerPool(e.to_string()))?;

        self.reporter.info(format_args!(
            "evaluating {} targets on {} workers",
            targets.len(),
            pool.current_num_threads()
        ));

        let pb = self.reporter.progress_bar(targets.len() as u64);
        let start = Instant::now();

        let results: Vec<Result<GameOutcome>> = pool.install(|| {
            targets
                .par_iter()
                .map(|&target| {
                    let result = self.simulator.simulate(target, self.max_steps, first_guess);
                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_with_message("Complete!");

        let mut histogram = BTreeMap::new();
        let mut failures = Vec::new();
        for (target, result) in targets.iter().zip(results) {
            match result {
                Ok(outcome) => *histogram.entry(outcome).or_insert(0) += 1,
                Err(error) => {
                    self.reporter
                        .warn(format_args!("game for <{target}> aborted: {error}"));
                    failures.push(GameFailure {
                        target: target.text().to_string(),
                        error,
                    });
                }
            }
        }

        Ok(EvaluationReport {
            mean: histogram_mean(&histogram, self.failure_policy),
            histogram,
            failure_policy: self.failure_policy,
            failures,
            duration: start.elapsed(),
        })
    }
}
