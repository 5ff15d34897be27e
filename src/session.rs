//! Solver session
//!
//! Owns the vocabulary and the feedback backend chosen by configuration, and
//! hands out simulators, batch evaluators and interactive games that borrow
//! them. The cache, when requested, is fully built inside [`Session::new`],
//! before anything can read it.

use crate::config::SolverConfig;
use crate::core::{Vocabulary, Word};
use crate::error::{Result, SolverError};
use crate::feedback::{FeedbackBackend, FeedbackComputer, FeedbackSource};
use crate::output::Reporter;
use crate::solver::{BatchEvaluator, EvaluationReport, GameSimulator, GameTrace, InteractiveGame};
use std::time::Instant;

/// Vocabulary, feedback backend and configuration for one run
#[derive(Debug)]
pub struct Session {
    vocabulary: Vocabulary,
    backend: FeedbackBackend,
    config: SolverConfig,
    reporter: Reporter,
}

impl Session {
    /// Set up a session, building the feedback cache if configured
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidDepth`] if the configured depth is 0.
    pub fn new(vocabulary: Vocabulary, config: SolverConfig) -> Result<Self> {
        if config.depth == 0 {
            return Err(SolverError::InvalidDepth(config.depth));
        }

        let reporter = Reporter::new(config.verbosity);
        reporter.info(format_args!(
            "{} words of length {} in the vocabulary",
            vocabulary.len(),
            vocabulary.word_len()
        ));

        let computer = FeedbackComputer::new(config.feedback_rule);
        let start = Instant::now();
        let backend = FeedbackBackend::new(&vocabulary, computer, config.precompute_cache);
        if let FeedbackBackend::Cached(cache) = &backend {
            reporter.info(format_args!(
                "feedback cache built: {} entries in {:.2}s",
                cache.entries(),
                start.elapsed().as_secs_f64()
            ));
        }

        Ok(Self {
            vocabulary,
            backend,
            config,
            reporter,
        })
    }

    /// Validate raw words and set up a session over them
    ///
    /// # Errors
    /// Any vocabulary validation error, or those of [`Session::new`].
    pub fn from_words<I, S>(words: I, config: SolverConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(Vocabulary::new(words)?, config)
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[must_use]
    pub const fn backend(&self) -> &FeedbackBackend {
        &self.backend
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[must_use]
    pub const fn reporter(&self) -> Reporter {
        self.reporter
    }

    /// Configured opening guess, validated against the vocabulary and backend
    ///
    /// # Errors
    /// - invalid or wrong-length word
    /// - [`SolverError::CacheMiss`] if the cache cannot score it
    pub fn first_guess(&self) -> Result<Option<Word>> {
        let Some(text) = self.config.first_guess.as_deref() else {
            return Ok(None);
        };
        let word = self.vocabulary.parse_word(text)?;
        if !self.backend.covers(&word) {
            return Err(SolverError::CacheMiss {
                guess: word.text().to_string(),
                target: word.text().to_string(),
            });
        }
        Ok(Some(word))
    }

    /// Simulator over this session's vocabulary and backend
    #[must_use]
    pub const fn simulator(&self) -> GameSimulator<'_, FeedbackBackend> {
        GameSimulator::new(&self.vocabulary, &self.backend).with_depth(self.config.depth)
    }

    /// Play one scripted game against `target`
    ///
    /// # Errors
    /// Any error of [`GameSimulator::simulate_traced`] or [`Session::first_guess`].
    pub fn simulate(&self, target: &str) -> Result<GameTrace> {
        let target = self.vocabulary.parse_word(target)?;
        let first = self.first_guess()?;
        self.simulator()
            .with_reporter(self.reporter)
            .simulate_traced(&target, self.config.step_budget(), first.as_ref())
    }

    /// Play one game per vocabulary word on the configured number of workers
    ///
    /// # Errors
    /// Worker pool or first-guess errors; per-game errors are in the report.
    pub fn evaluate(&self) -> Result<EvaluationReport> {
        let first = self.first_guess()?;
        BatchEvaluator::new(self.simulator(), self.config.step_budget(), self.config.workers)
            .with_failure_policy(self.config.failure_policy)
            .with_reporter(self.reporter)
            .evaluate(first.as_ref())
    }

    /// Start a manual game
    #[must_use]
    pub fn interactive(&self) -> InteractiveGame<'_, FeedbackBackend> {
        InteractiveGame::new(&self.vocabulary, &self.backend, self.backend.computer())
            .with_depth(self.config.depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Mode, Verbosity};
    use crate::solver::GameOutcome;

    fn quiet_config() -> SolverConfig {
        SolverConfig {
            mode: Mode::Simulate,
            verbosity: Verbosity::Quiet,
            ..SolverConfig::default()
        }
    }

    #[test]
    fn zero_depth_is_rejected() {
        let config = SolverConfig {
            depth: 0,
            ..quiet_config()
        };
        let result = Session::from_words(["abc", "bcd"], config);
        assert!(matches!(result, Err(SolverError::InvalidDepth(0))));
    }

    #[test]
    fn precompute_selects_cache() {
        let config = SolverConfig {
            precompute_cache: true,
            ..quiet_config()
        };
        let session = Session::from_words(["abc", "bcd", "cda"], config).unwrap();
        assert!(session.backend().is_cached());

        let session = Session::from_words(["abc", "bcd", "cda"], quiet_config()).unwrap();
        assert!(!session.backend().is_cached());
    }

    #[test]
    fn scripted_game_uses_configured_first_guess() {
        let config = SolverConfig {
            first_guess: Some("abcde".to_string()),
            ..quiet_config()
        };
        let session = Session::from_words(["abcde", "edcba", "aaaaa"], config).unwrap();

        let trace = session.simulate("abcde").unwrap();
        assert_eq!(trace.outcome, GameOutcome::Solved(1));
        assert_eq!(trace.steps[0].score, None);
    }

    #[test]
    fn cached_first_guess_must_be_in_vocabulary() {
        let config = SolverConfig {
            first_guess: Some("xyz".to_string()),
            precompute_cache: true,
            ..quiet_config()
        };
        let session = Session::from_words(["abc", "bcd", "cda"], config).unwrap();
        assert!(matches!(session.first_guess(), Err(SolverError::CacheMiss { .. })));
        assert!(session.evaluate().is_err());
    }

    #[test]
    fn evaluate_covers_vocabulary() {
        let session = Session::from_words(["abc", "bcd", "cda", "dab"], quiet_config()).unwrap();
        let report = session.evaluate().unwrap();
        assert_eq!(report.games(), 4);
        assert_eq!(report.solved(), 4);
    }

    #[test]
    fn interactive_game_starts_with_full_pool() {
        let session = Session::from_words(["abc", "bcd", "cda"], quiet_config()).unwrap();
        assert_eq!(session.interactive().candidates().len(), 3);
    }
}
