//! Manual play
//!
//! Tracks the pool across turns while the caller supplies each guess and
//! either its feedback or the target to score it against.

use super::pruner::prune;
use super::ranker::{ScoredCandidate, rank};
use crate::core::{Pattern, Vocabulary, Word};
use crate::error::{Result, SolverError};
use crate::feedback::{FeedbackComputer, FeedbackSource};

/// Where the feedback for a manual guess comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackInput<'s> {
    /// Score the guess against this target directly
    Target(&'s str),
    /// Feedback typed by the player, one `0`/`1`/`2` symbol per letter
    Observed(&'s str),
}

/// Result of one manual turn
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome<'a> {
    /// The guess matched the target on this (1-based) step
    Solved { steps: usize },
    /// Still playing
    Continue {
        feedback: Pattern,
        remaining: usize,
        /// Best next guesses, best first
        suggestions: Vec<ScoredCandidate<'a>>,
    },
}

/// State of one manual game
#[derive(Debug)]
pub struct InteractiveGame<'a, F: ?Sized> {
    vocabulary: &'a Vocabulary,
    source: &'a F,
    computer: FeedbackComputer,
    depth: usize,
    suggestion_limit: usize,
    pools: Vec<Vec<&'a Word>>,
    history: Vec<(Word, Pattern)>,
}

impl<'a, F> InteractiveGame<'a, F>
where
    F: FeedbackSource + ?Sized,
{
    /// Start a game over the full vocabulary
    ///
    /// `computer` scores guesses against a target given as text, which may lie
    /// outside the vocabulary.
    #[must_use]
    pub fn new(vocabulary: &'a Vocabulary, source: &'a F, computer: FeedbackComputer) -> Self {
        Self {
            vocabulary,
            source,
            computer,
            depth: 1,
            suggestion_limit: 5,
            pools: vec![vocabulary.pool()],
            history: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Number of suggestions returned after each turn
    #[must_use]
    pub const fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }

    /// Words still consistent with every observed feedback
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        self.pools.last().map(Vec::as_slice).unwrap_or_default()
    }

    /// Guesses and feedback so far
    #[must_use]
    pub fn history(&self) -> &[(Word, Pattern)] {
        &self.history
    }

    /// 1-based number of the next turn
    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len() + 1
    }

    /// Ranked suggestions for the current pool
    ///
    /// # Errors
    /// Propagates ranking errors.
    pub fn suggestions(&self) -> Result<Vec<ScoredCandidate<'a>>> {
        let mut ranked = rank(self.candidates(), self.source, self.depth)?;
        ranked.truncate(self.suggestion_limit);
        Ok(ranked)
    }

    /// Record one guess with its feedback
    ///
    /// On a recoverable error (bad symbols, a guess the cache cannot score)
    /// the game state is unchanged and the caller may re-enter the turn.
    ///
    /// # Errors
    /// - [`SolverError::InvalidWord`] / [`SolverError::LengthMismatch`] for a bad guess or target
    /// - [`SolverError::GuessNotInVocabulary`] if the source cannot score the guess
    /// - [`SolverError::MalformedFeedback`] for unrecognized feedback symbols
    /// - [`SolverError::TargetNotRepresentable`] if no candidate fits the feedback
    pub fn play(&mut self, guess: &str, input: FeedbackInput<'_>) -> Result<TurnOutcome<'a>> {
        let guess = self.vocabulary.parse_word(guess)?;
        if !self.source.covers(&guess) {
            return Err(SolverError::GuessNotInVocabulary(guess.text().to_string()));
        }

        let feedback = match input {
            FeedbackInput::Target(target) => {
                let target = self.vocabulary.parse_word(target)?;
                self.computer.compute(&guess, &target)?
            }
            FeedbackInput::Observed(symbols) => Pattern::parse(symbols, self.vocabulary.word_len())?,
        };

        if feedback.is_perfect() {
            self.history.push((guess, feedback));
            return Ok(TurnOutcome::Solved {
                steps: self.history.len(),
            });
        }

        let remaining = prune(self.candidates(), &guess, feedback, self.source)?;
        self.pools.push(remaining);
        self.history.push((guess, feedback));

        Ok(TurnOutcome::Continue {
            feedback,
            remaining: self.candidates().len(),
            suggestions: self.suggestions()?,
        })
    }

    /// Take back the last turn; returns false if there is nothing to undo
    pub fn undo(&mut self) -> bool {
        let Some((_, feedback)) = self.history.pop() else {
            return false;
        };
        // A winning turn never pushed a pool
        if !feedback.is_perfect() {
            self.pools.pop();
        }
        true
    }

    /// Start over with the full vocabulary
    pub fn reset(&mut self) {
        self.pools.truncate(1);
        self.history.clear();
    }
}
