//! Candidate ranking by expected information
//!
//! Every word of the pool is scored as a guess against the same pool. At depth
//! 1 the score is the entropy of the partition the guess induces. At deeper
//! levels each partition cell is ranked recursively and the best score found
//! there is averaged over cells by probability.

use super::entropy::{guess_entropy, partition};
use crate::core::Word;
use crate::error::{Result, SolverError};
use crate::feedback::FeedbackSource;
use rayon::prelude::*;

/// A guess and its score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub word: &'a Word,
    /// Entropy in bits at depth 1, expected continuation value deeper
    pub score: f64,
}

/// Rank every pool word as a guess, best first
///
/// Ties keep the pool's order, so identical inputs always rank identically.
/// Guesses are scored in parallel; the result does not depend on scheduling.
///
/// # Errors
/// - [`SolverError::EmptyPool`] if `pool` is empty
/// - [`SolverError::InvalidDepth`] if `depth` is 0
/// - any error from the feedback source
///
/// # Examples
/// ```
/// use wordle_infogain::core::Vocabulary;
/// use wordle_infogain::feedback::FeedbackComputer;
/// use wordle_infogain::solver::rank;
///
/// let vocab = Vocabulary::new(["abc", "bcd", "cda"]).unwrap();
/// let ranked = rank(&vocab.pool(), &FeedbackComputer::default(), 1).unwrap();
///
/// assert_eq!(ranked.len(), 3);
/// assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
/// ```
pub fn rank<'a, F>(pool: &[&'a Word], source: &F, depth: usize) -> Result<Vec<ScoredCandidate<'a>>>
where
    F: FeedbackSource + ?Sized,
{
    if pool.is_empty() {
        return Err(SolverError::EmptyPool);
    }
    if depth == 0 {
        return Err(SolverError::InvalidDepth(depth));
    }

    let mut ranked = pool
        .par_iter()
        .map(|&guess| {
            score_guess(guess, pool, source, depth).map(|score| ScoredCandidate { word: guess, score })
        })
        .collect::<Result<Vec<_>>>()?;

    // Stable sort: equal scores stay in pool order
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    Ok(ranked)
}

/// Best guess for the pool, with its score
///
/// # Errors
/// Same as [`rank`].
pub fn best_guess<'a, F>(pool: &[&'a Word], source: &F, depth: usize) -> Result<ScoredCandidate<'a>>
where
    F: FeedbackSource + ?Sized,
{
    // A single word cannot be split further; skip scoring
    if let [only] = pool {
        if depth == 0 {
            return Err(SolverError::InvalidDepth(depth));
        }
        return Ok(ScoredCandidate {
            word: *only,
            score: 0.0,
        });
    }

    rank(pool, source, depth)?
        .into_iter()
        .next()
        .ok_or(SolverError::EmptyPool)
}

fn score_guess<F>(guess: &Word, pool: &[&Word], source: &F, depth: usize) -> Result<f64>
where
    F: FeedbackSource + ?Sized,
{
    if depth == 1 {
        return guess_entropy(guess, pool, source);
    }

    let groups = partition(guess, pool, source)?;
    let total = pool.len() as f64;
    let mut score = 0.0;
    for group in groups.values() {
        let p = group.len() as f64 / total;
        let continuation = rank(group, source, depth - 1)?
            .first()
            .map_or(0.0, |best| best.score);
        score += p * continuation;
    }

    Ok(score)
}
