//! Precomputed feedback table
//!
//! Stores the pattern code for every (guess, target) pair of a vocabulary in
//! one flat row-major table. Built once, then read-only, so it can be shared
//! by reference across rayon workers.

use super::{FeedbackComputer, FeedbackSource};
use crate::core::{Pattern, Vocabulary, Word};
use crate::error::{Result, SolverError};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Feedback for every ordered pair of vocabulary words
///
/// Memory and build time are both O(|V|² · L); every lookup afterwards is a
/// hash of the two words plus one table read.
#[derive(Debug)]
pub struct FeedbackCache {
    index: FxHashMap<String, usize>,
    codes: Vec<u32>,
    word_len: usize,
    computer: FeedbackComputer,
}

impl FeedbackCache {
    /// Compute and store feedback for the full vocabulary cross-product
    ///
    /// Rows are filled in parallel; the cache is complete when this returns.
    #[must_use]
    pub fn build(vocabulary: &Vocabulary, computer: FeedbackComputer) -> Self {
        let words = vocabulary.words();
        let n = words.len();

        let index = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.text().to_string(), i))
            .collect();

        let mut codes = vec![0u32; n * n];
        codes
            .par_chunks_mut(n.max(1))
            .zip(words.par_iter())
            .for_each(|(row, guess)| {
                for (slot, target) in row.iter_mut().zip(words) {
                    *slot = computer.compute_unchecked(guess, target).code();
                }
            });

        Self {
            index,
            codes,
            word_len: vocabulary.word_len(),
            computer,
        }
    }

    /// Stored feedback for `guess` against `target`
    ///
    /// # Errors
    /// Returns [`SolverError::CacheMiss`] if either word was not in the
    /// vocabulary the cache was built from.
    pub fn lookup(&self, guess: &Word, target: &Word) -> Result<Pattern> {
        match (self.index.get(guess.text()), self.index.get(target.text())) {
            (Some(&g), Some(&t)) => {
                let n = self.index.len();
                Ok(Pattern::from_code(self.codes[g * n + t], self.word_len))
            }
            _ => Err(SolverError::CacheMiss {
                guess: guess.text().to_string(),
                target: target.text().to_string(),
            }),
        }
    }

    /// Number of words the table covers
    #[must_use]
    pub fn vocabulary_len(&self) -> usize {
        self.index.len()
    }

    /// Number of stored (guess, target) entries
    #[must_use]
    pub fn entries(&self) -> usize {
        self.codes.len()
    }

    /// The computer the table was filled with
    #[must_use]
    pub const fn computer(&self) -> FeedbackComputer {
        self.computer
    }
}

impl FeedbackSource for FeedbackCache {
    fn feedback(&self, guess: &Word, target: &Word) -> Result<Pattern> {
        self.lookup(guess, target)
    }

    fn covers(&self, word: &Word) -> bool {
        self.index.contains_key(word.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::FeedbackRule;

    fn vocab() -> Vocabulary {
        Vocabulary::new(["abc", "bcd", "cda", "cab", "aaa"]).unwrap()
    }

    #[test]
    fn matches_direct_computation_for_every_pair() {
        for rule in [FeedbackRule::Membership, FeedbackRule::CountAware] {
            let vocab = vocab();
            let computer = FeedbackComputer::new(rule);
            let cache = FeedbackCache::build(&vocab, computer);

            for guess in vocab.words() {
                for target in vocab.words() {
                    assert_eq!(
                        cache.lookup(guess, target).unwrap(),
                        computer.compute(guess, target).unwrap(),
                        "{guess} vs {target}"
                    );
                }
            }
        }
    }

    #[test]
    fn covers_full_cross_product() {
        let vocab = vocab();
        let cache = FeedbackCache::build(&vocab, FeedbackComputer::default());
        assert_eq!(cache.vocabulary_len(), 5);
        assert_eq!(cache.entries(), 25);
    }

    #[test]
    fn outside_word_is_a_miss() {
        let vocab = vocab();
        let cache = FeedbackCache::build(&vocab, FeedbackComputer::default());
        let inside = Word::new("abc").unwrap();
        let outside = Word::new("xyz").unwrap();

        assert!(cache.covers(&inside));
        assert!(!cache.covers(&outside));
        assert_eq!(
            cache.lookup(&inside, &outside),
            Err(SolverError::CacheMiss {
                guess: "abc".to_string(),
                target: "xyz".to_string(),
            })
        );
        assert!(cache.lookup(&outside, &inside).is_err());
    }

    #[test]
    fn shared_across_threads() {
        let vocab = vocab();
        let cache = FeedbackCache::build(&vocab, FeedbackComputer::default());
        let perfect: usize = vocab
            .words()
            .par_iter()
            .filter(|w| cache.lookup(w, w).unwrap().is_perfect())
            .count();
        assert_eq!(perfect, vocab.len());
    }
}
