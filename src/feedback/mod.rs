//! Feedback sources
//!
//! Ranking, pruning and simulation only ever ask "what feedback does this
//! guess produce against this target". [`FeedbackSource`] is that question;
//! [`FeedbackComputer`] answers it from scratch and [`FeedbackCache`] answers
//! it from a precomputed table.

mod cache;
mod computer;

pub use cache::FeedbackCache;
pub use computer::{FeedbackComputer, FeedbackRule};

use crate::core::{Pattern, Vocabulary, Word};
use crate::error::Result;

/// Anything that can produce feedback for a (guess, target) pair
///
/// Implementations must be deterministic and free of interior mutation so a
/// single instance can be shared by every worker of a batch run.
pub trait FeedbackSource: Sync {
    /// Feedback when `guess` is played against `target`
    ///
    /// # Errors
    /// Returns an error if the pair cannot be scored by this source.
    fn feedback(&self, guess: &Word, target: &Word) -> Result<Pattern>;

    /// Whether this source can score `word` as a guess or target
    fn covers(&self, _word: &Word) -> bool {
        true
    }
}

/// Runtime choice between direct computation and the precomputed cache
///
/// Allows runtime selection while keeping static dispatch in the hot loop.
#[derive(Debug)]
pub enum FeedbackBackend {
    Computed(FeedbackComputer),
    Cached(FeedbackCache),
}

impl FeedbackBackend {
    /// Select a backend; builds the full cache when `precompute` is set
    #[must_use]
    pub fn new(vocabulary: &Vocabulary, computer: FeedbackComputer, precompute: bool) -> Self {
        if precompute {
            Self::Cached(FeedbackCache::build(vocabulary, computer))
        } else {
            Self::Computed(computer)
        }
    }

    /// The computer behind this backend, for scoring words outside the vocabulary
    #[must_use]
    pub const fn computer(&self) -> FeedbackComputer {
        match self {
            Self::Computed(c) => *c,
            Self::Cached(cache) => cache.computer(),
        }
    }

    #[must_use]
    pub const fn is_cached(&self) -> bool {
        matches!(self, Self::Cached(_))
    }
}

impl FeedbackSource for FeedbackBackend {
    fn feedback(&self, guess: &Word, target: &Word) -> Result<Pattern> {
        match self {
            Self::Computed(c) => c.feedback(guess, target),
            Self::Cached(cache) => cache.feedback(guess, target),
        }
    }

    fn covers(&self, word: &Word) -> bool {
        match self {
            Self::Computed(c) => c.covers(word),
            Self::Cached(cache) => cache.covers(word),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backends_agree() {
        let vocab = Vocabulary::new(["abc", "bcd", "cda"]).unwrap();
        let computed = FeedbackBackend::new(&vocab, FeedbackComputer::default(), false);
        let cached = FeedbackBackend::new(&vocab, FeedbackComputer::default(), true);

        assert!(!computed.is_cached());
        assert!(cached.is_cached());

        for g in vocab.words() {
            for t in vocab.words() {
                assert_eq!(computed.feedback(g, t), cached.feedback(g, t));
            }
        }
    }

    #[test]
    fn only_cache_restricts_coverage() {
        let vocab = Vocabulary::new(["abc", "bcd"]).unwrap();
        let outside = Word::new("xyz").unwrap();

        let computed = FeedbackBackend::new(&vocab, FeedbackComputer::default(), false);
        let cached = FeedbackBackend::new(&vocab, FeedbackComputer::default(), true);

        assert!(computed.covers(&outside));
        assert!(!cached.covers(&outside));
        assert_eq!(cached.computer(), FeedbackComputer::default());
    }
}
