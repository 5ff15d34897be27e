//! Pool pruning
//!
//! Keeps only the words that would have produced the observed feedback.

use crate::core::{Pattern, Word};
use crate::error::{Result, SolverError};
use crate::feedback::FeedbackSource;

/// Filter `pool` down to the words consistent with (`guess`, `observed`)
///
/// Pool order is preserved.
///
/// # Errors
/// - [`SolverError::LengthMismatch`] if `observed` does not cover every letter of `guess`
/// - [`SolverError::TargetNotRepresentable`] if no word survives
/// - any error from the feedback source
///
/// # Examples
/// ```
/// use wordle_infogain::core::{Vocabulary, Word};
/// use wordle_infogain::feedback::FeedbackComputer;
/// use wordle_infogain::solver::prune;
///
/// let vocab = Vocabulary::new(["abc", "bcd", "cda"]).unwrap();
/// let computer = FeedbackComputer::default();
/// let guess = Word::new("abc").unwrap();
/// let target = Word::new("bcd").unwrap();
///
/// let observed = computer.compute(&guess, &target).unwrap();
/// let remaining = prune(&vocab.pool(), &guess, observed, &computer).unwrap();
/// assert!(remaining.iter().any(|w| w.text() == "bcd"));
/// ```
pub fn prune<'a, F>(
    pool: &[&'a Word],
    guess: &Word,
    observed: Pattern,
    source: &F,
) -> Result<Vec<&'a Word>>
where
    F: FeedbackSource + ?Sized,
{
    if observed.len() != guess.len() {
        return Err(SolverError::LengthMismatch {
            word: observed.to_symbols(),
            expected: guess.len(),
            actual: observed.len(),
        });
    }

    let mut remaining = Vec::with_capacity(pool.len());
    for &candidate in pool {
        if source.feedback(guess, candidate)? == observed {
            remaining.push(candidate);
        }
    }

    if remaining.is_empty() {
        return Err(SolverError::TargetNotRepresentable {
            guess: guess.text().to_string(),
            feedback: observed.to_symbols(),
        });
    }

    Ok(remaining)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vocabulary;
    use crate::feedback::{FeedbackCache, FeedbackComputer};

    fn texts(words: &[&Word]) -> Vec<String> {
        words.iter().map(|w| w.text().to_string()).collect()
    }

    #[test]
    fn keeps_exactly_the_consistent_words() {
        let vocab = Vocabulary::new(["abc", "bcd", "cda"]).unwrap();
        let computer = FeedbackComputer::default();
        let guess = Word::new("abc").unwrap();
        let target = Word::new("bcd").unwrap();

        // abc vs bcd: a absent, b present, c present
        let observed = computer.compute(&guess, &target).unwrap();
        assert_eq!(observed.to_symbols(), "211");

        // abc vs cda gives "121", abc vs abc is perfect: only bcd survives
        let remaining = prune(&vocab.pool(), &guess, observed, &computer).unwrap();
        assert_eq!(texts(&remaining), ["bcd"]);
    }

    #[test]
    fn never_removes_the_target() {
        let vocab = Vocabulary::new(["crane", "slate", "irate", "crate", "grate", "trace"]).unwrap();
        let computer = FeedbackComputer::default();
        let pool = vocab.pool();

        for guess in vocab.words() {
            for &target in &pool {
                let observed = computer.compute(guess, target).unwrap();
                let remaining = prune(&pool, guess, observed, &computer).unwrap();
                assert!(remaining.contains(&target), "{guess} lost {target}");
                assert!(remaining.len() <= pool.len());
            }
        }
    }

    #[test]
    fn preserves_pool_order() {
        let vocab = Vocabulary::new(["xbc", "zzz", "abc", "ybc"]).unwrap();
        let computer = FeedbackComputer::default();
        let guess = Word::new("qbc").unwrap();
        let observed = Pattern::parse("200", 3).unwrap();

        let remaining = prune(&vocab.pool(), &guess, observed, &computer).unwrap();
        assert_eq!(texts(&remaining), ["xbc", "abc", "ybc"]);
    }

    #[test]
    fn empty_result_is_an_error() {
        let vocab = Vocabulary::new(["abc", "bcd"]).unwrap();
        let guess = Word::new("xyz").unwrap();
        let observed = Pattern::perfect(3);

        let err = prune(&vocab.pool(), &guess, observed, &FeedbackComputer::default()).unwrap_err();
        assert_eq!(
            err,
            SolverError::TargetNotRepresentable {
                guess: "xyz".to_string(),
                feedback: "000".to_string(),
            }
        );
        assert!(!err.is_recoverable());
    }

    #[test]
    fn wrong_feedback_length_is_an_error() {
        let vocab = Vocabulary::new(["abc", "bcd"]).unwrap();
        let guess = Word::new("abc").unwrap();
        let result = prune(&vocab.pool(), &guess, Pattern::perfect(5), &FeedbackComputer::default());
        assert!(matches!(
            result,
            Err(SolverError::LengthMismatch { expected: 3, actual: 5, .. })
        ));
    }

    #[test]
    fn cached_guess_outside_vocabulary_is_a_miss() {
        let vocab = Vocabulary::new(["abc", "bcd"]).unwrap();
        let cache = FeedbackCache::build(&vocab, FeedbackComputer::default());
        let guess = Word::new("xyz").unwrap();

        let result = prune(&vocab.pool(), &guess, Pattern::perfect(3), &cache);
        assert!(matches!(result, Err(SolverError::CacheMiss { .. })));
    }
}
