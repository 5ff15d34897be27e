//! Shannon entropy of feedback partitions
//!
//! Given a guess and a pool, groups the pool by the pattern each word would
//! produce and measures how evenly the guess splits it.

use crate::core::{Pattern, Word};
use crate::error::Result;
use crate::feedback::FeedbackSource;
use rustc_hash::FxHashMap;

/// Count how many pool words produce each pattern when `guess` is played
///
/// # Errors
/// Propagates any error from the feedback source.
pub fn pattern_counts<F>(guess: &Word, pool: &[&Word], source: &F) -> Result<FxHashMap<Pattern, usize>>
where
    F: FeedbackSource + ?Sized,
{
    let mut counts = FxHashMap::default();
    for &target in pool {
        let pattern = source.feedback(guess, target)?;
        *counts.entry(pattern).or_insert(0) += 1;
    }
    Ok(counts)
}

/// Group pool words by the pattern they produce when `guess` is played
///
/// Each group keeps the pool's order.
///
/// # Errors
/// Propagates any error from the feedback source.
pub fn partition<'a, F>(
    guess: &Word,
    pool: &[&'a Word],
    source: &F,
) -> Result<FxHashMap<Pattern, Vec<&'a Word>>>
where
    F: FeedbackSource + ?Sized,
{
    let mut groups: FxHashMap<Pattern, Vec<&'a Word>> = FxHashMap::default();
    for &target in pool {
        let pattern = source.feedback(guess, target)?;
        groups.entry(pattern).or_default().push(target);
    }
    Ok(groups)
}

/// Calculate Shannon entropy from pattern distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one pattern with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
///
/// # Examples
/// ```
/// use wordle_infogain::solver::entropy::shannon_entropy;
/// use std::collections::HashMap;
///
/// let uniform: HashMap<u8, usize> = [(0, 25), (1, 25), (2, 25), (3, 25)].into();
/// assert!((shannon_entropy(&uniform) - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy<K, S>(counts: &std::collections::HashMap<K, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    let entropy: f64 = counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();

    // A single outcome yields -1 * log2(1) = -0.0; keep scores non-negative
    entropy.max(0.0)
}

/// Entropy of the partition `guess` induces on `pool`
///
/// # Errors
/// Propagates any error from the feedback source.
pub fn guess_entropy<F>(guess: &Word, pool: &[&Word], source: &F) -> Result<f64>
where
    F: FeedbackSource + ?Sized,
{
    Ok(shannon_entropy(&pattern_counts(guess, pool, source)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::FeedbackComputer;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| Word::new(*s).unwrap()).collect()
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        let counts: FxHashMap<u8, usize> = [(0, 1), (1, 1), (2, 1), (3, 1)].into_iter().collect();
        assert!((shannon_entropy(&counts) - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        let counts: FxHashMap<u8, usize> = [(0, 10)].into_iter().collect();
        let entropy = shannon_entropy(&counts);
        assert_eq!(entropy, 0.0);
        assert!(entropy.is_sign_positive());
    }

    #[test]
    fn shannon_entropy_skewed_below_uniform() {
        let uniform: FxHashMap<u8, usize> =
            [(0, 25), (1, 25), (2, 25), (3, 25)].into_iter().collect();
        let skewed: FxHashMap<u8, usize> = [(0, 97), (1, 1), (2, 1), (3, 1)].into_iter().collect();
        assert!(shannon_entropy(&uniform) > shannon_entropy(&skewed));
    }

    #[test]
    fn shannon_entropy_empty() {
        let counts: FxHashMap<u8, usize> = FxHashMap::default();
        assert_eq!(shannon_entropy(&counts), 0.0);
    }

    #[test]
    fn perfect_split_is_one_bit() {
        let pool = words(&["abc", "xyz"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let entropy = guess_entropy(&pool[0], &refs, &FeedbackComputer::default()).unwrap();
        assert!((entropy - 1.0).abs() < 1e-12);
    }

    #[test]
    fn partition_preserves_pool_order() {
        let pool = words(&["xbc", "abc", "ybc", "zzz"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let guess = Word::new("qbc").unwrap();

        let groups = partition(&guess, &refs, &FeedbackComputer::default()).unwrap();
        assert_eq!(groups.len(), 2);

        let shared = groups.values().find(|g| g.len() == 3).unwrap();
        let texts: Vec<&str> = shared.iter().map(|w| w.text()).collect();
        assert_eq!(texts, ["xbc", "abc", "ybc"]);

        let counts = pattern_counts(&guess, &refs, &FeedbackComputer::default()).unwrap();
        assert_eq!(counts.values().sum::<usize>(), 4);
    }
}
