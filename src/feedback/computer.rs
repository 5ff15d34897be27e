//! Direct feedback computation

use super::FeedbackSource;
use crate::core::{Pattern, Word};
use crate::error::{Result, SolverError};

/// Which letters count as `Present`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackRule {
    /// A letter is present if the target contains it at all (default)
    #[default]
    Membership,
    /// Present letters consume the target's remaining copies, as in the real game
    CountAware,
}

impl FeedbackRule {
    /// Create rule from name string
    ///
    /// Supported names: "membership", "count-aware". Returns `None` otherwise.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "membership" => Some(Self::Membership),
            "count-aware" | "counted" => Some(Self::CountAware),
            _ => None,
        }
    }
}

/// Computes feedback from scratch for any pair of equal-length words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeedbackComputer {
    rule: FeedbackRule,
}

impl FeedbackComputer {
    #[must_use]
    pub const fn new(rule: FeedbackRule) -> Self {
        Self { rule }
    }

    #[must_use]
    pub const fn rule(self) -> FeedbackRule {
        self.rule
    }

    /// Feedback when `guess` is played against `target`
    ///
    /// # Errors
    /// Returns [`SolverError::LengthMismatch`] if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_infogain::core::Word;
    /// use wordle_infogain::feedback::FeedbackComputer;
    ///
    /// let computer = FeedbackComputer::default();
    /// let guess = Word::new("abc").unwrap();
    /// let target = Word::new("cab").unwrap();
    ///
    /// let pattern = computer.compute(&guess, &target).unwrap();
    /// assert_eq!(pattern.to_symbols(), "111");
    /// assert!(computer.compute(&guess, &Word::new("abcd").unwrap()).is_err());
    /// ```
    pub fn compute(self, guess: &Word, target: &Word) -> Result<Pattern> {
        if guess.len() != target.len() {
            return Err(SolverError::LengthMismatch {
                word: target.text().to_string(),
                expected: guess.len(),
                actual: target.len(),
            });
        }
        Ok(self.compute_unchecked(guess, target))
    }

    /// Same as [`compute`](Self::compute) for words already known to share a length
    #[must_use]
    pub(crate) fn compute_unchecked(self, guess: &Word, target: &Word) -> Pattern {
        match self.rule {
            FeedbackRule::Membership => Pattern::membership(guess, target),
            FeedbackRule::CountAware => Pattern::count_aware(guess, target),
        }
    }
}

impl FeedbackSource for FeedbackComputer {
    fn feedback(&self, guess: &Word, target: &Word) -> Result<Pattern> {
        self.compute(guess, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn default_rule_is_membership() {
        assert_eq!(FeedbackComputer::default().rule(), FeedbackRule::Membership);
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let err = FeedbackComputer::default()
            .compute(&word("abcde"), &word("abc"))
            .unwrap_err();
        assert_eq!(
            err,
            SolverError::LengthMismatch {
                word: "abc".to_string(),
                expected: 5,
                actual: 3,
            }
        );
    }

    #[test]
    fn exact_match_is_perfect_under_both_rules() {
        for rule in [FeedbackRule::Membership, FeedbackRule::CountAware] {
            let computer = FeedbackComputer::new(rule);
            assert!(computer.compute(&word("speed"), &word("speed")).unwrap().is_perfect());
            assert!(!computer.compute(&word("speed"), &word("spend")).unwrap().is_perfect());
        }
    }

    #[test]
    fn rules_disagree_only_on_repeats() {
        let membership = FeedbackComputer::new(FeedbackRule::Membership);
        let counted = FeedbackComputer::new(FeedbackRule::CountAware);

        // No repeated letters: identical feedback
        let (g, t) = (word("crane"), word("react"));
        assert_eq!(membership.compute(&g, &t), counted.compute(&g, &t));

        // EERIE vs THEME: membership marks all three E's
        let (g, t) = (word("eerie"), word("theme"));
        assert_eq!(membership.compute(&g, &t).unwrap().to_symbols(), "11220");
        assert_eq!(counted.compute(&g, &t).unwrap().to_symbols(), "12220");
    }

    #[test]
    fn rule_from_name() {
        assert_eq!(FeedbackRule::from_name("membership"), Some(FeedbackRule::Membership));
        assert_eq!(FeedbackRule::from_name("count-aware"), Some(FeedbackRule::CountAware));
        assert_eq!(FeedbackRule::from_name("other"), None);
    }
}
