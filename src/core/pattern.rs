//! Feedback patterns
//!
//! A pattern is the per-position feedback for one guess against one target.
//! It is stored as a base-3 number (one digit per letter, position 0 is the
//! least significant digit) plus the word length, so two patterns compare
//! equal exactly when every position matches:
//! - 0 = Absent
//! - 1 = Present
//! - 2 = Correct
//!
//! The external text form uses the symbols `0` (Correct), `1` (Present) and
//! `2` (Absent), one per letter.

use super::Word;
use super::word::MAX_WORD_LEN;
use crate::error::{Result, SolverError};
use std::fmt;

/// Feedback for a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter does not occur in the target
    Absent,
    /// Letter occurs in the target at another position
    Present,
    /// Letter matches the target at this position
    Correct,
}

impl Feedback {
    const fn digit(self) -> u32 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    const fn from_digit(digit: u32) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Parse one external feedback symbol
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '0' => Some(Self::Correct),
            '1' => Some(Self::Present),
            '2' => Some(Self::Absent),
            _ => None,
        }
    }

    /// The external symbol for this feedback
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => '0',
            Self::Present => '1',
            Self::Absent => '2',
        }
    }

    /// Emoji square for display
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback vector for a whole word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern {
    code: u32,
    len: u8,
}

impl Pattern {
    /// All-`Correct` pattern for words of `len` letters
    #[must_use]
    pub const fn perfect(len: usize) -> Self {
        debug_assert!(len <= MAX_WORD_LEN);
        // 3^len - 1 is the all-twos number
        Self {
            code: 3u32.pow(len as u32) - 1,
            len: len as u8,
        }
    }

    /// Build a pattern from per-letter feedback
    ///
    /// # Panics
    /// Panics in debug mode if more than [`MAX_WORD_LEN`] entries are given.
    #[must_use]
    pub fn from_feedback(feedback: &[Feedback]) -> Self {
        debug_assert!(feedback.len() <= MAX_WORD_LEN);
        let mut code = 0u32;
        let mut multiplier = 1u32;
        for &f in feedback {
            code += f.digit() * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self {
            code,
            len: feedback.len() as u8,
        }
    }

    /// Rebuild a pattern from its code, as stored by the feedback cache
    #[inline]
    #[must_use]
    pub(crate) const fn from_code(code: u32, len: usize) -> Self {
        Self {
            code,
            len: len as u8,
        }
    }

    /// Canonical base-3 code, usable as a compact lookup key
    #[inline]
    #[must_use]
    pub const fn code(self) -> u32 {
        self.code
    }

    /// Number of letters covered
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// True only for the zero-length pattern
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Check if every letter is `Correct`
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.code == Self::perfect(self.len as usize).code
    }

    /// Feedback per position, in word order
    pub fn feedback(self) -> impl Iterator<Item = Feedback> {
        let mut val = self.code;
        (0..self.len).map(move |_| {
            let digit = val % 3;
            val /= 3;
            Feedback::from_digit(digit)
        })
    }

    /// Feedback under the membership rule
    ///
    /// A letter is `Correct` on a positional match, otherwise `Present` if the
    /// target contains it anywhere, otherwise `Absent`. Repeated letters are
    /// not reconciled against the target's letter counts.
    ///
    /// Callers must pass words of equal length.
    #[must_use]
    pub(crate) fn membership(guess: &Word, target: &Word) -> Self {
        debug_assert_eq!(guess.len(), target.len());
        let mut code = 0u32;
        let mut multiplier = 1u32;

        for (&g, &t) in guess.bytes().iter().zip(target.bytes()) {
            let feedback = if g == t {
                Feedback::Correct
            } else if target.has_letter(g) {
                Feedback::Present
            } else {
                Feedback::Absent
            };
            code += feedback.digit() * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }

        Self {
            code,
            len: guess.len() as u8,
        }
    }

    /// Feedback under the duplicate-aware rule used by the real game
    ///
    /// 1. Mark exact matches and remove them from the target's letter pool
    /// 2. Mark remaining letters `Present` while the pool still has a copy
    ///
    /// Callers must pass words of equal length.
    #[must_use]
    pub(crate) fn count_aware(guess: &Word, target: &Word) -> Self {
        debug_assert_eq!(guess.len(), target.len());
        let mut result = [Feedback::Absent; MAX_WORD_LEN];
        let mut available = target.letter_counts();

        for (i, (&g, &t)) in guess.bytes().iter().zip(target.bytes()).enumerate() {
            if g == t {
                result[i] = Feedback::Correct;
                available[usize::from(g - b'a')] -= 1;
            }
        }

        for (i, &g) in guess.bytes().iter().enumerate() {
            if result[i] == Feedback::Absent {
                let slot = &mut available[usize::from(g - b'a')];
                if *slot > 0 {
                    result[i] = Feedback::Present;
                    *slot -= 1;
                }
            }
        }

        Self::from_feedback(&result[..guess.len()])
    }

    /// Parse external feedback such as `"01220"`
    ///
    /// Exactly `word_len` symbols from the alphabet `0` (Correct), `1`
    /// (Present), `2` (Absent) are accepted; surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns [`SolverError::MalformedFeedback`] on a wrong length or any
    /// other symbol.
    ///
    /// # Examples
    /// ```
    /// use wordle_infogain::core::{Feedback, Pattern};
    ///
    /// let pattern = Pattern::parse("012", 3).unwrap();
    /// let letters: Vec<Feedback> = pattern.feedback().collect();
    /// assert_eq!(letters, [Feedback::Correct, Feedback::Present, Feedback::Absent]);
    ///
    /// assert!(Pattern::parse("01x", 3).is_err());
    /// assert!(Pattern::parse("01", 3).is_err());
    /// ```
    pub fn parse(input: &str, word_len: usize) -> Result<Self> {
        let trimmed = input.trim();
        let malformed = |reason: String| SolverError::MalformedFeedback {
            input: trimmed.to_string(),
            reason,
        };

        let mut feedback = Vec::with_capacity(word_len);
        for symbol in trimmed.chars() {
            let f = Feedback::from_symbol(symbol).ok_or_else(|| {
                malformed(format!(
                    "unrecognized symbol '{symbol}' (use 0 = correct, 1 = present, 2 = absent)"
                ))
            })?;
            feedback.push(f);
        }

        if feedback.len() != word_len {
            return Err(malformed(format!(
                "expected {word_len} symbols, got {}",
                feedback.len()
            )));
        }

        Ok(Self::from_feedback(&feedback))
    }

    /// External symbol string, e.g. `"01220"`
    #[must_use]
    pub fn to_symbols(self) -> String {
        self.feedback().map(Feedback::symbol).collect()
    }

    /// Emoji string, e.g. `"🟩🟨⬜⬜⬜"`
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.feedback().map(Feedback::emoji).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_symbols())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn letters(p: Pattern) -> Vec<Feedback> {
        p.feedback().collect()
    }

    use super::Feedback::{Absent, Correct, Present};

    #[test]
    fn perfect_constant() {
        assert_eq!(Pattern::perfect(5).code(), 242);
        assert!(Pattern::perfect(5).is_perfect());
        assert_eq!(Pattern::perfect(3).code(), 26);
        assert_eq!(letters(Pattern::perfect(2)), [Correct, Correct]);
    }

    #[test]
    fn all_absent() {
        let pattern = Pattern::membership(&word("abcde"), &word("fghij"));
        assert_eq!(pattern.code(), 0);
        assert_eq!(pattern.len(), 5);
        assert!(!pattern.is_perfect());
    }

    #[test]
    fn all_correct() {
        let w = word("crane");
        assert!(Pattern::membership(&w, &w).is_perfect());
        assert!(Pattern::count_aware(&w, &w).is_perfect());
    }

    #[test]
    fn membership_is_asymmetric() {
        // abc vs cab: no position matches, every letter present
        let forward = Pattern::membership(&word("abc"), &word("cab"));
        assert_eq!(letters(forward), [Present, Present, Present]);

        // abd vs cab: a and b present, d absent; reversed: c absent, a and b present
        let forward = Pattern::membership(&word("abd"), &word("cab"));
        let backward = Pattern::membership(&word("cab"), &word("abd"));
        assert_eq!(letters(forward), [Present, Present, Absent]);
        assert_eq!(letters(backward), [Absent, Present, Present]);
        assert_ne!(forward, backward);
    }

    #[test]
    fn membership_marks_every_repeat_present() {
        // SPEED vs ABIDE: the target has one E, membership marks both E's present
        let pattern = Pattern::membership(&word("speed"), &word("abide"));
        assert_eq!(letters(pattern), [Absent, Absent, Present, Present, Present]);
    }

    #[test]
    fn count_aware_consumes_letters() {
        // Same pair under the real-game rule: only one E can be yellow
        let pattern = Pattern::count_aware(&word("speed"), &word("abide"));
        assert_eq!(letters(pattern), [Absent, Absent, Present, Absent, Present]);
    }

    #[test]
    fn count_aware_green_takes_priority() {
        // ROBOT vs FLOOR: second O is green, first O takes the remaining copy
        let pattern = Pattern::count_aware(&word("robot"), &word("floor"));
        assert_eq!(letters(pattern), [Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn rules_differ_on_surplus_repeats() {
        // AAAAB vs ABCDE: one A is green; the rules disagree on the other A's
        let guess = word("aaaab");
        let target = word("abcde");
        assert_eq!(
            letters(Pattern::membership(&guess, &target)),
            [Correct, Present, Present, Present, Present]
        );
        assert_eq!(
            letters(Pattern::count_aware(&guess, &target)),
            [Correct, Absent, Absent, Absent, Present]
        );
    }

    #[test]
    fn parse_valid() {
        let pattern = Pattern::parse(" 01220 ", 5).unwrap();
        assert_eq!(letters(pattern), [Correct, Present, Absent, Absent, Correct]);
        assert_eq!(pattern.to_symbols(), "01220");
        assert_eq!(pattern.to_string(), "01220");
    }

    #[test]
    fn parse_round_trips_computed_pattern() {
        let computed = Pattern::membership(&word("abd"), &word("cab"));
        assert_eq!(Pattern::parse(&computed.to_symbols(), 3).unwrap(), computed);
    }

    #[test]
    fn parse_rejects_unknown_symbols() {
        for input in ["0123", "GYG-", "01a2", "0 12"] {
            let err = Pattern::parse(input, 4).unwrap_err();
            assert!(matches!(err, SolverError::MalformedFeedback { .. }), "{input}");
            assert!(err.is_recoverable());
        }
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(Pattern::parse("012", 5).is_err());
        assert!(Pattern::parse("", 5).is_err());
        assert!(Pattern::parse("000000", 5).is_err());
    }

    #[test]
    fn emoji_rendering() {
        let pattern = Pattern::parse("012", 3).unwrap();
        assert_eq!(pattern.to_emoji(), "🟩🟨⬜");
    }

    #[test]
    fn patterns_of_different_length_differ() {
        assert_ne!(Pattern::from_feedback(&[Absent]), Pattern::from_feedback(&[Absent, Absent]));
    }
}
