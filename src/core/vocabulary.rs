//! Validated vocabulary
//!
//! The vocabulary is the ordered word list every game starts from. Its order
//! is the tie-break order for ranking, so it is preserved exactly.

use super::Word;
use crate::error::{Result, SolverError};
use rustc_hash::FxHashSet;

/// Ordered, duplicate-free list of equal-length words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<Word>,
    word_len: usize,
}

impl Vocabulary {
    /// Build a vocabulary from raw strings
    ///
    /// Words are lowercased. Repeated words keep their first position.
    ///
    /// # Errors
    /// - [`SolverError::EmptyVocabulary`] if no words are given
    /// - [`SolverError::InvalidWord`] for a word with non-letters
    /// - [`SolverError::LengthMismatch`] if a word's length differs from the first word's
    ///
    /// # Examples
    /// ```
    /// use wordle_infogain::core::Vocabulary;
    ///
    /// let vocab = Vocabulary::new(["abc", "BCD", "abc"]).unwrap();
    /// assert_eq!(vocab.len(), 2);
    /// assert_eq!(vocab.word_len(), 3);
    ///
    /// assert!(Vocabulary::new(["abc", "abcd"]).is_err());
    /// ```
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let mut parsed: Vec<Word> = Vec::new();
        let mut word_len = None;

        for raw in words {
            let raw = raw.as_ref();
            let word = Word::new(raw).map_err(|source| SolverError::InvalidWord {
                word: raw.to_string(),
                source,
            })?;

            let expected = *word_len.get_or_insert(word.len());
            if word.len() != expected {
                return Err(SolverError::LengthMismatch {
                    word: word.text().to_string(),
                    expected,
                    actual: word.len(),
                });
            }

            if seen.insert(word.text().to_string()) {
                parsed.push(word);
            }
        }

        let word_len = word_len.ok_or(SolverError::EmptyVocabulary)?;

        Ok(Self {
            words: parsed,
            word_len,
        })
    }

    /// Words in their original order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Shared length of every word
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; construction rejects empty input
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Look up a vocabulary word by text
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        self.words.iter().find(|w| w.text() == text)
    }

    /// Full pool of references, the starting state of every game
    #[must_use]
    pub fn pool(&self) -> Vec<&Word> {
        self.words.iter().collect()
    }

    /// Parse a word supplied from outside and check it has this vocabulary's length
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidWord`] or [`SolverError::LengthMismatch`].
    pub fn parse_word(&self, text: &str) -> Result<Word> {
        let word = Word::new(text).map_err(|source| SolverError::InvalidWord {
            word: text.to_string(),
            source,
        })?;
        self.check_len(&word)?;
        Ok(word)
    }

    /// Check a word has this vocabulary's length
    ///
    /// # Errors
    /// Returns [`SolverError::LengthMismatch`] naming the word.
    pub fn check_len(&self, word: &Word) -> Result<()> {
        if word.len() == self.word_len {
            Ok(())
        } else {
            Err(SolverError::LengthMismatch {
                word: word.text().to_string(),
                expected: self.word_len,
                actual: word.len(),
            })
        }
    }
}
