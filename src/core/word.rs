//! Word representation
//!
//! A Word stores a lowercase ASCII word along with a letter-set bitmask so that
//! "does the target contain this letter" is a single AND.

use std::fmt;
use thiserror::Error;

/// Longest word the solver accepts
///
/// A pattern for an L-letter word is encoded as an L-digit base-3 number in a
/// `u32`, and 3^20 is the largest power of three that fits.
pub const MAX_WORD_LEN: usize = 20;

/// A fixed-length word made of ASCII letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letter_mask: u32,
}

/// Error type for invalid words
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,
    #[error("word must be at most {MAX_WORD_LEN} letters, got {0}")]
    TooLong(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased. Length is not checked against any vocabulary here;
    /// that is the job of [`Vocabulary`](super::Vocabulary).
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty, longer than [`MAX_WORD_LEN`],
    /// or contains anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_infogain::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert!(word.has_letter(b'r'));
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() > MAX_WORD_LEN {
            return Err(WordError::TooLong(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letter_mask = text
            .bytes()
            .fold(0u32, |mask, b| mask | (1 << (b - b'a')));

        Ok(Self { text, letter_mask })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; an empty Word cannot be constructed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.letter_mask & (1 << (letter - b'a')) != 0
    }

    /// Count how often each letter occurs, indexed by `letter - b'a'`
    #[must_use]
    pub(crate) fn letter_counts(&self) -> [u8; 26] {
        let mut counts = [0u8; 26];
        for &b in self.bytes() {
            counts[usize::from(b - b'a')] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.bytes(), b"crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("abc").unwrap().len(), 3);
        assert_eq!(Word::new("a").unwrap().len(), 1);
        assert_eq!(Word::new("a".repeat(MAX_WORD_LEN)).unwrap().len(), MAX_WORD_LEN);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CrAnE").unwrap();
        assert_eq!(word.text(), "crane");
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(
            Word::new("a".repeat(MAX_WORD_LEN + 1)),
            Err(WordError::TooLong(MAX_WORD_LEN + 1))
        );
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crané"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter(b'c'));
        assert!(word.has_letter(b'e'));
        assert!(!word.has_letter(b'z'));
        assert!(!word.has_letter(b'0'));
    }

    #[test]
    fn word_letter_counts_duplicates() {
        let word = Word::new("speed").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts[usize::from(b'e' - b'a')], 2);
        assert_eq!(counts[usize::from(b's' - b'a')], 1);
        assert_eq!(counts[usize::from(b'z' - b'a')], 0);
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
