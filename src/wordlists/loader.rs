//! Word list loading utilities
//!
//! A word list file is either a JSON array of strings or plain text with one
//! word per line. Validation happens later, in [`Vocabulary::new`](crate::core::Vocabulary::new).

use std::fs;
use std::io;
use std::path::Path;

/// Load raw words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or an
/// [`io::ErrorKind::InvalidData`] error if it looks like JSON but is not an
/// array of strings.
///
/// # Examples
/// ```no_run
/// use wordle_infogain::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.json").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    parse_word_list(&content)
}

/// Parse the contents of a word list file
///
/// # Errors
///
/// Returns an [`io::ErrorKind::InvalidData`] error for malformed JSON.
pub fn parse_word_list(content: &str) -> io::Result<Vec<String>> {
    if content.trim_start().starts_with('[') {
        let words: Vec<String> = serde_json::from_str(content)?;
        return Ok(words.into_iter().map(|w| w.trim().to_string()).collect());
    }

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
