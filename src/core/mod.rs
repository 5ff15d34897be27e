//! Core domain types
//!
//! Words, feedback patterns and the validated vocabulary. Everything here is a
//! plain value type with no shared state.

mod pattern;
mod vocabulary;
mod word;

pub use pattern::{Feedback, Pattern};
pub use vocabulary::Vocabulary;
pub use word::{MAX_WORD_LEN, Word, WordError};
