//! Word lists
//!
//! Reading word list files from disk. No list is bundled with the crate.

pub mod loader;

pub use loader::{load_from_file, parse_word_list};
