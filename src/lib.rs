//! Wordle Information-Gain Solver
//!
//! Picks, round by round, the guess that maximizes expected information gain
//! over the remaining candidates, and simulates full games over a vocabulary
//! to measure how well that strategy does.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_infogain::core::Vocabulary;
//! use wordle_infogain::feedback::FeedbackComputer;
//! use wordle_infogain::solver::{GameOutcome, GameSimulator, rank};
//!
//! let vocab = Vocabulary::new(["crane", "slate", "irate", "trace"]).unwrap();
//! let computer = FeedbackComputer::default();
//!
//! // Best guesses first
//! let ranked = rank(&vocab.pool(), &computer, 1).unwrap();
//! println!("best opener: {} ({:.3} bits)", ranked[0].word, ranked[0].score);
//!
//! // Play a full game
//! let target = vocab.find("trace").unwrap();
//! let outcome = GameSimulator::new(&vocab, &computer)
//!     .simulate(target, 6, None)
//!     .unwrap();
//! assert!(matches!(outcome, GameOutcome::Solved(_)));
//! ```

// Core domain types
pub mod core;

// Feedback computation and caching
pub mod feedback;

// Ranking, pruning and game play
pub mod solver;

// Session setup from configuration
pub mod config;
pub mod session;

pub mod error;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Result, SolverError};
