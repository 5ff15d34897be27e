//! Ranking, pruning and game play
//!
//! Everything here is generic over [`FeedbackSource`](crate::feedback::FeedbackSource),
//! so the same code runs on direct computation or on the precomputed cache.

mod batch;
pub mod entropy;
mod interactive;
mod pruner;
mod ranker;
mod simulator;

pub use batch::{BatchEvaluator, EvaluationReport, GameFailure, histogram_mean};
pub use interactive::{FeedbackInput, InteractiveGame, TurnOutcome};
pub use pruner::prune;
pub use ranker::{ScoredCandidate, best_guess, rank};
pub use simulator::{FAILURE_SENTINEL, GameOutcome, GameSimulator, GameTrace, TraceStep};
