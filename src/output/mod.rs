//! Terminal output
//!
//! Result printing for the CLI and the stderr [`Reporter`] used by the core.

pub mod display;
pub mod formatters;
mod reporter;

pub use display::{print_evaluation, print_suggestions, print_trace};
pub use reporter::Reporter;
