//! Command implementations

pub mod interactive;
pub mod simulate;

pub use interactive::{run_interactive, run_interactive_with};
pub use simulate::{SimulationResult, run_simulation, simulate_command};
