//! Wordle Information-Gain Solver - CLI
//!
//! Manual play with ranked suggestions, or simulated games over a whole word list.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_infogain::{
    commands::{run_interactive, simulate_command},
    config::{FailurePolicy, Mode, SolverConfig, Verbosity},
    feedback::FeedbackRule,
    session::Session,
    wordlists::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_infogain",
    about = "Wordle solver that picks guesses by expected information gain",
    version,
    author
)]
struct Cli {
    /// Word list: JSON array of strings, or one word per line
    word_list: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Lookahead depth for ranking (1 = plain entropy)
    #[arg(short, long, global = true, default_value = "1")]
    depth: usize,

    /// Precompute feedback for every word pair before playing
    #[arg(short, long, global = true)]
    precompute: bool,

    /// Worker threads for batch simulation (0 = one per CPU)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    workers: usize,

    /// Step budget per game (default: 10 interactive, 100 simulate)
    #[arg(short = 'm', long, global = true)]
    max_steps: Option<usize>,

    /// Force the first guess
    #[arg(short = 'f', long, global = true)]
    first_guess: Option<String>,

    /// Play a single scripted game against this word
    #[arg(short, long, global = true)]
    target: Option<String>,

    /// Feedback rule: membership (default) or count-aware
    #[arg(short, long, global = true, default_value = "membership")]
    rule: String,

    /// How failed games enter the mean: sentinel (default) or exclude
    #[arg(long, global = true, default_value = "sentinel")]
    failures: String,

    /// Show per-step diagnostics
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress diagnostics and progress bars
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Manual play with ranked suggestions (default)
    Interactive,

    /// Simulate one scripted game (with --target) or every word in the list
    Simulate,
}

impl Cli {
    fn into_config(self) -> Result<SolverConfig> {
        let Some(feedback_rule) = FeedbackRule::from_name(&self.rule) else {
            bail!("unknown feedback rule '{}' (use membership or count-aware)", self.rule);
        };
        let failure_policy = match self.failures.to_lowercase().as_str() {
            "sentinel" => FailurePolicy::Sentinel,
            "exclude" => FailurePolicy::Exclude,
            other => bail!("unknown failure policy '{other}' (use sentinel or exclude)"),
        };
        let mode = match self.command.unwrap_or(Commands::Interactive) {
            Commands::Interactive => Mode::Interactive,
            Commands::Simulate => Mode::Simulate,
        };
        let verbosity = if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };

        Ok(SolverConfig {
            word_list: Some(self.word_list),
            mode,
            first_guess: self.first_guess,
            target: self.target,
            workers: self.workers,
            depth: self.depth,
            precompute_cache: self.precompute,
            max_steps: self.max_steps,
            feedback_rule,
            failure_policy,
            verbosity,
        })
    }
}

fn main() -> Result<()> {
    let config = Cli::parse().into_config()?;

    let path = config.word_list.clone().unwrap_or_default();
    let words = load_from_file(&path)
        .with_context(|| format!("reading word list {}", path.display()))?;

    let mode = config.mode;
    let session = Session::from_words(words, config)
        .with_context(|| format!("building vocabulary from {}", path.display()))?;

    match mode {
        Mode::Interactive => run_interactive(&session),
        Mode::Simulate => simulate_command(&session),
    }
}
