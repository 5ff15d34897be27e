//! Diagnostic output
//!
//! A `Reporter` is handed to each component that wants to say something. It
//! writes to stderr so that results printed on stdout stay clean.

use crate::config::Verbosity;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;

/// Verbosity-gated writer for progress and diagnostic lines
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    verbosity: Verbosity,
}

impl Reporter {
    #[must_use]
    pub const fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Reporter that prints nothing
    #[must_use]
    pub const fn quiet() -> Self {
        Self::new(Verbosity::Quiet)
    }

    #[must_use]
    pub const fn verbosity(self) -> Verbosity {
        self.verbosity
    }

    /// Print at `Normal` and above
    pub fn info(self, args: fmt::Arguments<'_>) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("{} {args}", "info".bright_cyan().bold());
        }
    }

    /// Print at `Verbose` only
    pub fn debug(self, args: fmt::Arguments<'_>) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!("{} {args}", "debug".bright_black());
        }
    }

    /// Print a warning unless quiet
    pub fn warn(self, args: fmt::Arguments<'_>) {
        if self.verbosity > Verbosity::Quiet {
            eprintln!("{} {args}", "warn".yellow().bold());
        }
    }

    /// Progress bar for `len` units of work, hidden when quiet
    #[must_use]
    pub fn progress_bar(self, len: u64) -> ProgressBar {
        if self.verbosity == Verbosity::Quiet {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    }
}
