//! Command-line arguments for Quote Print.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use quote_core::{QuoteError, Result, TabMode};
use std::path::PathBuf;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the quote file: each quote line is followed by its author line.
    #[clap(short = 'f', value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Wrap with real 8-column tab stops instead of the legacy tab approximation.
    #[clap(long)]
    pub tab_stops: bool,

    /// Seed for picking the quote. Defaults to the current time in seconds.
    #[clap(long)]
    pub seed: Option<u64>,
}

impl Args {
    /// Quote file path given with `-f`, or `QuoteError::MissingFlag`.
    pub fn quote_file(&self) -> Result<PathBuf> {
        self.file.clone().ok_or(QuoteError::MissingFlag)
    }

    /// Wrapping mode selected on the command line.
    pub fn tab_mode(&self) -> TabMode {
        if self.tab_stops {
            TabMode::TabStops
        } else {
            TabMode::Legacy
        }
    }
}
