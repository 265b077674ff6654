//! Quote Print — picks a random quote from a text file and prints it, wrapped at
//! 80 columns, in bright green with its author in bright cyan.
//!
//! Usage example (CLI):
//! ```bash
//! quote_print -f ./quotes.txt
//! ```
//!
//! The quote file holds one quote per line, each immediately followed by one
//! line naming its author. See `quote_core::record` for details.
//!
//! Every failure is fatal: a one-line diagnostic goes to stderr and the process
//! exits with the code from `QuoteError::exit_code`.
#![warn(missing_docs)]
mod args;
mod presenter;

use crate::args::Args;
use crate::presenter::{clock_seed, Presenter};
use clap::Parser;
use log::debug;
use quote_core::{QuoteLoader, Result};
use std::io;
use std::process::ExitCode;

fn run(args: &Args) -> Result<()> {
    let path = args.quote_file()?;
    let quotes = QuoteLoader::load(&path)?;
    debug!("Loaded {} quotes from {}", quotes.len(), path.display());

    let seed = args.seed.unwrap_or_else(clock_seed);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    Presenter::new(args.tab_mode()).run(quotes, seed, &mut out)
}

fn main() -> ExitCode {
    init_logger();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
