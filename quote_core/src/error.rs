//! Error types shared by the loader, the formatter and the binary.
//!
//! Every failure is fatal. The `QuoteError` enum carries enough context for a
//! one-line diagnostic and knows which process exit code it maps to, so the
//! binary only translates it at the very end.
use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for loading, selecting and printing quotes.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// The `-f` flag was not given on the command line.
    #[error("Missing quote file: pass it with -f <PATH>")]
    MissingFlag,

    /// The quote file could not be opened (missing, unreadable, a directory...).
    #[error("Error opening file {}: {source}", path.display())]
    FileOpen {
        /// Path that was being opened.
        path: PathBuf,
        /// Underlying OS error.
        source: io::Error,
    },

    /// The quote file handle reported an error when it was released.
    #[error("Quote file {} closed with errors: {source}", path.display())]
    FileClose {
        /// Path of the released file.
        path: PathBuf,
        /// Underlying OS error.
        source: io::Error,
    },

    /// I/O error while reading lines from an already opened file.
    #[error("I/O error: {0}")]
    Read(#[from] io::Error),

    /// The file ended right after a quote line, so that quote has no author.
    #[error("Quote on line {line} has no author")]
    OddLineCount {
        /// 1-based line number of the orphan quote.
        line: usize,
    },

    /// The quote file holds no quote/author pair to pick from.
    #[error("No quotes to choose from")]
    NoQuotes,

    /// Storage for a record could not be allocated.
    #[error("Out of memory: {0}")]
    OutOfMemory(#[from] TryReserveError),

    /// Writing the quote to the output stream failed.
    #[error("Output error: {0}")]
    Output(io::Error),
}

impl QuoteError {
    /// Process exit code reported for this error.
    ///
    /// Codes 3, 4, 6 and 8 are kept stable for scripts that check them.
    pub fn exit_code(&self) -> u8 {
        match self {
            QuoteError::Output(_) => 1,
            QuoteError::MissingFlag => 2,
            QuoteError::FileOpen { .. } => 3,
            QuoteError::FileClose { .. } => 4,
            QuoteError::Read(_) => 5,
            QuoteError::OddLineCount { .. } => 6,
            QuoteError::NoQuotes => 7,
            QuoteError::OutOfMemory(_) => 8,
        }
    }
}
