//! Picking one quote at random and printing it in color.
//!
//! Output layout, written as literal data with no formatting applied to the
//! quote text:
//!
//! ```text
//! ESC[32;1m <wrapped quote> ESC[36;1m <wrapped author> ESC[0;37m
//! ```
use std::io::Write;

use chrono::Utc;
use log::{debug, info};
use quote_core::style::AnsiColor;
use quote_core::{QuoteCollection, QuoteError, QuoteRecord, Result, TabMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Selects a record and writes it to an output stream.
pub struct Presenter {
    tab_mode: TabMode,
}

impl Presenter {
    /// Create a presenter that wraps text with `tab_mode`.
    pub fn new(tab_mode: TabMode) -> Self {
        Self { tab_mode }
    }

    /// Seeds a generator with `seed`, picks one record and prints it to `out`.
    pub fn run<W: Write>(&self, quotes: QuoteCollection, seed: u64, out: &mut W) -> Result<()> {
        let mut rng = StdRng::seed_from_u64(seed);
        let index = Self::select(&quotes, &mut rng)?;
        info!("Selected quote {} of {} (seed {})", index, quotes.len(), seed);

        let record = quotes.take(index).ok_or(QuoteError::NoQuotes)?;
        self.present(record, out)
    }

    /// Draws an index uniformly in `[0, quotes.len())`.
    pub fn select<R: Rng>(quotes: &QuoteCollection, rng: &mut R) -> Result<usize> {
        if quotes.is_empty() {
            debug!("Quote file contains no quote/author pairs");
            return Err(QuoteError::NoQuotes);
        }
        Ok(rng.random_range(0..quotes.len()))
    }

    /// Wraps `record` and writes it with its color codes.
    pub fn present<W: Write>(&self, mut record: QuoteRecord, out: &mut W) -> Result<()> {
        record.wrap(self.tab_mode);

        let parts: [&[u8]; 5] = [
            AnsiColor::BrightGreen.code().as_bytes(),
            &record.quote,
            AnsiColor::BrightCyan.code().as_bytes(),
            &record.author,
            AnsiColor::White.code().as_bytes(),
        ];
        for part in parts {
            out.write_all(part).map_err(QuoteError::Output)?;
        }
        out.flush().map_err(QuoteError::Output)
    }
}

/// Seed derived from the wall clock, in whole seconds.
pub fn clock_seed() -> u64 {
    Utc::now().timestamp().unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io;

    fn collection(count: usize) -> QuoteCollection {
        (0..count)
            .map(|i| QuoteRecord::new(format!("quote {i}\n"), format!("author {i}\n")))
            .collect()
    }

    #[test]
    fn prints_colored_quote_and_author() {
        let mut out = Vec::new();
        Presenter::new(TabMode::Legacy)
            .run(collection(1), 7, &mut out)
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\x1b[32;1mquote 0\n\x1b[36;1mauthor 0\n\x1b[0;37m"
        );
    }

    #[test]
    fn percent_sequences_are_printed_literally() {
        let mut out = Vec::new();
        let record = QuoteRecord::new("100%s sure {}\n", "%n%x\n");
        Presenter::new(TabMode::Legacy).present(record, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("100%s sure {}\n"));
        assert!(text.contains("%n%x\n"));
    }

    #[test]
    fn long_quote_is_wrapped_before_printing() {
        let quote = format!("{}\n", vec!["word"; 85].join(" "));
        let mut out = Vec::new();
        Presenter::new(TabMode::Legacy)
            .present(QuoteRecord::new(quote.clone(), "Someone\n"), &mut out)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains(&quote));
        assert_eq!(text.len(), quote.len() + "Someone\n".len() + 7 + 7 + 7);
    }

    #[test]
    fn latin1_bytes_reach_the_output_unchanged() {
        let mut out = Vec::new();
        let record = QuoteRecord::new(b"Caf\xe9 au lait.\n", b"Anon\n");
        Presenter::new(TabMode::Legacy).present(record, &mut out).unwrap();

        assert_eq!(out, b"\x1b[32;1mCaf\xe9 au lait.\n\x1b[36;1mAnon\n\x1b[0;37m");
    }

    #[test]
    fn empty_collection_has_no_quotes() {
        let mut out = Vec::new();
        let err = Presenter::new(TabMode::Legacy)
            .run(QuoteCollection::default(), 1, &mut out)
            .unwrap_err();

        assert!(matches!(err, QuoteError::NoQuotes));
        assert_eq!(err.exit_code(), 7);
        assert!(out.is_empty());
    }

    #[test]
    fn selection_stays_in_range_and_covers_all_records() {
        let quotes = collection(5);
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = HashSet::new();

        for _ in 0..500 {
            let index = Presenter::select(&quotes, &mut rng).unwrap();
            assert!(index < 5);
            seen.insert(index);
        }
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn same_seed_picks_same_quote() {
        let run = |seed| {
            let mut out = Vec::new();
            Presenter::new(TabMode::Legacy)
                .run(collection(50), seed, &mut out)
                .unwrap();
            out
        };

        assert_eq!(run(1234), run(1234));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_an_output_error() {
        let err = Presenter::new(TabMode::Legacy)
            .run(collection(1), 0, &mut BrokenPipe)
            .unwrap_err();

        assert!(matches!(err, QuoteError::Output(_)));
        assert_eq!(err.exit_code(), 1);
    }
}
