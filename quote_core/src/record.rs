//! Quote/author records and the line-pair parser.
//!
//! A quote file is plain text where every quote line is immediately followed by
//! the line naming its author. Lines are kept verbatim as bytes, trailing
//! newline included, because the wrapper treats that newline as a wrap anchor.
//! No encoding is assumed.
use std::io::BufRead;

use log::debug;

use crate::error::QuoteError;
use crate::wrap::{self, TabMode};

/// Trait providing line-pair parsing for quote files.
pub trait QuoteParser: Sized {
    /// Parses records from a buffered reader.
    ///
    /// Lines are consumed two at a time: quote first, then author. Reaching the
    /// end of input where a quote line is expected ends parsing; reaching it
    /// where an author line is expected is `QuoteError::OddLineCount`.
    fn parse_from_reader<R: BufRead>(reader: R) -> Result<Vec<Self>, QuoteError>;
}

/// A single quote together with its author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRecord {
    /// Quote bytes as read, including the trailing newline if there was one.
    pub quote: Vec<u8>,
    /// Author bytes as read, including the trailing newline if there was one.
    pub author: Vec<u8>,
}

impl QuoteRecord {
    /// Creates a record from raw quote and author lines.
    pub fn new(quote: impl Into<Vec<u8>>, author: impl Into<Vec<u8>>) -> Self {
        Self {
            quote: quote.into(),
            author: author.into(),
        }
    }

    /// Rewraps quote and author independently to the 80-column limit.
    pub fn wrap(&mut self, mode: TabMode) {
        wrap::wrap_in_place(&mut self.quote, mode);
        wrap::wrap_in_place(&mut self.author, mode);
    }
}

impl QuoteParser for QuoteRecord {
    fn parse_from_reader<R: BufRead>(mut reader: R) -> Result<Vec<Self>, QuoteError> {
        let mut records: Vec<QuoteRecord> = Vec::new();
        let mut line_number = 0;

        loop {
            records.try_reserve(1)?;

            let Some(quote) = read_raw_line(&mut reader)? else {
                break;
            };
            line_number += 1;

            let Some(author) = read_raw_line(&mut reader)? else {
                return Err(QuoteError::OddLineCount { line: line_number });
            };
            line_number += 1;

            records.push(QuoteRecord { quote, author });
        }

        debug!("Parsed {} quote records from {} lines", records.len(), line_number);
        Ok(records)
    }
}

/// Reads one line, newline included. Returns `None` at end of input.
fn read_raw_line<R: BufRead>(reader: &mut R) -> Result<Option<Vec<u8>>, QuoteError> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}

/// Ordered, indexable set of records in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteCollection {
    records: Vec<QuoteRecord>,
}

impl QuoteCollection {
    /// Number of quote/author pairs.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` when the file held no pair at all.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index`, counted from the first pair in the file.
    pub fn get(&self, index: usize) -> Option<&QuoteRecord> {
        self.records.get(index)
    }

    /// Iterates over the records in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, QuoteRecord> {
        self.records.iter()
    }

    /// Moves the record at `index` out of the collection.
    pub fn take(mut self, index: usize) -> Option<QuoteRecord> {
        if index < self.records.len() {
            Some(self.records.swap_remove(index))
        } else {
            None
        }
    }
}

impl From<Vec<QuoteRecord>> for QuoteCollection {
    fn from(records: Vec<QuoteRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<QuoteRecord> for QuoteCollection {
    fn from_iter<I: IntoIterator<Item = QuoteRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
