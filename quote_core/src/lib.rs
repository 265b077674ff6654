//!
//! Core types and algorithms behind the `quote_print` binary.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` and its exit-code mapping.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `record` — quote/author records, the collection and the line-pair parser.
//! - `loader` — opening, reading and releasing a quote file.
//! - `wrap` — the 80-column line wrapper.
//! - `style` — ANSI color codes used when printing a quote.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod record;
pub mod loader;
pub mod wrap;
pub mod style;

pub use error::QuoteError;
pub use result::Result;
pub use record::{QuoteCollection, QuoteParser, QuoteRecord};
pub use loader::QuoteLoader;
pub use wrap::{TabMode, wrap80};
