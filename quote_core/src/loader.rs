//! Loading a quote file from disk.
//!
//! The file handle lives only inside `QuoteLoader::load`: it is opened, read to
//! the end and released before the collection is handed back.
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use log::debug;

use crate::error::QuoteError;
use crate::record::{QuoteCollection, QuoteParser, QuoteRecord};
use crate::result::Result;

/// Reads quote files into a `QuoteCollection`.
pub struct QuoteLoader;

impl QuoteLoader {
    /// Opens `path`, parses every quote/author pair and releases the file.
    ///
    /// Errors:
    /// - `FileOpen` when the path cannot be opened or is a directory.
    /// - `OddLineCount` when the last quote has no author line.
    /// - `Read` when reading from the open file fails.
    /// - `OutOfMemory` when storage for a record cannot be reserved.
    /// - `FileClose` when the handle is no longer valid at release time.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<QuoteCollection> {
        let path = path.as_ref();
        let file = Self::open(path)?;
        debug!("Opened quote file {}", path.display());

        let mut reader = BufReader::new(file);
        let records = QuoteRecord::parse_from_reader(&mut reader)?;

        Self::release(reader.into_inner()).map_err(|source| QuoteError::FileClose {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(records.into())
    }

    fn open(path: &Path) -> Result<File> {
        let open_error = |source| QuoteError::FileOpen {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(open_error)?;
        if file.metadata().map_err(open_error)?.is_dir() {
            return Err(open_error(io::Error::new(
                io::ErrorKind::IsADirectory,
                "is a directory",
            )));
        }
        Ok(file)
    }

    /// Checks the handle with `File::metadata` and then drops it.
    ///
    /// This does not observe the result of the OS close call: `File` discards
    /// it on drop. Only a handle that has already gone bad (`EBADF`, a stale
    /// network handle) is reported here.
    fn release(file: File) -> io::Result<()> {
        file.metadata()?;
        drop(file);
        Ok(())
    }
}
