//! ANSI escape sequences used when printing a quote.
use strum::{Display, IntoStaticStr};

/// Foreground colors written around the quote and its author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum AnsiColor {
    /// Bright green, used for the quote.
    #[strum(to_string = "\x1b[32;1m")]
    BrightGreen,
    /// Bright cyan, used for the author.
    #[strum(to_string = "\x1b[36;1m")]
    BrightCyan,
    /// Plain white, written last. Not a full `ESC[0m` reset.
    #[strum(to_string = "\x1b[0;37m")]
    White,
}

impl AnsiColor {
    /// Raw escape sequence.
    pub fn code(self) -> &'static str {
        self.into()
    }
}
