//! 80-column soft wrapping for quote and author text.
//!
//! Wrapping is pure substitution: a space or tab already present in the text is
//! replaced by `\n`, nothing is inserted. Text is handled as raw bytes and
//! positions are byte offsets, so any encoding passes through untouched.
//!
//! Two modes exist:
//! - `TabMode::Legacy` reproduces the historical output byte for byte. Each tab
//!   shifts the newline anchor forward by 7 instead of modelling a tab stop, and
//!   a word longer than 80 characters makes the substitution land on whatever
//!   whitespace position was recorded last, possibly before the current line.
//! - `TabMode::TabStops` counts display columns with 8-column tab stops and
//!   only breaks at whitespace on the current line.

/// Column after which a line is broken.
pub const WRAP_COLUMN: usize = 80;
/// Amount the legacy mode adds to the newline anchor for every tab.
pub const LEGACY_TAB_BIAS: usize = 7;
/// Tab stop width used by `TabMode::TabStops`.
pub const TAB_STOP: usize = 8;

/// How tabs (and overlong words) are treated while wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TabMode {
    /// Historical behaviour, kept as the default.
    #[default]
    Legacy,
    /// Real tab stops every `TAB_STOP` columns.
    TabStops,
}

/// Wraps `text` at 80 columns using the legacy rules.
pub fn wrap80(text: &[u8]) -> Vec<u8> {
    wrap(text, TabMode::Legacy)
}

/// Wraps a copy of `text` at 80 columns using `mode`.
pub fn wrap(text: &[u8], mode: TabMode) -> Vec<u8> {
    let mut wrapped = text.to_vec();
    wrap_in_place(&mut wrapped, mode);
    wrapped
}

/// Wraps `text` in place. Its length never changes.
pub fn wrap_in_place(text: &mut [u8], mode: TabMode) {
    match mode {
        TabMode::Legacy => wrap_legacy(text),
        TabMode::TabStops => wrap_tab_stops(text),
    }
}

fn wrap_legacy(text: &mut [u8]) {
    let limit = WRAP_COLUMN as isize;
    let mut last_newline: isize = 0;
    let mut last_whitespace: usize = 0;

    for pos in 0..text.len() {
        match text[pos] {
            b' ' => last_whitespace = pos,
            b'\t' => {
                last_whitespace = pos;
                last_newline += LEGACY_TAB_BIAS as isize;
            }
            b'\n' => last_newline = pos as isize,
            _ => {}
        }

        if pos as isize - last_newline > limit {
            text[last_whitespace] = b'\n';
            last_newline = last_whitespace as isize;
        }
    }
}

fn wrap_tab_stops(text: &mut [u8]) {
    let mut last_whitespace: Option<usize> = None;
    let mut column = 0;

    for pos in 0..text.len() {
        match text[pos] {
            b'\n' => {
                last_whitespace = None;
                column = 0;
                continue;
            }
            b' ' | b'\t' => last_whitespace = Some(pos),
            _ => {}
        }
        column = advance(column, text[pos]);

        if column > WRAP_COLUMN {
            // no whitespace on this line: leave the long word alone
            if let Some(ws) = last_whitespace.take() {
                text[ws] = b'\n';
                column = text[ws + 1..pos + 1].iter().fold(0, |col, &b| advance(col, b));
            }
        }
    }
}

fn advance(column: usize, byte: u8) -> usize {
    match byte {
        b'\t' => (column / TAB_STOP + 1) * TAB_STOP,
        _ => column + 1,
    }
}
