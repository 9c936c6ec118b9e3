//! Line parser for the `.env` format.
//!
//! Responsibilities:
//! - Classify a single line as a comment, a malformed line, or an entry.
//! - Split entries at the first `=` and trim key and value.
//!
//! Does NOT handle:
//! - Prefixing keys or writing to a namespace (see `store::loader`).
//! - Quotes, `export`, escapes, or variable expansion. Values are taken
//!   literally after trimming.
//!
//! Invariants:
//! - Only a `#` in the very first byte marks a comment.
//! - Lines without `=` are reported as `Malformed`, never as errors.

use crate::constants::{COMMENT_MARKER, KEY_VALUE_SEPARATOR};

/// Classification of one line of a `.env` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedLine<'a> {
    /// First byte is `#`.
    Comment,
    /// No `=` anywhere on the line, including blank lines.
    Malformed,
    /// A trimmed key and value. The key may be empty.
    Entry { key: &'a str, value: &'a str },
}

/// Parse one line (without its line terminator, though a trailing `\r` or
/// `\n` is trimmed away with the rest of the whitespace).
pub fn parse_line(line: &str) -> ParsedLine<'_> {
    if line.starts_with(COMMENT_MARKER) {
        return ParsedLine::Comment;
    }
    match line.split_once(KEY_VALUE_SEPARATOR) {
        Some((key, value)) => ParsedLine::Entry {
            key: key.trim(),
            value: value.trim(),
        },
        None => ParsedLine::Malformed,
    }
}
