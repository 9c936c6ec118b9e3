//! Centralized constants for the envstore crate.
//!
//! This module holds the fixed tokens of the `.env` line format and the
//! key-resolution rules so that parser, store, and tests agree on them.

// =============================================================================
// File Format
// =============================================================================

/// File name joined onto the load path in directory mode.
pub const DEFAULT_FILE_NAME: &str = ".env";

/// A line whose first byte is this character is a comment.
pub const COMMENT_MARKER: char = '#';

/// Separates key from value. Only the first occurrence splits a line.
pub const KEY_VALUE_SEPARATOR: char = '=';

// =============================================================================
// Key Resolution
// =============================================================================

/// Joins the store prefix and a caller key (`APP` + `PORT` -> `APP_PORT`).
pub const PREFIX_SEPARATOR: char = '_';

// =============================================================================
// Typed Accessors
// =============================================================================

/// Default fed to `get_with_default` by `get_bool`.
pub const BOOL_FALLBACK: &str = "false";

/// Compared case-insensitively by `get_bool`.
pub const BOOL_TRUE_WORD: &str = "true";

/// Compared exactly by `get_bool`.
pub const BOOL_TRUE_DIGIT: &str = "1";

/// Returned by `get_int` when the value is absent or malformed.
pub const INT_FALLBACK: i64 = 0;
