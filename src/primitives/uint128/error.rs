//! Errors raised while parsing a `Uint128` from text.

use thiserror::Error;

/// Errors that may occur when parsing a hexadecimal `Uint128`.
///
/// Parsing is the only fallible operation on `Uint128`; arithmetic wraps
/// and never fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseHexError {
    /// The input is longer than the 32 hex digits a 128-bit value can hold.
    #[error("hex string of length {len} exceeds 32 characters")]
    InvalidLength { len: usize },

    /// The input contains a character that is not a hex digit.
    #[error("malformed hex string: {0}")]
    MalformedHex(#[from] hex::FromHexError),
}
