//! `std::fmt` rendering for `Uint128`
//!
//! The formatting trait selects the presentation:
//! - `{}` renders the halfword pair in decimal, `(high, low)`
//! - `{:?}` / `{:#?}` render the derived struct notation
//! - `{:x}` / `{:X}` render hex digits, `{:#x}` / `{:#X}` add `0x`
//! - `{:b}` renders binary digits, `{:#b}` adds `0b`
//!
//! Hex and binary forms honor width and zero-fill flags, e.g. `{:#034x}`.
//! They follow the native `u128` conventions: no `0x` prefix unless `#` is
//! given, and no zero-filled 64-digit low half. Earlier versions always
//! prefixed hex with `0x` and always padded the low half in binary.

use super::Uint128;
use std::fmt::{Binary, Display, Formatter, LowerHex, Result, UpperHex};

impl Display for Uint128 {
    /// Formats the value as its halfword pair, `(high, low)`.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({}, {})", self.high, self.low)
    }
}

impl LowerHex for Uint128 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.pad_integral(true, "0x", &self.to_hex_string())
    }
}

impl UpperHex for Uint128 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.pad_integral(true, "0x", &self.to_hex_string().to_ascii_uppercase())
    }
}

impl Binary for Uint128 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let digits = if self.high == 0 {
            format!("{:b}", self.low)
        } else {
            format!("{:b}{:064b}", self.high, self.low)
        };

        f.pad_integral(true, "0b", &digits)
    }
}
