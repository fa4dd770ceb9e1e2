//! Hexadecimal text conversion for `Uint128`
//!
//! Parsing accepts up to 32 hex digits, upper or lower case, without a
//! `0x` prefix. Shorter inputs are left-padded with `'0'` before decoding,
//! so `"ff"` parses to 255 and the empty string parses to zero. Earlier
//! versions padded with spaces, which rejected every input shorter than 32
//! digits; zero-padding is a deliberate change from that behavior.
//!
//! Rendering produces lowercase digits with no leading zeros.

use super::{ParseHexError, Uint128};
use std::str::FromStr;

/// Number of hex digits in a 128-bit value.
const HEX_DIGITS: usize = 32;

impl Uint128 {
    /// Parses a big-endian hexadecimal string of at most 32 digits.
    ///
    /// # Errors
    ///
    /// - [`ParseHexError::InvalidLength`] if `s` is longer than 32 bytes.
    /// - [`ParseHexError::MalformedHex`] if `s` contains a non-hex character.
    pub fn parse_hex(s: &str) -> Result<Self, ParseHexError> {
        if s.len() > HEX_DIGITS {
            return Err(ParseHexError::InvalidLength { len: s.len() });
        }

        let mut padded = "0".repeat(HEX_DIGITS - s.len());
        padded.push_str(s);

        let mut bytes = [0u8; 16];
        hex::decode_to_slice(&padded, &mut bytes)?;

        Ok(Self::from_be_bytes(bytes))
    }

    /// Renders the value as lowercase hex without leading zeros.
    ///
    /// When the high halfword is non-zero the low halfword is zero-filled
    /// to 16 digits.
    pub fn to_hex_string(self) -> String {
        if self.high == 0 {
            return format!("{:x}", self.low);
        }

        format!("{:x}{:016x}", self.high, self.low)
    }
}

/// Parses a hexadecimal string, see [`Uint128::parse_hex`].
impl FromStr for Uint128 {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}
