//! Conversions between `Uint128` and byte representations
//!
//! The 16-byte array form is big-endian: the first 8 bytes are the high
//! halfword. Little-endian helpers are provided for protocols that need
//! them.

use crate::primitives::Uint128;

impl Uint128 {
    /// Builds a value from 16 big-endian bytes.
    pub const fn from_be_bytes(bytes: [u8; 16]) -> Self {
        Self::from_u128(u128::from_be_bytes(bytes))
    }

    /// Returns the value as 16 big-endian bytes.
    pub const fn to_be_bytes(self) -> [u8; 16] {
        self.to_u128().to_be_bytes()
    }

    /// Builds a value from 16 little-endian bytes.
    pub const fn from_le_bytes(bytes: [u8; 16]) -> Self {
        Self::from_u128(u128::from_le_bytes(bytes))
    }

    /// Returns the value as 16 little-endian bytes.
    pub const fn to_le_bytes(self) -> [u8; 16] {
        self.to_u128().to_le_bytes()
    }
}

/// Converts a `Uint128` into a 16-byte big-endian array.
impl From<Uint128> for [u8; 16] {
    fn from(value: Uint128) -> Self {
        value.to_be_bytes()
    }
}

/// Converts a 16-byte big-endian array into a `Uint128`.
impl From<[u8; 16]> for Uint128 {
    fn from(value: [u8; 16]) -> Self {
        Uint128::from_be_bytes(value)
    }
}

/// Converts a `u8` into the least significant byte of a `Uint128`.
impl From<u8> for Uint128 {
    fn from(value: u8) -> Self {
        Uint128::new(0, value as u64)
    }
}

/// Attempts to convert a `Uint128` into a `u8`.
///
/// The conversion succeeds only if the upper 120 bits of the value are zero.
impl TryFrom<Uint128> for u8 {
    type Error = ();

    fn try_from(value: Uint128) -> Result<Self, Self::Error> {
        if value.high != 0 {
            return Err(());
        }

        u8::try_from(value.low).map_err(|_| ())
    }
}
