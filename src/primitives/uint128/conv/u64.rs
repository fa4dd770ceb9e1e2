//! Conversions between `Uint128` and 64-bit halfwords
//!
//! Halfword pairs and arrays are ordered `(high, low)` / `[high, low]`,
//! most significant first.

use crate::primitives::Uint128;

/// Converts a `u64` into the low halfword of a `Uint128`.
impl From<u64> for Uint128 {
    fn from(value: u64) -> Self {
        Uint128::new(0, value)
    }
}

/// Attempts to convert a `Uint128` into a `u64`.
///
/// The conversion succeeds only if the high halfword is zero.
impl TryFrom<Uint128> for u64 {
    type Error = ();

    fn try_from(value: Uint128) -> Result<Self, Self::Error> {
        if value.high != 0 {
            return Err(());
        }

        Ok(value.low)
    }
}

/// Builds a `Uint128` from a `(high, low)` pair.
impl From<(u64, u64)> for Uint128 {
    fn from((high, low): (u64, u64)) -> Self {
        Uint128::new(high, low)
    }
}

/// Splits a `Uint128` into a `(high, low)` pair.
impl From<Uint128> for (u64, u64) {
    fn from(value: Uint128) -> Self {
        (value.high, value.low)
    }
}

/// Builds a `Uint128` from `[high, low]`.
impl From<[u64; 2]> for Uint128 {
    fn from([high, low]: [u64; 2]) -> Self {
        Uint128::new(high, low)
    }
}

/// Splits a `Uint128` into `[high, low]`.
impl From<Uint128> for [u64; 2] {
    fn from(value: Uint128) -> Self {
        [value.high, value.low]
    }
}
