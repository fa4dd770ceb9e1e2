//! Conversions between `Uint128` and the native `u128`
//!
//! Both directions are lossless. The native form is what the `speed`
//! feature routes arithmetic through, and what the tests use as a
//! reference.

use crate::primitives::Uint128;

impl Uint128 {
    /// Builds a value from a native `u128`.
    pub const fn from_u128(value: u128) -> Self {
        Self::new((value >> 64) as u64, value as u64)
    }

    /// Returns the value as a native `u128`.
    pub const fn to_u128(self) -> u128 {
        ((self.high as u128) << 64) | self.low as u128
    }
}

impl From<u128> for Uint128 {
    fn from(value: u128) -> Self {
        Uint128::from_u128(value)
    }
}

impl From<Uint128> for u128 {
    fn from(value: Uint128) -> Self {
        value.to_u128()
    }
}
