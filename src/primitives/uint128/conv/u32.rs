//! Conversions between `Uint128` and `u32`.

use crate::primitives::Uint128;

/// Converts a `u32` into the low halfword of a `Uint128`.
impl From<u32> for Uint128 {
    fn from(value: u32) -> Self {
        Uint128::new(0, value as u64)
    }
}

/// Attempts to convert a `Uint128` into a `u32`.
///
/// The conversion succeeds only if the upper 96 bits of the value are zero.
impl TryFrom<Uint128> for u32 {
    type Error = ();

    fn try_from(value: Uint128) -> Result<Self, Self::Error> {
        if value.high != 0 {
            return Err(());
        }

        u32::try_from(value.low).map_err(|_| ())
    }
}
