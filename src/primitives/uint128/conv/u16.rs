//! Conversions between `Uint128` and `u16`.

use crate::primitives::Uint128;

/// Converts a `u16` into the low halfword of a `Uint128`.
impl From<u16> for Uint128 {
    fn from(value: u16) -> Self {
        Uint128::new(0, value as u64)
    }
}

/// Attempts to convert a `Uint128` into a `u16`.
///
/// The conversion succeeds only if the upper 112 bits of the value are zero.
impl TryFrom<Uint128> for u16 {
    type Error = ();

    fn try_from(value: Uint128) -> Result<Self, Self::Error> {
        if value.high != 0 {
            return Err(());
        }

        u16::try_from(value.low).map_err(|_| ())
    }
}
