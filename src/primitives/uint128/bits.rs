//! Bit-counting and reversal primitives for `Uint128`
//!
//! Each primitive is derived from the native 64-bit operation applied to
//! the halfwords, combined so that the result describes the full 128-bit
//! value. Counts are returned as `u32`, like the native integer methods.

use super::{HALF_BITS, NUM_BITS, Uint128};

impl Uint128 {
    /// Minimum number of bits needed to represent the value.
    ///
    /// Returns 0 for zero.
    pub const fn bit_len(self) -> u32 {
        if self.high == 0 {
            return HALF_BITS - self.low.leading_zeros();
        }

        HALF_BITS + (HALF_BITS - self.high.leading_zeros())
    }

    /// Number of leading zero bits; 128 for zero.
    pub const fn leading_zeros(self) -> u32 {
        NUM_BITS - self.bit_len()
    }

    /// Number of trailing zero bits; 128 for zero.
    pub const fn trailing_zeros(self) -> u32 {
        if self.low == 0 {
            return HALF_BITS + self.high.trailing_zeros();
        }

        self.low.trailing_zeros()
    }

    /// Number of one bits (population count), in `0..=128`.
    pub const fn count_ones(self) -> u32 {
        self.high.count_ones() + self.low.count_ones()
    }

    /// Number of zero bits, in `0..=128`.
    pub const fn count_zeros(self) -> u32 {
        NUM_BITS - self.count_ones()
    }

    /// Reverses the order of all 128 bits.
    ///
    /// Each halfword is reversed and the halves are swapped, so the most
    /// significant bit of `self` becomes the least significant bit of the
    /// result.
    pub const fn reverse_bits(self) -> Self {
        Self::new(self.low.reverse_bits(), self.high.reverse_bits())
    }

    /// Reverses the order of all 16 bytes.
    pub const fn reverse_bytes(self) -> Self {
        Self::new(self.low.swap_bytes(), self.high.swap_bytes())
    }

    /// Alias of [`Uint128::reverse_bytes`] using the native integer name.
    pub const fn swap_bytes(self) -> Self {
        self.reverse_bytes()
    }
}
