//! 128-bit unsigned integer primitive
//!
//! This module defines the `Uint128` value type, its constants and
//! constructors, and the total order over it.
//!
//! The representation is a pair of 64-bit halfwords, `high` holding the
//! most significant 64 bits. The pair is compared and combined purely by
//! content; there is no identity beyond the bit pattern.

use std::cmp::Ordering;

/// Fixed-size 128-bit unsigned integer.
///
/// The value represented is `high * 2⁶⁴ + low`. Both halves are full
/// 64-bit magnitudes, so every bit pattern is a valid value and zero is the
/// unique value with both halves zero.
///
/// `Uint128` is `Copy`: every operation takes its operands by value and
/// returns a new value, so there is no aliasing and no shared state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Uint128 {
    pub(crate) high: u64,
    pub(crate) low: u64,
}

impl Uint128 {
    /// The value zero.
    pub const ZERO: Self = Self::new(0, 0);

    /// The value one.
    pub const ONE: Self = Self::new(0, 1);

    /// The maximum representable value (2¹²⁸ − 1).
    pub const MAX: Self = Self::new(u64::MAX, u64::MAX);

    /// The size of the integer in bits.
    pub const BITS: u32 = super::NUM_BITS;

    /// Builds a value from its most and least significant halfwords.
    pub const fn new(high: u64, low: u64) -> Self {
        Self { high, low }
    }

    /// Returns zero.
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Returns the maximum representable value.
    pub const fn max_value() -> Self {
        Self::MAX
    }

    /// The most significant 64 bits.
    pub const fn high(self) -> u64 {
        self.high
    }

    /// The least significant 64 bits.
    pub const fn low(self) -> u64 {
        self.low
    }

    /// Returns `true` if both halfwords are zero.
    pub const fn is_zero(self) -> bool {
        self.high == 0 && self.low == 0
    }

    /// Compares two values as 128-bit magnitudes.
    ///
    /// # Returns
    /// - `-1` if `self < other`
    /// - `0` if `self == other`
    /// - `1` if `self > other`
    ///
    /// The high halfwords decide the order; the low halfwords are only
    /// consulted when the high ones are equal.
    pub const fn compare(self, other: Self) -> i32 {
        if self.high < other.high {
            return -1;
        }
        if self.high > other.high {
            return 1;
        }

        if self.low < other.low {
            -1
        } else if self.low > other.low {
            1
        } else {
            0
        }
    }
}

impl Ord for Uint128 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(*other).cmp(&0)
    }
}

impl PartialOrd for Uint128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
