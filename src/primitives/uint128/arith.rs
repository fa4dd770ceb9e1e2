//! Addition and subtraction for `Uint128`
//!
//! Additions chain a carry bit from the low halfword into the high one;
//! subtractions chain a borrow bit the same way. Every operation here is
//! total: overflow and underflow wrap modulo 2¹²⁸ and are never reported as
//! errors, except through the explicit carry/borrow outputs and the
//! `checked_*` variants.

use super::Uint128;

impl Uint128 {
    /// Returns `self + rhs + carry` and the carry out of bit 127.
    ///
    /// The low halfwords are added first; their carry feeds the addition
    /// of the high halfwords. At most one of the two high-half additions
    /// can overflow, so the carry out is a single bit.
    #[cfg(not(feature = "speed"))]
    pub const fn add_with_carry(self, rhs: Self, carry: bool) -> (Self, bool) {
        let (low, c0) = self.low.overflowing_add(rhs.low);
        let (low, c1) = low.overflowing_add(carry as u64);

        let (high, c2) = self.high.overflowing_add(rhs.high);
        let (high, c3) = high.overflowing_add((c0 | c1) as u64);

        (Self::new(high, low), c2 | c3)
    }

    /// Returns `self + rhs + carry` and the carry out of bit 127
    /// (native 128-bit fast path).
    #[cfg(feature = "speed")]
    pub const fn add_with_carry(self, rhs: Self, carry: bool) -> (Self, bool) {
        let (sum, c0) = self.to_u128().overflowing_add(rhs.to_u128());
        let (sum, c1) = sum.overflowing_add(carry as u128);

        (Self::from_u128(sum), c0 | c1)
    }

    /// Returns `self - rhs - borrow` and the borrow out of bit 127.
    ///
    /// A borrow taken by the low halfword is subtracted once more from the
    /// high halfword.
    #[cfg(not(feature = "speed"))]
    pub const fn sub_with_borrow(self, rhs: Self, borrow: bool) -> (Self, bool) {
        let (low, b0) = self.low.overflowing_sub(rhs.low);
        let (low, b1) = low.overflowing_sub(borrow as u64);

        let (high, b2) = self.high.overflowing_sub(rhs.high);
        let (high, b3) = high.overflowing_sub((b0 | b1) as u64);

        (Self::new(high, low), b2 | b3)
    }

    /// Returns `self - rhs - borrow` and the borrow out of bit 127
    /// (native 128-bit fast path).
    #[cfg(feature = "speed")]
    pub const fn sub_with_borrow(self, rhs: Self, borrow: bool) -> (Self, bool) {
        let (diff, b0) = self.to_u128().overflowing_sub(rhs.to_u128());
        let (diff, b1) = diff.overflowing_sub(borrow as u128);

        (Self::from_u128(diff), b0 | b1)
    }

    /// Addition modulo 2¹²⁸.
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        self.add_with_carry(rhs, false).0
    }

    /// Subtraction modulo 2¹²⁸.
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        self.sub_with_borrow(rhs, false).0
    }

    /// Adds one, wrapping `MAX` to zero.
    pub const fn increment(self) -> Self {
        self.wrapping_add(Self::ONE)
    }

    /// Subtracts one, wrapping zero to `MAX`.
    pub const fn decrement(self) -> Self {
        self.wrapping_sub(Self::ONE)
    }

    /// Addition that returns `None` instead of wrapping.
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.add_with_carry(rhs, false) {
            (sum, false) => Some(sum),
            (_, true) => None,
        }
    }

    /// Subtraction that returns `None` instead of wrapping.
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.sub_with_borrow(rhs, false) {
            (diff, false) => Some(diff),
            (_, true) => None,
        }
    }
}
