//! Bitwise, shift and operator implementations for `Uint128`
//!
//! Logic operations act on each halfword independently. Shifts move bits
//! across the halfword boundary. The operator traits delegate to the
//! inherent methods and always wrap; unlike native integers they never
//! panic on overflow or on a shift amount of 128 or more.

use super::{HALF_BITS, NUM_BITS, Uint128};
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl,
    ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

impl Uint128 {
    /// Bitwise AND.
    pub const fn and(self, rhs: Self) -> Self {
        Self::new(self.high & rhs.high, self.low & rhs.low)
    }

    /// Bitwise AND NOT: the bits of `self` that are clear in `rhs`.
    pub const fn and_not(self, rhs: Self) -> Self {
        Self::new(self.high & !rhs.high, self.low & !rhs.low)
    }

    /// Bitwise OR.
    pub const fn or(self, rhs: Self) -> Self {
        Self::new(self.high | rhs.high, self.low | rhs.low)
    }

    /// Bitwise XOR.
    pub const fn xor(self, rhs: Self) -> Self {
        Self::new(self.high ^ rhs.high, self.low ^ rhs.low)
    }

    /// Bitwise complement.
    pub const fn not(self) -> Self {
        Self::new(!self.high, !self.low)
    }

    /// Logical left shift by `bits`.
    ///
    /// Shifts of 128 bits or more yield zero. A shift of zero returns the
    /// value unchanged.
    pub const fn shift_left(self, bits: u32) -> Self {
        if bits >= NUM_BITS {
            return Self::ZERO;
        }
        if bits >= HALF_BITS {
            return Self::new(self.low << (bits - HALF_BITS), 0);
        }
        // `low >> 64` would overflow the native shift.
        if bits == 0 {
            return self;
        }

        Self::new(
            (self.high << bits) | (self.low >> (HALF_BITS - bits)),
            self.low << bits,
        )
    }

    /// Logical right shift by `bits`.
    ///
    /// Shifts of 128 bits or more yield zero. A shift of zero returns the
    /// value unchanged.
    pub const fn shift_right(self, bits: u32) -> Self {
        if bits >= NUM_BITS {
            return Self::ZERO;
        }
        if bits >= HALF_BITS {
            return Self::new(0, self.high >> (bits - HALF_BITS));
        }
        if bits == 0 {
            return self;
        }

        Self::new(
            self.high >> bits,
            (self.low >> bits) | (self.high << (HALF_BITS - bits)),
        )
    }
}

/// Bitwise AND between two 128-bit values.
impl BitAnd for Uint128 {
    type Output = Uint128;

    fn bitand(self, rhs: Uint128) -> Self::Output {
        self.and(rhs)
    }
}

impl BitAndAssign for Uint128 {
    fn bitand_assign(&mut self, rhs: Uint128) {
        *self = self.and(rhs);
    }
}

/// Bitwise OR between two 128-bit values.
impl BitOr for Uint128 {
    type Output = Uint128;

    fn bitor(self, rhs: Uint128) -> Self::Output {
        self.or(rhs)
    }
}

impl BitOrAssign for Uint128 {
    fn bitor_assign(&mut self, rhs: Uint128) {
        *self = self.or(rhs);
    }
}

/// Bitwise XOR between two 128-bit values.
impl BitXor for Uint128 {
    type Output = Uint128;

    fn bitxor(self, rhs: Uint128) -> Self::Output {
        self.xor(rhs)
    }
}

impl BitXorAssign for Uint128 {
    fn bitxor_assign(&mut self, rhs: Uint128) {
        *self = self.xor(rhs);
    }
}

/// Bitwise complement.
impl Not for Uint128 {
    type Output = Uint128;

    fn not(self) -> Self::Output {
        Uint128::not(self)
    }
}

/// Logical left shift (`<<`).
///
/// Shifts greater than or equal to 128 bits yield zero.
impl Shl<u32> for Uint128 {
    type Output = Uint128;

    fn shl(self, rhs: u32) -> Self::Output {
        self.shift_left(rhs)
    }
}

impl ShlAssign<u32> for Uint128 {
    fn shl_assign(&mut self, rhs: u32) {
        *self = self.shift_left(rhs);
    }
}

/// Logical right shift (`>>`).
///
/// Shifts greater than or equal to 128 bits yield zero.
impl Shr<u32> for Uint128 {
    type Output = Uint128;

    fn shr(self, rhs: u32) -> Self::Output {
        self.shift_right(rhs)
    }
}

impl ShrAssign<u32> for Uint128 {
    fn shr_assign(&mut self, rhs: u32) {
        *self = self.shift_right(rhs);
    }
}

/// Addition modulo 2¹²⁸.
impl Add for Uint128 {
    type Output = Uint128;

    fn add(self, rhs: Uint128) -> Self::Output {
        self.wrapping_add(rhs)
    }
}

impl AddAssign for Uint128 {
    fn add_assign(&mut self, rhs: Uint128) {
        *self = self.wrapping_add(rhs);
    }
}

/// Subtraction modulo 2¹²⁸.
impl Sub for Uint128 {
    type Output = Uint128;

    fn sub(self, rhs: Uint128) -> Self::Output {
        self.wrapping_sub(rhs)
    }
}

impl SubAssign for Uint128 {
    fn sub_assign(&mut self, rhs: Uint128) {
        *self = self.wrapping_sub(rhs);
    }
}
