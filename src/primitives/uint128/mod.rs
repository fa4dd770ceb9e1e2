//! 128-bit unsigned integer primitive
//!
//! This module defines the `Uint128` type, a fixed-size 128-bit unsigned
//! integer stored as a pair of 64-bit halfwords.
//!
//! `Uint128` is a low-level primitive rather than a full big-integer
//! abstraction. It provides addition, subtraction, logic, shifts and bit
//! counting with explicit semantics and predictable behavior. Every
//! operation consumes its operands by value and returns a new value.
//!
//! Typical use cases include:
//! - hash outputs and identifiers
//! - wide counters
//! - intermediate values of fixed-width arithmetic

mod arith;
mod bits;
mod conv;
mod core;
mod error;
mod format;
mod hex_string;
mod ops;

/// Fixed-size 128-bit unsigned integer.
///
/// This type is re-exported as the crate's primary integer primitive.
pub use self::core::Uint128;

/// Error returned when a hexadecimal string cannot be parsed.
pub use error::ParseHexError;

/// Number of bits in a `Uint128`.
pub(crate) const NUM_BITS: u32 = 128;

/// Number of bits in one halfword.
pub(crate) const HALF_BITS: u32 = 64;
