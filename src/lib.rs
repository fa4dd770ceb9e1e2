//! Fixed-width 128-bit unsigned integer arithmetic
//!
//! This crate provides `Uint128`, an unsigned 128-bit integer built from two
//! 64-bit halfwords. It exists for code that needs exact 128-bit unsigned
//! arithmetic (hashes, identifiers, wide counters, intermediate values)
//! without pulling in an arbitrary-precision big-integer library.
//!
//! The focus is on **clarity, predictability, and auditability**: every
//! operation is a pure function over a `Copy` value, and every overflow or
//! underflow is defined as modulo-2¹²⁸ wraparound.
//!
//! # Module overview
//!
//! - `primitives`
//!   The `Uint128` value type and its operations:
//!   - comparison and predicates
//!   - bitwise logic (`&`, `|`, `^`, `!`, and-not)
//!   - shifts across the halfword boundary
//!   - addition with carry and subtraction with borrow
//!   - bit counting (population count, leading and trailing zeros,
//!     bit length) and bit/byte reversal
//!   - hexadecimal parsing and rendering, and `std::fmt` formatting
//!   - conversions to and from native integers and byte arrays
//!
//! # Design goals
//!
//! - No heap allocations in arithmetic
//! - Total, infallible arithmetic; only string parsing can fail
//! - Stable, well-defined semantics
//!
//! Multiplication, division, signed arithmetic, and decimal parsing are
//! deliberately not provided.

pub mod primitives;

pub use primitives::{ParseHexError, Uint128};
