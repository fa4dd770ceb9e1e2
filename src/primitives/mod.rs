//! Primitive types
//!
//! This module defines the fixed-size integer primitive exposed by the
//! crate.
//!
//! Primitives are simple, fixed-size building blocks that provide
//! well-defined semantics and predictable behavior. They are intentionally
//! minimal and do not attempt to replicate full standard library
//! abstractions or full-featured big-integer libraries.
//!
//! Current primitives include:
//! - `Uint128`: a 128-bit unsigned integer stored as two 64-bit halfwords

mod uint128;

/// Fixed-size unsigned integer primitive and its parse error.
pub use uint128::{ParseHexError, Uint128};
