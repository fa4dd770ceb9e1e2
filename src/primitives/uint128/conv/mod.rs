//! Integer conversion utilities
//!
//! This module groups explicit conversion implementations between
//! `Uint128` and native integer types, halfword pairs and byte arrays.
//!
//! Each submodule handles conversions for one integer width, following
//! these principles:
//! - widening conversions are infallible `From` impls
//! - narrowing conversions are `TryFrom` and fail when bits would be lost
//! - byte arrays are big-endian unless the method name says otherwise

mod u128;
mod u16;
mod u32;
mod u64;
mod u8;
