//! Integer conversion utilities for `U512`
//!
//! Widening conversions are infallible; narrowing conversions fail when
//! any discarded bit is set.

mod u256;
mod u64;
mod u8;
