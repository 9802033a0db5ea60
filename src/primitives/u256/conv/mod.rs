//! Integer conversion utilities
//!
//! Explicit conversions between `U256` and byte arrays or native integers.
//! Narrowing conversions are fallible and never truncate silently.

mod u64;
mod u8;
