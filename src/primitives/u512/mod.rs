//! 512-bit unsigned integer primitive
//!
//! `U512` is the wide intermediate for modular arithmetic: the product of
//! two reduced 256-bit values always fits, and the division routine here
//! brings it back under a 256-bit modulus.
//!
//! The internal representation is big-endian and remains stable across
//! all operations and conversions.

mod conv;
mod core;
mod ops;

/// Fixed-size 512-bit unsigned integer.
pub use self::core::U512;
