//! 256-bit unsigned integer primitive
//!
//! `U256` is the storage type for every reduced value in the crate: field
//! elements modulo `2²⁵⁵ − 19`, scalars modulo the group order, and the
//! moduli themselves.
//!
//! It carries no arithmetic of its own. Products and sums are computed in
//! the wider `U512` / `I512` types and brought back into range by an
//! explicit reduction, so a `U256` never relies on wraparound.

mod conv;
mod core;

/// Fixed-size 256-bit unsigned integer.
pub use self::core::U256;
