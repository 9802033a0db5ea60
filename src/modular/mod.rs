//! Modular arithmetic over an arbitrary modulus.
//!
//! This module provides the two operations every other layer is built on:
//!
//! - [`reduce`]
//!   Maps any signed value to its canonical residue in `[0, modulus)`.
//!
//! - [`invert`]
//!   Computes a modular multiplicative inverse with the extended Euclidean
//!   algorithm.
//!
//! Both take the modulus explicitly. The curve code uses them with the
//! field modulus `2²⁵⁵ − 19` for coordinates and with the group order for
//! scalars; the two moduli are never substituted for one another.

mod core;

pub use self::core::{invert, reduce};
