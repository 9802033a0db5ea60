//! 512-bit signed integer primitive
//!
//! `I512` pairs a sign with a `U512` magnitude. Modular arithmetic produces
//! negative intermediates in two places: subtractions of reduced values
//! (`Y − X`, `D − B`, ...) and the Bézout coefficients tracked by the
//! extended Euclidean algorithm. Both stay far below 2⁵¹² in magnitude.
//!
//! Division truncates toward zero and the remainder takes the sign of the
//! dividend. Reduction into `[0, m)` is then a single conditional addition
//! of the modulus, done by `modular::reduce`.

mod core;
mod ops;

/// Sign-magnitude 512-bit integer.
pub use self::core::I512;
