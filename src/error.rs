//! Error types.
//!
//! Arithmetic failures are deterministic functions of their inputs, so
//! every error is returned to the caller as-is; nothing here is retried.

/// Failures of modular inversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    /// The value to invert was zero, or the modulus was zero.
    #[error("modular inverse: value and modulus must be non-zero")]
    InvalidInverseInput,

    /// The value shares a factor with the modulus.
    #[error("modular inverse: value is not coprime to the modulus")]
    NoInverseExists,
}

/// Failures of curve point construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PointError {
    /// The coordinates do not describe a point of Edwards25519.
    #[error("point is not on the curve")]
    InvalidPoint,
}
