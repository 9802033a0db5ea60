//! Modular and group arithmetic for the Edwards25519 curve
//!
//! This crate provides the point-arithmetic engine underneath EdDSA-style
//! signatures: reduction and inversion modulo a large prime, and the group
//! law of the twisted Edwards curve `−x² + y² = 1 + d·x²·y²` over
//! GF(2²⁵⁵ − 19).
//!
//! The focus is on **clarity and auditability**. Every intermediate value is
//! reduced explicitly; nothing relies on fixed-width wraparound.
//!
//! # Module overview
//!
//! - `primitives`  
//!   Fixed-size integers (`U256`, `U512`, `I512`) used as the big-integer
//!   substrate. `I512` carries the negative intermediates that subtraction
//!   and the extended Euclidean algorithm produce.
//!
//! - `modular`  
//!   `reduce` and `invert` over an arbitrary modulus.
//!
//! - `edwards25519`  
//!   Field elements, scalars, curve parameters and points in extended
//!   coordinates: doubling, addition, double-and-add scalar multiplication
//!   and projective equality.
//!
//! - `error`  
//!   Error types returned by inversion and point validation.
//!
//! # Non-goals
//!
//! - Constant-time execution. Scalar multiplication branches on the bits of
//!   the scalar.
//! - Signature encoding, hashing and random number generation. Callers
//!   supply digest output and randomness through [`edwards25519::Scalar`]
//!   constructors and the [`edwards25519::EntropySource`] trait.
//!
//! # Concurrency
//!
//! All operations are pure functions over `Copy` values. The curve
//! parameters are built once and only read afterwards, so the crate can be
//! used from any number of threads without locking.

pub mod edwards25519;
pub mod error;
pub mod modular;
pub mod primitives;
