//! Edwards25519 arithmetic.
//!
//! The module is split by mathematical domain:
//!
//! - [`field`]
//!   Field elements modulo `m = 2²⁵⁵ − 19`, the coordinate ring.
//!
//! - [`scalar`]
//!   Scalars modulo the prime group order `n`, the multiplier ring, and the
//!   [`EntropySource`] seam through which callers inject randomness.
//!
//! - [`params`]
//!   The immutable curve constants `m`, `a`, `d`, `G` and `n`.
//!
//! - [`point`]
//!   Points in extended coordinates with doubling, addition, scalar
//!   multiplication, equality and on-curve validation.
//!
//! Coordinates and scalars are separate types with separate moduli.
//! Nothing here signs, hashes or encodes; those steps belong to callers
//! that supply digests and random bytes as plain inputs.

pub mod field;
pub mod params;
pub mod point;
pub mod scalar;

pub use field::{FIELD_MODULUS, FieldElement};
pub use params::CurveParameters;
pub use point::EdwardsPoint;
pub use scalar::{EntropySource, GROUP_ORDER, Scalar};
