//! Scalars modulo the prime subgroup order.
//!
//! Scalars live in a different ring from point coordinates: they are
//! reduced modulo
//!
//! ```text
//! n = 2²⁵² + 27742317777372353535851937790883648493
//! ```
//!
//! and never modulo the field prime. Keeping them in their own type makes
//! it impossible to hand a coordinate to scalar multiplication, or to
//! reduce a nonce by the wrong modulus.
//!
//! Randomness and digest output come from the caller: [`Scalar::random`]
//! draws from an injected [`EntropySource`], and
//! [`Scalar::from_bytes_mod_order_wide`] accepts a 64-byte digest.

use crate::{
    modular::reduce,
    primitives::{I512, U256, U512},
};

use std::ops::{Add, Mul};

/// The prime order `n` of the subgroup generated by the base point.
pub const GROUP_ORDER: U256 = U256::from_be_words([
    0x1000000000000000,
    0x0000000000000000,
    0x14def9dea2f79cd6,
    0x5812631a5cf5d3ed,
]);

/// A source of cryptographically secure random bytes.
///
/// The crate ships no implementation; callers inject their own CSPRNG.
pub trait EntropySource {
    /// Fills `dest` entirely with random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

/// An integer modulo the group order `n`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Scalar(U256);

impl Scalar {
    pub const ZERO: Self = Scalar(U256::ZERO);
    pub const ONE: Self = Scalar(U256::ONE);

    /// Reduces an arbitrary signed value modulo `n`.
    pub fn reduce(value: I512) -> Self {
        Scalar(reduce(value, GROUP_ORDER))
    }

    /// Reduces an unsigned 256-bit value modulo `n`.
    pub fn from_u256(value: U256) -> Self {
        Self::reduce(I512::from(value))
    }

    /// Interprets 32 little-endian bytes as an integer and reduces it.
    pub fn from_le_bytes(bytes: [u8; 32]) -> Self {
        Self::from_u256(U256::from_le_bytes(bytes))
    }

    /// Interprets 64 little-endian bytes (typically a SHA-512 digest) as an
    /// integer and reduces it modulo `n`.
    pub fn from_bytes_mod_order_wide(bytes: &[u8; 64]) -> Self {
        Self::reduce(I512::from(U512::from_le_bytes(*bytes)))
    }

    /// Draws 64 bytes from `rng` and reduces them modulo `n`.
    ///
    /// Reducing a 512-bit value keeps the bias towards small residues
    /// negligible.
    pub fn random<R: EntropySource + ?Sized>(rng: &mut R) -> Self {
        let mut wide = [0u8; 64];
        rng.fill_bytes(&mut wide);
        Self::from_bytes_mod_order_wide(&wide)
    }

    /// Canonical little-endian encoding.
    pub fn to_le_bytes(&self) -> [u8; 32] {
        self.0.to_le_bytes()
    }

    /// The canonical residue as a multiplier for
    /// [`EdwardsPoint::multiply`](super::EdwardsPoint::multiply).
    pub fn to_u256(self) -> U256 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Self::reduce(I512::from(value))
    }
}

impl Add for Scalar {
    type Output = Scalar;

    fn add(self, rhs: Scalar) -> Scalar {
        Self::reduce(I512::from(self.0) + I512::from(rhs.0))
    }
}

impl Mul for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Scalar) -> Scalar {
        Self::reduce(I512::from(self.0) * I512::from(rhs.0))
    }
}
