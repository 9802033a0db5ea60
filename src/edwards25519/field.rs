//! Field elements of GF(2²⁵⁵ − 19).
//!
//! A `FieldElement` always holds its canonical residue in `[0, m)`. Every
//! operator widens both operands into `I512`, computes the exact result,
//! and reduces it with [`modular::reduce`](crate::modular::reduce) before
//! returning. No operation depends on fixed-width wraparound.

use crate::{
    error::ArithmeticError,
    modular::{invert, reduce},
    primitives::{I512, U256},
};

use std::{
    fmt::{Display, Formatter, Result},
    ops::{Add, Mul, Neg, Sub},
};

/// The field modulus `m = 2²⁵⁵ − 19`.
pub const FIELD_MODULUS: U256 = U256::from_be_words([
    0x7fffffffffffffff,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0xffffffffffffffed,
]);

/// An element of the prime field underlying Edwards25519.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldElement(U256);

impl FieldElement {
    /// The additive identity.
    pub const ZERO: Self = FieldElement(U256::ZERO);

    /// The multiplicative identity.
    pub const ONE: Self = FieldElement(U256::ONE);

    /// Reduces an arbitrary signed value modulo `m`.
    pub fn reduce(value: I512) -> Self {
        FieldElement(reduce(value, FIELD_MODULUS))
    }

    /// Reduces an unsigned 256-bit value modulo `m`.
    pub fn from_u256(value: U256) -> Self {
        Self::reduce(I512::from(value))
    }

    /// Returns the canonical residue.
    pub fn to_u256(self) -> U256 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn square(self) -> Self {
        self * self
    }

    /// Multiplicative inverse modulo `m`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::InvalidInverseInput`] for zero.
    pub fn invert(self) -> std::result::Result<Self, ArithmeticError> {
        invert(I512::from(self.0), FIELD_MODULUS).map(FieldElement)
    }

    fn wide(self) -> I512 {
        I512::from(self.0)
    }
}

impl From<i64> for FieldElement {
    fn from(value: i64) -> Self {
        Self::reduce(I512::from(value))
    }
}

impl From<u64> for FieldElement {
    fn from(value: u64) -> Self {
        Self::reduce(I512::from(value))
    }
}

impl Add for FieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::reduce(self.wide() + rhs.wide())
    }
}

impl Sub for FieldElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::reduce(self.wide() - rhs.wide())
    }
}

impl Mul for FieldElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::reduce(self.wide() * rhs.wide())
    }
}

impl Neg for FieldElement {
    type Output = Self;

    fn neg(self) -> Self {
        Self::reduce(-self.wide())
    }
}

impl Display for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.0)
    }
}
