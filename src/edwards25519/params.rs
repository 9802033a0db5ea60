//! Edwards25519 curve parameters.
//!
//! The curve is the twisted Edwards curve
//!
//! ```text
//! a·x² + y² = 1 + d·x²·y²   over GF(m)
//! ```
//!
//! with `a = −1` and `d = −121665 / 121666`. All parameters are gathered in
//! a single immutable [`CurveParameters`] value, built on first use and
//! shared by `&'static` reference for the rest of the process.

use super::{
    field::{FIELD_MODULUS, FieldElement},
    point::EdwardsPoint,
    scalar::GROUP_ORDER,
};
use crate::primitives::U256;

use log::trace;
use std::sync::OnceLock;

/// `d = −121665 · 121666⁻¹ mod m`.
const D: U256 = U256::from_be_words([
    0x52036cee2b6ffe73,
    0x8cc740797779e898,
    0x00700a4d4141d8ab,
    0x75eb4dca135978a3,
]);

/// Affine `x` of the standard base point.
const GX: U256 = U256::from_be_words([
    0x216936d3cd6e53fe,
    0xc0a4e231fdd6dc5c,
    0x692cc7609525a7b2,
    0xc9562d608f25d51a,
]);

/// Affine `y` of the standard base point (`4/5 mod m`).
const GY: U256 = U256::from_be_words([
    0x6666666666666666,
    0x6666666666666666,
    0x6666666666666666,
    0x6666666666666658,
]);

/// The immutable constants of Edwards25519.
///
/// The field modulus `m` and the group order `n` are distinct primes; the
/// former reduces coordinates, the latter reduces scalars.
#[derive(Debug)]
pub struct CurveParameters {
    modulus: U256,
    a: FieldElement,
    d: FieldElement,
    generator: EdwardsPoint,
    order: U256,
}

impl CurveParameters {
    /// Returns the process-wide Edwards25519 parameters.
    ///
    /// The value is built once, on first call, and never mutated; concurrent
    /// readers need no synchronisation beyond the initial `OnceLock`.
    pub fn ed25519() -> &'static CurveParameters {
        static PARAMS: OnceLock<CurveParameters> = OnceLock::new();
        PARAMS.get_or_init(Self::build)
    }

    // Must not call any point operation: those read `ed25519()` and would
    // re-enter the `OnceLock` initialiser.
    fn build() -> Self {
        let gx = FieldElement::from_u256(GX);
        let gy = FieldElement::from_u256(GY);

        let generator = EdwardsPoint::from_extended_unchecked(gx, gy, FieldElement::ONE, gx * gy);

        trace!("edwards25519 parameters initialised");

        CurveParameters {
            modulus: FIELD_MODULUS,
            a: FieldElement::from(-1i64),
            d: FieldElement::from_u256(D),
            generator,
            order: GROUP_ORDER,
        }
    }

    /// The field modulus `m = 2²⁵⁵ − 19`.
    pub fn modulus(&self) -> U256 {
        self.modulus
    }

    /// The curve coefficient `a = −1`, reduced as `m − 1`.
    pub fn a(&self) -> FieldElement {
        self.a
    }

    /// The curve coefficient `d`.
    pub fn d(&self) -> FieldElement {
        self.d
    }

    /// The base point `G = (gx, gy, 1, gx·gy)`.
    pub fn generator(&self) -> EdwardsPoint {
        self.generator
    }

    /// The prime order `n` of the subgroup generated by `G`.
    pub fn order(&self) -> U256 {
        self.order
    }
}
