//! Edwards25519 group operations in extended coordinates.
//!
//! A point is stored as `(X : Y : Z : T)` with
//!
//! ```text
//! x = X / Z,   y = Y / Z,   x·y = T / Z
//! ```
//!
//! so that addition and doubling never need a field inversion. Every
//! intermediate value is a [`FieldElement`] and is therefore reduced modulo
//! `m` after each step.
//!
//! ## Formulas
//!
//! - Doubling: `dbl-2008-hwcd` (Hisil–Wong–Carter–Dawson).
//! - Addition: `add-2008-hwcd-4`, specialised to `a = −1`. The formula
//!   degenerates (`F = 0`) when both inputs are the same affine point; that
//!   case is routed to doubling.
//!
//! ## Scalar multiplication
//!
//! [`EdwardsPoint::multiply`] is a plain double-and-add over the bits of the
//! multiplier, least significant first. It is **not constant-time**: the
//! number of additions follows the Hamming weight of the scalar. Use it
//! only where timing of secret scalars is not observable by an adversary.
//!
//! ## Validation
//!
//! Coordinates supplied from outside the crate go through
//! [`EdwardsPoint::from_affine`] or [`EdwardsPoint::from_extended`], which
//! reject anything off the curve. The group law itself assumes valid input.

use super::{field::FieldElement, params::CurveParameters, scalar::Scalar};
use crate::{
    error::{ArithmeticError, PointError},
    primitives::U256,
};

use log::debug;
use std::ops::{Add, Mul};

/// A point of Edwards25519 in extended homogeneous coordinates.
///
/// Equality compares the affine points the coordinates represent, so two
/// projectively scaled representations of the same point compare equal.
#[derive(Copy, Clone, Debug)]
pub struct EdwardsPoint {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
    t: FieldElement,
}

impl EdwardsPoint {
    /// The neutral element `(0 : 1 : 1 : 0)`.
    pub const IDENTITY: Self = EdwardsPoint {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
        t: FieldElement::ZERO,
    };

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// The standard base point `G`.
    pub fn generator() -> Self {
        CurveParameters::ed25519().generator()
    }

    pub(crate) fn from_extended_unchecked(
        x: FieldElement,
        y: FieldElement,
        z: FieldElement,
        t: FieldElement,
    ) -> Self {
        EdwardsPoint { x, y, z, t }
    }

    /// Builds a point from affine coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`PointError::InvalidPoint`] if `(x, y)` does not satisfy the
    /// curve equation.
    pub fn from_affine(x: FieldElement, y: FieldElement) -> Result<Self, PointError> {
        Self::validated(EdwardsPoint {
            x,
            y,
            z: FieldElement::ONE,
            t: x * y,
        })
    }

    /// Builds a point from extended coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`PointError::InvalidPoint`] if `Z` is zero, if
    /// `X·Y ≠ Z·T`, or if the represented affine point is off the curve.
    pub fn from_extended(
        x: FieldElement,
        y: FieldElement,
        z: FieldElement,
        t: FieldElement,
    ) -> Result<Self, PointError> {
        Self::validated(EdwardsPoint { x, y, z, t })
    }

    fn validated(point: Self) -> Result<Self, PointError> {
        if !point.is_on_curve() {
            debug!("rejected point off the curve: {point:?}");
            return Err(PointError::InvalidPoint);
        }

        Ok(point)
    }

    pub fn x(&self) -> FieldElement {
        self.x
    }

    pub fn y(&self) -> FieldElement {
        self.y
    }

    pub fn z(&self) -> FieldElement {
        self.z
    }

    pub fn t(&self) -> FieldElement {
        self.t
    }

    /// Checks the extended-coordinate invariants.
    ///
    /// With `x = X/Z` and `y = Y/Z`, the affine equation
    /// `a·x² + y² = 1 + d·x²·y²` becomes, after multiplying by `Z⁴`,
    ///
    /// ```text
    /// a·X²·Z² + Y²·Z² = Z⁴ + d·X²·Y²
    /// ```
    ///
    /// which needs no inversion. `Z` must be non-zero and `X·Y = Z·T`.
    pub fn is_on_curve(&self) -> bool {
        let curve = CurveParameters::ed25519();

        if self.z.is_zero() || self.x * self.y != self.z * self.t {
            return false;
        }

        let xx = self.x.square();
        let yy = self.y.square();
        let zz = self.z.square();

        let lhs = curve.a() * xx * zz + yy * zz;
        let rhs = zz.square() + curve.d() * xx * yy;

        lhs == rhs
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Returns `2·P`.
    pub fn double(&self) -> Self {
        let curve = CurveParameters::ed25519();

        let a = self.x.square();
        let b = self.y.square();
        let c = FieldElement::from(2u64) * self.z.square();
        let d = curve.a() * a;
        let e = (self.x + self.y).square() - a - b;
        let g = d + b;
        let f = g - c;
        let h = d - b;

        EdwardsPoint {
            x: e * f,
            y: g * h,
            z: f * g,
            t: e * h,
        }
    }

    /// Returns `k·P` for any non-negative integer `k`.
    ///
    /// Double-and-add from the least significant bit: the fold threads the
    /// accumulator and the current power-of-two multiple of `P`, one bit per
    /// step. `k = 0` yields the identity.
    ///
    /// Not constant-time.
    pub fn multiply(&self, k: U256) -> Self {
        let (acc, _) = (0..k.bits()).fold((Self::IDENTITY, *self), |(acc, current), i| {
            let acc = if k.bit(i) { acc + current } else { acc };
            (acc, current.double())
        });

        acc
    }

    /// Returns the affine coordinates `(X/Z, Y/Z)`.
    ///
    /// # Errors
    ///
    /// Fails only if `Z` is zero, which no valid point has.
    pub fn to_affine(&self) -> Result<(FieldElement, FieldElement), ArithmeticError> {
        let z_inv = self.z.invert()?;
        Ok((self.x * z_inv, self.y * z_inv))
    }
}

impl Default for EdwardsPoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Cross-multiplied comparison: `X1·Z2 = X2·Z1` and `Y1·Z2 = Y2·Z1`.
impl PartialEq for EdwardsPoint {
    fn eq(&self, other: &Self) -> bool {
        self.x * other.z == other.x * self.z && self.y * other.z == other.y * self.z
    }
}

impl Eq for EdwardsPoint {}

impl<'a> Add<&'a EdwardsPoint> for &EdwardsPoint {
    type Output = EdwardsPoint;

    fn add(self, other: &'a EdwardsPoint) -> EdwardsPoint {
        let a = (self.y - self.x) * (other.y + other.x);
        let b = (self.y + self.x) * (other.y - other.x);
        let f = b - a;

        if f.is_zero() {
            return self.double();
        }

        let two = FieldElement::from(2u64);
        let c = two * self.z * other.t;
        let d = two * self.t * other.z;
        let e = d + c;
        let g = b + a;
        let h = d - c;

        EdwardsPoint {
            x: e * f,
            y: g * h,
            z: f * g,
            t: e * h,
        }
    }
}

impl Add for EdwardsPoint {
    type Output = EdwardsPoint;

    fn add(self, other: EdwardsPoint) -> EdwardsPoint {
        &self + &other
    }
}

impl<'a> Mul<&'a Scalar> for &EdwardsPoint {
    type Output = EdwardsPoint;

    fn mul(self, scalar: &'a Scalar) -> EdwardsPoint {
        self.multiply(scalar.to_u256())
    }
}

impl Mul<Scalar> for EdwardsPoint {
    type Output = EdwardsPoint;

    fn mul(self, scalar: Scalar) -> EdwardsPoint {
        self.multiply(scalar.to_u256())
    }
}
