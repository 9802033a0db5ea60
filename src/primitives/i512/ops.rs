//! Signed arithmetic for `I512`
//!
//! Every operation checks that the magnitude stays within 512 bits in
//! debug builds. Operands coming from reduced 256-bit values never get
//! close to that bound.

use crate::primitives::i512::I512;
use std::ops::{Add, Mul, Neg, Sub};

impl I512 {
    /// Truncating division, returning `(quotient, remainder)`.
    ///
    /// The quotient rounds toward zero and the remainder has the sign of
    /// `self`, so `self == quotient * rhs + remainder` always holds.
    ///
    /// # Panics
    /// Panics if `rhs` is zero.
    pub fn div_rem(self, rhs: I512) -> (I512, I512) {
        let (quotient, remainder) = self.magnitude().div_rem(rhs.magnitude());

        (
            I512::from_parts(self.is_negative() != rhs.is_negative(), quotient),
            I512::from_parts(self.is_negative(), remainder),
        )
    }
}

impl Neg for I512 {
    type Output = I512;

    fn neg(self) -> Self::Output {
        I512::from_parts(!self.is_negative(), self.magnitude())
    }
}

impl Add for I512 {
    type Output = I512;

    fn add(self, rhs: I512) -> Self::Output {
        let (lhs_mag, rhs_mag) = (self.magnitude(), rhs.magnitude());

        if self.is_negative() == rhs.is_negative() {
            let (sum, carry) = lhs_mag.overflowing_add(rhs_mag);
            debug_assert!(!carry, "I512 addition overflow");
            return I512::from_parts(self.is_negative(), sum);
        }

        // Opposite signs: the larger magnitude decides the sign.
        if lhs_mag >= rhs_mag {
            I512::from_parts(self.is_negative(), lhs_mag - rhs_mag)
        } else {
            I512::from_parts(rhs.is_negative(), rhs_mag - lhs_mag)
        }
    }
}

impl Sub for I512 {
    type Output = I512;

    fn sub(self, rhs: I512) -> Self::Output {
        self + -rhs
    }
}

impl Mul for I512 {
    type Output = I512;

    fn mul(self, rhs: I512) -> Self::Output {
        let (lhs_mag, rhs_mag) = (self.magnitude(), rhs.magnitude());
        debug_assert!(
            lhs_mag.bits() + rhs_mag.bits() <= 512,
            "I512 multiplication overflow"
        );

        I512::from_parts(self.is_negative() != rhs.is_negative(), lhs_mag * rhs_mag)
    }
}
