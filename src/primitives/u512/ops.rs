//! Arithmetic operations for `U512`
//!
//! Only the operations modular reduction needs are provided:
//! - addition and subtraction with carry/borrow reporting
//! - truncating schoolbook multiplication
//! - shift-and-subtract division producing quotient and remainder
//!
//! The operator impls wrap modulo 2⁵¹². The signed wrapper `I512` checks
//! carries explicitly, so no caller depends on that wraparound.

use crate::primitives::u512::U512;
use std::ops::{Add, Div, Mul, Rem, Sub};

impl U512 {
    /// Adds `rhs`, returning the wrapped sum and whether a carry left bit 511.
    pub fn overflowing_add(self, rhs: U512) -> (U512, bool) {
        let mut out = [0u8; 64];
        let mut carry = 0u16;

        for ((&a, &b), o) in self.0.iter().zip(rhs.0.iter()).zip(out.iter_mut()).rev() {
            let sum = a as u16 + b as u16 + carry;
            *o = (sum & 0xFF) as u8;
            carry = sum >> 8;
        }

        (U512(out), carry != 0)
    }

    /// Subtracts `rhs`, returning the wrapped difference and whether a
    /// borrow was needed (`self < rhs`).
    pub fn overflowing_sub(self, rhs: U512) -> (U512, bool) {
        let mut out = [0u8; 64];
        let mut borrow = 0i16;

        for ((&a, &b), o) in self.0.iter().zip(rhs.0.iter()).zip(out.iter_mut()).rev() {
            let lhs = a as i16;
            let sub = b as i16 + borrow;

            if lhs >= sub {
                *o = (lhs - sub) as u8;
                borrow = 0;
            } else {
                *o = (lhs + 256 - sub) as u8;
                borrow = 1;
            }
        }

        (U512(out), borrow != 0)
    }

    /// Divides by `rhs`, returning `(quotient, remainder)`.
    ///
    /// Classic binary long division over 64-bit limbs, starting at the
    /// dividend's highest set bit.
    ///
    /// # Panics
    /// Panics if `rhs` is zero.
    pub fn div_rem(self, rhs: U512) -> (U512, U512) {
        assert!(!rhs.is_zero(), "division by zero");

        if self < rhs {
            return (U512::ZERO, self);
        }

        let dividend = self.to_le_limbs();
        let divisor = rhs.to_le_limbs();

        let mut quotient = [0u64; 8];
        let mut remainder = [0u64; 8];

        for bit in (0..self.bits() as usize).rev() {
            let mut carry = (dividend[bit / 64] >> (bit % 64)) & 1;

            for limb in remainder.iter_mut() {
                let next = *limb >> 63;
                *limb = (*limb << 1) | carry;
                carry = next;
            }

            // A carry out of the top limb means the shifted remainder is at
            // least 2⁵¹², which exceeds any divisor.
            if carry == 1 || !limbs_lt(&remainder, &divisor) {
                limbs_sub_assign(&mut remainder, &divisor);
                quotient[bit / 64] |= 1 << (bit % 64);
            }
        }

        (U512::from_le_limbs(quotient), U512::from_le_limbs(remainder))
    }
}

fn limbs_lt(lhs: &[u64; 8], rhs: &[u64; 8]) -> bool {
    for (a, b) in lhs.iter().zip(rhs.iter()).rev() {
        if a != b {
            return a < b;
        }
    }

    false
}

fn limbs_sub_assign(lhs: &mut [u64; 8], rhs: &[u64; 8]) {
    let mut borrow = false;

    for (a, &b) in lhs.iter_mut().zip(rhs.iter()) {
        let (diff, b1) = a.overflowing_sub(b);
        let (diff, b2) = diff.overflowing_sub(borrow as u64);
        *a = diff;
        borrow = b1 || b2;
    }
}

/// Addition modulo 2⁵¹².
impl Add for U512 {
    type Output = U512;

    fn add(self, rhs: U512) -> Self::Output {
        self.overflowing_add(rhs).0
    }
}

/// Subtraction modulo 2⁵¹².
impl Sub for U512 {
    type Output = U512;

    fn sub(self, rhs: U512) -> Self::Output {
        self.overflowing_sub(rhs).0
    }
}

/// Multiplication modulo 2⁵¹².
///
/// Limbs of the product above bit 511 are never computed.
impl Mul<U512> for U512 {
    type Output = U512;

    fn mul(self, rhs: U512) -> Self::Output {
        let lhs = self.to_le_limbs();
        let rhs = rhs.to_le_limbs();

        let mut out = [0u64; 8];

        for (i, &a) in lhs.iter().enumerate() {
            if a == 0 {
                continue;
            }

            let mut carry = 0u128;

            for (j, &b) in rhs.iter().enumerate().take(8 - i) {
                let t = out[i + j] as u128 + a as u128 * b as u128 + carry;
                out[i + j] = t as u64;
                carry = t >> 64;
            }
        }

        U512::from_le_limbs(out)
    }
}

impl Div<U512> for U512 {
    type Output = U512;

    fn div(self, rhs: U512) -> Self::Output {
        self.div_rem(rhs).0
    }
}

impl Rem<U512> for U512 {
    type Output = U512;

    fn rem(self, rhs: U512) -> Self::Output {
        self.div_rem(rhs).1
    }
}
