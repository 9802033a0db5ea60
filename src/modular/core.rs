use crate::{
    error::ArithmeticError,
    primitives::{I512, U256},
};

use log::debug;

/// Returns the unique residue in `[0, modulus)` congruent to `value`.
///
/// A truncating remainder leaves a value in `(-modulus, modulus)`; one
/// conditional addition of the modulus makes it canonical.
///
/// # Panics
///
/// Panics if `modulus` is zero.
pub fn reduce(value: I512, modulus: U256) -> U256 {
    let modulus = I512::from(modulus);
    let (_, remainder) = value.div_rem(modulus);

    let residue = if remainder.is_negative() {
        remainder + modulus
    } else {
        remainder
    };

    residue.magnitude().low_u256()
}

/// Computes the multiplicative inverse of `value` modulo `modulus`.
///
/// The value is first reduced into `[0, modulus)`. The extended Euclidean
/// algorithm then runs until the remainder reaches zero, tracking the
/// Bézout coefficient of `value`; the last non-zero remainder is the gcd.
///
/// # Errors
///
/// - [`ArithmeticError::InvalidInverseInput`] if `value` or `modulus` is zero.
/// - [`ArithmeticError::NoInverseExists`] if `gcd(value, modulus) != 1`.
///
/// # Cost
///
/// `O(log modulus)` division steps.
pub fn invert(value: I512, modulus: U256) -> Result<U256, ArithmeticError> {
    if value.is_zero() || modulus.is_zero() {
        debug!("modular inverse rejected: zero value or zero modulus");
        return Err(ArithmeticError::InvalidInverseInput);
    }

    // Invariants: b ≡ x·value and a ≡ u·value (mod modulus).
    let mut a = I512::from(reduce(value, modulus));
    let mut b = I512::from(modulus);
    let mut x = I512::ZERO;
    let mut u = I512::ONE;

    while !a.is_zero() {
        let (q, r) = b.div_rem(a);
        let next = x - u * q;

        (b, a) = (a, r);
        (x, u) = (u, next);
    }

    if b != I512::ONE {
        debug!("modular inverse does not exist: gcd is {b}");
        return Err(ArithmeticError::NoInverseExists);
    }

    Ok(reduce(x, modulus))
}
