use crate::primitives::{U256, U512};

use std::fmt::{Display, Formatter, Result};

/// Sign-magnitude 512-bit integer.
///
/// Zero has a single representation: its sign is always non-negative, so
/// the derived equality compares values.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct I512 {
    negative: bool,
    magnitude: U512,
}

impl I512 {
    /// The value zero.
    pub const ZERO: Self = Self {
        negative: false,
        magnitude: U512::ZERO,
    };

    /// The value one.
    pub const ONE: Self = Self {
        negative: false,
        magnitude: U512::ONE,
    };

    /// Builds a value from a sign and a magnitude, normalising negative zero.
    pub fn from_parts(negative: bool, magnitude: U512) -> Self {
        Self {
            negative: negative && !magnitude.is_zero(),
            magnitude,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Absolute value.
    pub fn magnitude(&self) -> U512 {
        self.magnitude
    }
}

impl From<U512> for I512 {
    fn from(value: U512) -> Self {
        Self::from_parts(false, value)
    }
}

impl From<U256> for I512 {
    fn from(value: U256) -> Self {
        Self::from_parts(false, U512::from(value))
    }
}

impl From<u64> for I512 {
    fn from(value: u64) -> Self {
        Self::from_parts(false, U512::from(value))
    }
}

impl From<i64> for I512 {
    fn from(value: i64) -> Self {
        Self::from_parts(value < 0, U512::from(value.unsigned_abs()))
    }
}

impl Display for I512 {
    /// Formats the magnitude as colon-separated hexadecimal, prefixed with
    /// `-` for negative values.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.negative {
            f.write_str("-")?;
        }

        write!(f, "{}", self.magnitude)
    }
}
