//! 512-bit unsigned integer primitive

use crate::primitives::U256;

use std::fmt::{Display, Formatter, Result};

/// Fixed-size 512-bit unsigned integer.
///
/// The value is stored as 64 bytes in **big-endian** order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U512(pub(crate) [u8; 64]);

impl U512 {
    /// The value zero.
    pub const ZERO: Self = Self([0u8; 64]);

    /// The value one.
    pub const ONE: Self = Self::one_be();

    /// The maximum representable value (2⁵¹² − 1).
    pub const MAX: Self = Self([255u8; 64]);

    /// Returns the value one encoded in big-endian form.
    pub const fn one_be() -> Self {
        let mut out = [0u8; 64];
        out[63] = 1;
        U512(out)
    }

    /// Builds a value from 64 little-endian bytes (least significant first).
    ///
    /// This matches the byte order of wide digest outputs that are reduced
    /// into scalars.
    pub fn from_le_bytes(bytes: [u8; 64]) -> Self {
        let mut be = bytes;
        be.reverse();
        U512(be)
    }

    /// Counts the number of leading zero bits in the integer.
    ///
    /// # Returns
    /// The number of leading zero bits in the range `0..=512`.
    pub fn leading_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &byte in self.0.iter() {
            if byte == 0 {
                count += 8;
            } else {
                count += byte.leading_zeros();
                return count;
            }
        }

        count
    }

    /// Number of significant bits, zero for the value zero.
    pub fn bits(&self) -> u32 {
        512 - self.leading_zeros()
    }

    /// Returns bit `index`, counting from the least significant bit.
    pub fn bit(&self, index: u32) -> bool {
        if index >= 512 {
            return false;
        }

        let byte = self.0[63 - (index / 8) as usize];
        (byte >> (index % 8)) & 1 == 1
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Returns the least significant 256 bits.
    ///
    /// Callers use this only once the value is known to be below a 256-bit
    /// modulus; the upper half is discarded.
    pub(crate) fn low_u256(&self) -> U256 {
        debug_assert!(self.bits() <= 256, "value does not fit in 256 bits");

        let mut out = [0u8; 32];
        out.copy_from_slice(&self.0[32..]);
        U256(out)
    }

    /// Returns the value as eight 64-bit limbs, least significant first.
    pub(crate) fn to_le_limbs(self) -> [u64; 8] {
        let mut limbs: [u64; 8] = self.into();
        limbs.reverse();
        limbs
    }

    /// Builds a value from eight 64-bit limbs, least significant first.
    pub(crate) fn from_le_limbs(mut limbs: [u64; 8]) -> Self {
        limbs.reverse();
        U512::from(limbs)
    }
}

impl Display for U512 {
    /// Formats the value as a colon-separated hexadecimal string.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }

            write!(f, "{:02X}", byte)?;
        }

        Ok(())
    }
}

/// Provides a manual `Default` implementation for `U512`.
///
/// `#[derive(Default)]` cannot be used directly for `[u8; 64]`; the default
/// value is zero, consistent with `U512::ZERO`.
impl Default for U512 {
    fn default() -> Self {
        U512([0u8; 64])
    }
}
