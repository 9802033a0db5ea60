//! 256-bit unsigned integer primitive
//!
//! The internal representation is big-endian, which aligns naturally with
//! the ordering of the derived comparison traits and with hexadecimal
//! formatting of curve constants.

use std::fmt::{Display, Formatter, Result};

/// Fixed-size 256-bit unsigned integer.
///
/// The value is stored as 32 bytes in **big-endian** order, so the derived
/// `Ord` implementation matches numeric ordering.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U256(pub(crate) [u8; 32]);

impl U256 {
    /// The value zero.
    pub const ZERO: Self = Self([0u8; 32]);

    /// The value one.
    pub const ONE: Self = Self::one_be();

    /// The maximum representable value (2²⁵⁶ − 1).
    pub const MAX: Self = Self([255u8; 32]);

    /// Returns the value one encoded in big-endian form.
    pub const fn one_be() -> Self {
        let mut out = [0u8; 32];
        out[31] = 1;
        U256(out)
    }

    /// Builds a value from four 64-bit words, most significant first.
    ///
    /// This is the `const` entry point used to spell out curve constants.
    pub const fn from_be_words(words: [u64; 4]) -> Self {
        let mut out = [0u8; 32];
        let mut i = 0;

        while i < 4 {
            let bytes = words[i].to_be_bytes();
            let mut j = 0;

            while j < 8 {
                out[i * 8 + j] = bytes[j];
                j += 1;
            }

            i += 1;
        }

        U256(out)
    }

    /// Builds a value from 32 little-endian bytes (least significant first).
    pub fn from_le_bytes(bytes: [u8; 32]) -> Self {
        let mut be = bytes;
        be.reverse();
        U256(be)
    }

    /// Returns the value as 32 little-endian bytes.
    pub fn to_le_bytes(&self) -> [u8; 32] {
        let mut le = self.0;
        le.reverse();
        le
    }

    /// Counts the number of leading zero bits in the integer.
    ///
    /// # Returns
    /// The number of leading zero bits in the range `0..=256`.
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

    /// Number of significant bits: the position of the highest set bit
    /// plus one, or zero for the value zero.
    pub fn bits(&self) -> u32 {
        256 - self.leading_zeros()
    }

    /// Returns bit `index`, counting from the least significant bit.
    ///
    /// Indices at or beyond 256 read as zero.
    pub fn bit(&self, index: u32) -> bool {
        if index >= 256 {
            return false;
        }

        let byte = self.0[31 - (index / 8) as usize];
        (byte >> (index % 8)) & 1 == 1
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    pub fn is_odd(&self) -> bool {
        self.0[31] & 1 == 1
    }
}

impl Display for U256 {
    /// Formats the value as a colon-separated hexadecimal string.
    ///
    /// Example:
    /// `00:1F:A4:...`
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
