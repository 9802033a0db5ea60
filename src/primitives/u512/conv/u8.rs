//! Conversions between `U512` and byte representations

use crate::primitives::U512;

/// Converts a `U512` into a 64-byte big-endian array.
impl From<U512> for [u8; 64] {
    fn from(value: U512) -> Self {
        value.0
    }
}

/// Converts a 64-byte array, interpreted as big-endian, into a `U512`.
impl From<[u8; 64]> for U512 {
    fn from(value: [u8; 64]) -> Self {
        U512(value)
    }
}

/// Converts a `u8` into a `U512`.
impl From<u8> for U512 {
    fn from(value: u8) -> Self {
        let mut out = [0u8; 64];
        out[63] = value;
        U512(out)
    }
}
