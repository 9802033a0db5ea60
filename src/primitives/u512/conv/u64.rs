//! Conversions between `U512` and 64-bit integer representations

use crate::primitives::U512;

/// Converts a `U512` into eight 64-bit words, most significant first.
impl From<U512> for [u64; 8] {
    fn from(value: U512) -> Self {
        let mut out = [0u64; 8];

        for (o, chunk) in out.iter_mut().zip(value.0.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *o = u64::from_be_bytes(word);
        }

        out
    }
}

/// Converts eight 64-bit words, most significant first, into a `U512`.
impl From<[u64; 8]> for U512 {
    fn from(value: [u64; 8]) -> Self {
        let mut out = [0u8; 64];

        for (chunk, v) in out.chunks_exact_mut(8).zip(value.into_iter()) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }

        U512(out)
    }
}

/// Attempts to convert a `U512` into a `u64`.
///
/// The conversion succeeds only if the upper 448 bits of the value are zero.
impl TryFrom<U512> for u64 {
    type Error = ();

    fn try_from(value: U512) -> Result<Self, Self::Error> {
        let (high, low) = value.0.split_at(56);

        if high.iter().any(|&b| b != 0) {
            return Err(());
        }

        let mut word = [0u8; 8];
        word.copy_from_slice(low);
        Ok(u64::from_be_bytes(word))
    }
}

/// Converts a `u64` into a `U512`.
impl From<u64> for U512 {
    fn from(value: u64) -> Self {
        let mut out = [0u8; 64];
        out[56..64].copy_from_slice(&value.to_be_bytes());
        U512(out)
    }
}
