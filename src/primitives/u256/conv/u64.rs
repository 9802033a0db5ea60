//! Conversions between `U256` and 64-bit integer representations

use crate::primitives::U256;

/// Converts a `U256` into four 64-bit words, most significant first.
impl From<U256> for [u64; 4] {
    fn from(value: U256) -> Self {
        let mut out = [0u64; 4];

        for (o, chunk) in out.iter_mut().zip(value.0.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *o = u64::from_be_bytes(word);
        }

        out
    }
}

/// Converts four 64-bit words, most significant first, into a `U256`.
impl From<[u64; 4]> for U256 {
    fn from(value: [u64; 4]) -> Self {
        U256::from_be_words(value)
    }
}

/// Attempts to convert a `U256` into a `u64`.
///
/// The conversion succeeds only if the upper 192 bits of the value are zero.
impl TryFrom<U256> for u64 {
    type Error = ();

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        let (high, low) = value.0.split_at(24);

        if high.iter().any(|&b| b != 0) {
            return Err(());
        }

        let mut word = [0u8; 8];
        word.copy_from_slice(low);
        Ok(u64::from_be_bytes(word))
    }
}

/// Converts a `u64` into a `U256`.
impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        let mut out = [0u8; 32];
        out[24..32].copy_from_slice(&value.to_be_bytes());
        U256(out)
    }
}
