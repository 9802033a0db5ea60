//! Conversions between `U512` and `U256`

use crate::primitives::{U256, U512};

/// Widens a `U256` into the low half of a `U512`.
impl From<U256> for U512 {
    fn from(value: U256) -> Self {
        let mut out = [0u8; 64];
        out[32..].copy_from_slice(&value.0);
        U512(out)
    }
}

/// Attempts to narrow a `U512` into a `U256`.
///
/// The conversion succeeds only if the upper 256 bits of the value are zero.
impl TryFrom<U512> for U256 {
    type Error = ();

    fn try_from(value: U512) -> Result<Self, Self::Error> {
        if value.0[..32].iter().any(|&b| b != 0) {
            return Err(());
        }

        Ok(value.low_u256())
    }
}
