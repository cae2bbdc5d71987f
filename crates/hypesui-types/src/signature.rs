//! Recoverable secp256k1 signature in Ethereum `(v, r, s)` form.

use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

use crate::{LedgerError, Result};

/// Byte length of the packed `r ‖ s ‖ v` encoding.
pub const SIGNATURE_LEN: usize = 65;

/// A signature over a permit digest.
///
/// Only structural decoding happens here; range and malleability checks
/// belong to the recovery step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermitSignature {
    /// Recovery byte: 27/28 (0/1 accepted as raw parity).
    pub v: u8,
    pub r: B256,
    pub s: B256,
}

impl PermitSignature {
    #[must_use]
    pub fn new(v: u8, r: B256, s: B256) -> Self {
        Self { v, r, s }
    }

    /// Decode the packed 65-byte `r ‖ s ‖ v` form.
    ///
    /// # Errors
    /// Returns `InvalidSignature` if the length is not 65.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SIGNATURE_LEN {
            return Err(LedgerError::invalid_signature(format!(
                "expected {SIGNATURE_LEN} bytes, got {}",
                bytes.len()
            )));
        }
        Ok(Self {
            r: B256::from_slice(&bytes[..32]),
            s: B256::from_slice(&bytes[32..64]),
            v: bytes[64],
        })
    }

    /// Decode a hex string (with or without `0x`).
    ///
    /// # Errors
    /// Returns `InvalidSignature` on bad hex or wrong length.
    pub fn from_hex(s: &str) -> Result<Self> {
        let raw = hex::decode(s.trim_start_matches("0x"))
            .map_err(|e| LedgerError::invalid_signature(format!("bad hex: {e}")))?;
        Self::from_bytes(&raw)
    }

    /// Packed `r ‖ s ‖ v`.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        let mut out = [0u8; SIGNATURE_LEN];
        out[..32].copy_from_slice(self.r.as_slice());
        out[32..64].copy_from_slice(self.s.as_slice());
        out[64] = self.v;
        out
    }

    /// Y-parity encoded by `v`, or `None` for an out-of-range recovery byte.
    #[must_use]
    pub fn y_parity(&self) -> Option<bool> {
        match self.v {
            0 | 27 => Some(false),
            1 | 28 => Some(true),
            _ => None,
        }
    }
}

impl std::fmt::Display for PermitSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.to_bytes()))
    }
}
