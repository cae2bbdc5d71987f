//! Signer recovery: `(digest, signature) → address`.
//!
//! The verifier only needs this capability, not a full signature scheme.
//! [`Secp256k1Recovery`] is the Ethereum `ecrecover` rule set:
//!
//! - `v` must be 27/28 (raw parity 0/1 also accepted)
//! - `r` and `s` must be non-zero and below the curve order
//! - `s` must be in the lower half of the order (no malleable twins)
//! - the signer address is the last 20 bytes of `keccak256(pubkey_xy)`

use alloy_primitives::{Address, B256, keccak256};
use hypesui_types::{LedgerError, PermitSignature, Result};
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};

/// Recovers the address that produced a signature over a 32-byte digest.
pub trait SignerRecovery {
    /// # Errors
    /// Returns `InvalidSignature` for malformed signatures or failed recovery.
    fn recover(&self, digest: &B256, signature: &PermitSignature) -> Result<Address>;
}

/// Ethereum-style secp256k1 public key recovery.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Recovery;

impl SignerRecovery for Secp256k1Recovery {
    fn recover(&self, digest: &B256, signature: &PermitSignature) -> Result<Address> {
        let parity = signature
            .y_parity()
            .ok_or_else(|| LedgerError::invalid_signature(format!("bad v {}", signature.v)))?;

        let mut rs = [0u8; 64];
        rs[..32].copy_from_slice(signature.r.as_slice());
        rs[32..].copy_from_slice(signature.s.as_slice());
        let sig = Signature::from_slice(&rs)
            .map_err(|_| LedgerError::invalid_signature("r or s out of range"))?;
        if sig.normalize_s().is_some() {
            return Err(LedgerError::invalid_signature("s in upper half of curve order"));
        }

        let recovery_id = RecoveryId::new(parity, false);
        let key = VerifyingKey::recover_from_prehash(digest.as_slice(), &sig, recovery_id)
            .map_err(|_| LedgerError::invalid_signature("public key recovery failed"))?;
        Ok(address_of(&key))
    }
}

/// Ethereum address of a secp256k1 public key.
#[must_use]
pub fn address_of(key: &VerifyingKey) -> Address {
    let point = key.to_encoded_point(false);
    // Skip the 0x04 uncompressed-point tag.
    let hash = keccak256(&point.as_bytes()[1..]);
    Address::from_slice(&hash[12..])
}
