//! Local secp256k1 signer for tests. **Never use in production.**

use alloy_primitives::{Address, B256};
use hypesui_types::PermitSignature;
use k256::ecdsa::SigningKey;

use crate::recovery::address_of;

/// A keypair that signs permit digests the way a wallet would.
#[derive(Clone)]
pub struct TestSigner {
    key: SigningKey,
    address: Address,
}

impl TestSigner {
    /// Fresh random key.
    #[must_use]
    pub fn random() -> Self {
        Self::from_key(SigningKey::random(&mut rand::thread_rng()))
    }

    /// Deterministic key from a 32-byte secret.
    ///
    /// # Panics
    /// Panics if `secret` is zero or not below the curve order.
    #[must_use]
    pub fn from_secret(secret: [u8; 32]) -> Self {
        Self::from_key(SigningKey::from_slice(&secret).expect("valid secp256k1 secret"))
    }

    fn from_key(key: SigningKey) -> Self {
        let address = address_of(key.verifying_key());
        Self { key, address }
    }

    #[must_use]
    pub fn address(&self) -> Address {
        self.address
    }

    /// Sign a 32-byte digest, returning `(v, r, s)` with `v ∈ {27, 28}`.
    ///
    /// # Panics
    /// Panics if signing fails, which only happens for degenerate keys.
    #[must_use]
    pub fn sign_digest(&self, digest: &B256) -> PermitSignature {
        let (sig, recid) = self
            .key
            .sign_prehash_recoverable(digest.as_slice())
            .expect("prehash signing");
        let bytes = sig.to_bytes();
        PermitSignature::new(
            27 + recid.to_byte(),
            B256::from_slice(&bytes[..32]),
            B256::from_slice(&bytes[32..]),
        )
    }
}

impl std::fmt::Debug for TestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestSigner")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}
