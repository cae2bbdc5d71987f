//! # hypesui-permit
//!
//! **Signature plane** of the HyperSui token: EIP-2612 permits.
//!
//! The only component that performs cryptographic work:
//! 1. **eip712**: domain separator, `Permit` struct hash, signing digest
//! 2. **recovery**: `(digest, v, r, s) → signer address` over secp256k1
//! 3. **nonces**: per-owner replay counters
//! 4. **PermitVerifier**: ties the three together and calls
//!    [`AllowanceRegistry::approve`](hypesui_ledger::AllowanceRegistry::approve)
//!
//! Replay protection is a property of the nonce, not of signature storage:
//! a signature binds the nonce current at signing time, and that nonce is
//! consumed on first use.

pub mod eip712;
pub mod nonces;
pub mod recovery;
pub mod verifier;

#[cfg(any(test, feature = "test-helpers"))]
pub mod signer;

pub use eip712::{DOMAIN_TYPEHASH, PERMIT_TYPEHASH, Permit, domain_separator, typed_data_digest};
pub use nonces::NonceRegistry;
pub use recovery::{Secp256k1Recovery, SignerRecovery, address_of};
pub use verifier::PermitVerifier;

#[cfg(any(test, feature = "test-helpers"))]
pub use signer::TestSigner;
