//! Permit verifier — signature-based approvals.
//!
//! Lets an owner grant an allowance without submitting a call themselves,
//! by presenting a signature over an EIP-712 `Permit` message.
//!
//! ## Validation order
//!
//! ```text
//! deadline → digest(nonces[owner]) → recover == owner → approval pair → consume nonce → approve
//! ```
//!
//! Every check runs before the first write, so a rejected permit changes
//! neither the nonce nor the allowance.

use alloy_primitives::{Address, B256, U256};
use hypesui_ledger::AllowanceRegistry;
use hypesui_types::{Eip712Domain, LedgerConfig, LedgerError, LedgerEvent, PermitRequest, Result};

use crate::{
    eip712::{Permit, domain_separator_for},
    nonces::NonceRegistry,
    recovery::{Secp256k1Recovery, SignerRecovery},
};

/// Owns the domain separator and nonce counters; validates permits.
#[derive(Debug)]
pub struct PermitVerifier<R = Secp256k1Recovery> {
    /// Computed once at construction, immutable afterwards.
    domain_separator: B256,
    domain: Eip712Domain,
    nonces: NonceRegistry,
    recovery: R,
}

impl PermitVerifier<Secp256k1Recovery> {
    /// Verifier for `config`'s domain using secp256k1 recovery.
    #[must_use]
    pub fn new(config: &LedgerConfig) -> Self {
        Self::with_recovery(config, Secp256k1Recovery)
    }
}

impl<R: SignerRecovery> PermitVerifier<R> {
    /// Verifier with a custom recovery capability.
    pub fn with_recovery(config: &LedgerConfig, recovery: R) -> Self {
        Self {
            domain_separator: domain_separator_for(config),
            domain: Eip712Domain::from_config(config),
            nonces: NonceRegistry::new(),
            recovery,
        }
    }

    #[must_use]
    pub fn domain_separator(&self) -> B256 {
        self.domain_separator
    }

    #[must_use]
    pub fn eip712_domain(&self) -> &Eip712Domain {
        &self.domain
    }

    /// Nonce the next permit for `owner` must carry.
    #[must_use]
    pub fn nonces(&self, owner: Address) -> U256 {
        self.nonces.current(owner)
    }

    /// Digest `owner` must sign right now to approve `spender` for `value`.
    #[must_use]
    pub fn digest_for(&self, owner: Address, spender: Address, value: U256, deadline: U256) -> B256 {
        Permit {
            owner,
            spender,
            value,
            nonce: self.nonces.current(owner),
            deadline,
        }
        .digest(self.domain_separator)
    }

    /// Validate `request` at time `now` and, on success, set the allowance.
    ///
    /// # Errors
    /// - `ExpiredSignature` if `now > deadline`
    /// - `InvalidSignature` if the signature is malformed or not by `owner`
    /// - `InvalidApprover` / `InvalidSpender` for null identities
    pub fn permit(
        &mut self,
        allowances: &mut AllowanceRegistry,
        request: &PermitRequest,
        now: u64,
    ) -> Result<LedgerEvent> {
        let PermitRequest {
            owner,
            spender,
            value,
            deadline,
            signature,
        } = *request;

        if request.is_expired_at(now) {
            tracing::warn!(%owner, %deadline, now, "Permit rejected: expired");
            return Err(LedgerError::ExpiredSignature { deadline, now });
        }

        let nonce = self.nonces.current(owner);
        let digest = self.digest_for(owner, spender, value, deadline);
        let signer = self.recovery.recover(&digest, &signature).inspect_err(|err| {
            tracing::warn!(%owner, %nonce, %err, "Permit rejected: malformed signature");
        })?;
        if signer != owner {
            tracing::warn!(%owner, %signer, %nonce, "Permit rejected: signer mismatch");
            return Err(LedgerError::invalid_signature(format!(
                "recovered {signer}, expected {owner}"
            )));
        }
        allowances.check_approve(owner, spender)?;

        let used = self.nonces.consume(owner);
        let event = allowances.approve(owner, spender, value)?;

        tracing::debug!(%owner, %spender, %value, nonce = %used, "Permit accepted");
        Ok(event)
    }
}
