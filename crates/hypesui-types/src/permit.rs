//! Signed approval request submitted on the owner's behalf.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::PermitSignature;

/// Arguments of a `permit` call.
///
/// The nonce is not part of the request: the verifier always signs against
/// the owner's current nonce, so a request can only ever validate once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermitRequest {
    pub owner: Address,
    pub spender: Address,
    pub value: U256,
    /// Unix timestamp (seconds) after which the signature is void.
    pub deadline: U256,
    pub signature: PermitSignature,
}

impl PermitRequest {
    /// Whether `now` is past the deadline.
    #[must_use]
    pub fn is_expired_at(&self, now: u64) -> bool {
        U256::from(now) > self.deadline
    }
}
