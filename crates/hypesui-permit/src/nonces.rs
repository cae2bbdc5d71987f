//! Per-owner permit nonces.
//!
//! Each owner has a counter starting at 0. A permit is always signed over
//! the owner's *current* counter, and consuming it advances the counter by
//! exactly one, so every signature can validate at most once. Counters are
//! never reset or decremented.

use std::collections::HashMap;

use alloy_primitives::{Address, U256};

/// Owner → next unused nonce.
#[derive(Debug, Default)]
pub struct NonceRegistry {
    nonces: HashMap<Address, U256>,
}

impl NonceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Nonce the next permit for `owner` must be signed over.
    #[must_use]
    pub fn current(&self, owner: Address) -> U256 {
        self.nonces.get(&owner).copied().unwrap_or_default()
    }

    /// Advance `owner`'s counter and return the nonce that was consumed.
    pub fn consume(&mut self, owner: Address) -> U256 {
        let entry = self.nonces.entry(owner).or_default();
        let used = *entry;
        // A 256-bit counter advanced once per signature cannot wrap in practice.
        *entry = used.saturating_add(U256::from(1u64));
        used
    }

    /// Number of owners that have consumed at least one nonce.
    #[must_use]
    pub fn tracked_owners(&self) -> usize {
        self.nonces.len()
    }
}
