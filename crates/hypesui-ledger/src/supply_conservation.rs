//! Supply conservation invariant checker.
//!
//! Invariant enforced at every observable state:
//! ```text
//! Σ balances == totalSupply == genesis − Σ burned
//! ```
//!
//! Transfers move value without changing either side. If this ever breaks,
//! something has created or destroyed value outside the burn path.

use alloy_primitives::U256;
use hypesui_types::{LedgerError, Result};

use crate::balances::Ledger;

/// Tracks genesis issuance and cumulative burns.
#[derive(Debug, Default)]
pub struct SupplyConservation {
    /// Supply minted at genesis.
    genesis: U256,
    /// Total burned since genesis.
    burned: U256,
    /// Number of burn operations.
    burn_count: u64,
}

impl SupplyConservation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the genesis mint.
    pub fn record_genesis(&mut self, amount: U256) {
        self.genesis = amount;
    }

    /// Record a burn.
    pub fn record_burn(&mut self, amount: U256) {
        self.burned = self.burned.saturating_add(amount);
        self.burn_count += 1;
    }

    /// Expected total supply: genesis − burned.
    #[must_use]
    pub fn expected_supply(&self) -> U256 {
        self.genesis.saturating_sub(self.burned)
    }

    #[must_use]
    pub fn total_burned(&self) -> U256 {
        self.burned
    }

    #[must_use]
    pub fn burn_count(&self) -> u64 {
        self.burn_count
    }

    /// Verify the ledger against the recorded history.
    ///
    /// # Errors
    /// Returns [`LedgerError::SupplyInvariantViolation`] if any side disagrees.
    pub fn verify(&self, ledger: &Ledger) -> Result<()> {
        let expected = self.expected_supply();
        let total = ledger.total_supply();
        let Some(sum) = ledger.sum_balances() else {
            return Err(Self::violation("sum of balances overflows 256 bits".to_string()));
        };

        if sum != total {
            return Err(Self::violation(format!(
                "sum of balances {sum} != total supply {total}"
            )));
        }
        if total != expected {
            return Err(Self::violation(format!(
                "total supply {total} != expected {expected} (genesis={}, burned={})",
                self.genesis, self.burned
            )));
        }
        Ok(())
    }

    fn violation(reason: String) -> LedgerError {
        tracing::warn!(%reason, "Supply invariant violated");
        LedgerError::SupplyInvariantViolation { reason }
    }
}
