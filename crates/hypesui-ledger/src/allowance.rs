//! Allowance registry — owner → spender spending limits.
//!
//! `approve` overwrites, it never adds. An allowance equal to
//! [`UNLIMITED_ALLOWANCE`] is never decremented by use.

use std::collections::HashMap;

use alloy_primitives::{Address, U256};
use hypesui_types::{
    LedgerError, LedgerEvent, Result,
    constants::{NULL_ACCOUNT, UNLIMITED_ALLOWANCE},
};

use crate::balances::Ledger;

/// A validated allowance deduction, ready to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub(crate) struct AllowanceDebit {
    owner: Address,
    spender: Address,
    /// `None` when the allowance is unlimited and stays untouched.
    remaining: Option<U256>,
}

/// Owns the `(owner, spender) → limit` table.
#[derive(Debug, Default)]
pub struct AllowanceRegistry {
    allowances: HashMap<(Address, Address), U256>,
}

impl AllowanceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current limit for `spender` over `owner`'s funds; zero if never set.
    #[must_use]
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances
            .get(&(owner, spender))
            .copied()
            .unwrap_or_default()
    }

    /// Check that `(owner, spender)` is a valid approval pair.
    ///
    /// # Errors
    /// - `InvalidApprover` if `owner` is null
    /// - `InvalidSpender` if `spender` is null
    pub fn check_approve(&self, owner: Address, spender: Address) -> Result<()> {
        if owner == NULL_ACCOUNT {
            return Err(LedgerError::InvalidApprover(owner));
        }
        if spender == NULL_ACCOUNT {
            return Err(LedgerError::InvalidSpender(spender));
        }
        Ok(())
    }

    /// Set `allowance[owner][spender] = amount`, replacing any prior value.
    ///
    /// # Errors
    /// See [`AllowanceRegistry::check_approve`]. No entry is touched on error.
    pub fn approve(&mut self, owner: Address, spender: Address, amount: U256) -> Result<LedgerEvent> {
        self.check_approve(owner, spender)?;
        self.allowances.insert((owner, spender), amount);

        tracing::debug!(%owner, %spender, %amount, "Allowance set");
        Ok(LedgerEvent::Approval {
            owner,
            spender,
            value: amount,
        })
    }

    /// Validate spending `amount` of the allowance without touching state.
    ///
    /// # Errors
    /// Returns `InsufficientAllowance` if a limited allowance is below `amount`.
    pub(crate) fn plan_spend(&self, owner: Address, spender: Address, amount: U256) -> Result<AllowanceDebit> {
        let current = self.allowance(owner, spender);
        if current == UNLIMITED_ALLOWANCE {
            return Ok(AllowanceDebit {
                owner,
                spender,
                remaining: None,
            });
        }
        if current < amount {
            return Err(LedgerError::InsufficientAllowance {
                spender,
                allowance: current,
                needed: amount,
            });
        }
        Ok(AllowanceDebit {
            owner,
            spender,
            remaining: Some(current - amount),
        })
    }

    /// Write a planned deduction. Emits no event.
    pub(crate) fn apply_spend(&mut self, debit: AllowanceDebit) {
        if let Some(remaining) = debit.remaining {
            self.allowances
                .insert((debit.owner, debit.spender), remaining);
        }
    }

    /// Deduct `amount` from `spender`'s allowance over `owner`.
    ///
    /// # Errors
    /// Returns `InsufficientAllowance` if a limited allowance is below `amount`.
    pub fn spend_allowance(&mut self, owner: Address, spender: Address, amount: U256) -> Result<()> {
        let debit = self.plan_spend(owner, spender, amount)?;
        self.apply_spend(debit);
        Ok(())
    }

    /// Delegated transfer: `spender` moves `amount` from `owner` to `to`.
    ///
    /// Both the allowance and the transfer are validated before either is
    /// written, so a failure in the second step leaves the allowance intact.
    ///
    /// # Errors
    /// `InsufficientAllowance` first, then `InvalidSender`, `InvalidReceiver`
    /// or `InsufficientBalance` from the transfer.
    pub fn transfer_from(
        &mut self,
        ledger: &mut Ledger,
        spender: Address,
        owner: Address,
        to: Address,
        amount: U256,
    ) -> Result<LedgerEvent> {
        let debit = self.plan_spend(owner, spender, amount)?;
        let transfer = ledger.plan_transfer(owner, to, amount)?;

        self.apply_spend(debit);
        Ok(ledger.apply_transfer(transfer))
    }

    /// Number of stored `(owner, spender)` entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.allowances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.allowances.is_empty()
    }
}
