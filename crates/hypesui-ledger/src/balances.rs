//! Balance ledger: per-account balances and the total supply.
//!
//! Every mutation is a balance delta that either applies in full or not at
//! all. Untouched accounts read as zero.

use std::collections::HashMap;

use alloy_primitives::{Address, U256};
use hypesui_types::{LedgerError, LedgerEvent, Result, constants::NULL_ACCOUNT};

/// A validated transfer, ready to apply.
///
/// Carries the post-transfer balances, so applying it cannot fail. A plan is
/// only valid until the next mutation of the [`Ledger`] that produced it,
/// which is why plans never leave this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub(crate) struct TransferPlan {
    from: Address,
    to: Address,
    amount: U256,
    from_after: U256,
    to_after: U256,
}

/// A validated burn, ready to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub(crate) struct BurnPlan {
    from: Address,
    amount: U256,
    from_after: U256,
    supply_after: U256,
}

/// Source of truth for balances and total supply.
#[derive(Debug, Default)]
pub struct Ledger {
    /// Per-account balances in base units.
    balances: HashMap<Address, U256>,
    /// Sum of all balances.
    total_supply: U256,
    /// Set once the genesis mint has happened.
    minted: bool,
}

impl Ledger {
    /// Create an empty ledger. Nothing exists until [`Ledger::mint_genesis`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit the entire supply to `to`. Callable exactly once.
    ///
    /// # Errors
    /// - `GenesisAlreadyMinted` if genesis already happened
    /// - `InvalidReceiver` if `to` is the null account
    pub fn mint_genesis(&mut self, to: Address, amount: U256) -> Result<LedgerEvent> {
        if self.minted {
            return Err(LedgerError::GenesisAlreadyMinted);
        }
        if to == NULL_ACCOUNT {
            return Err(LedgerError::InvalidReceiver(to));
        }

        self.balances.insert(to, amount);
        self.total_supply = amount;
        self.minted = true;

        tracing::info!(deployer = %to, supply = %amount, "Genesis mint");
        Ok(LedgerEvent::Transfer {
            from: NULL_ACCOUNT,
            to,
            value: amount,
        })
    }

    /// Validate a transfer without touching state.
    ///
    /// # Errors
    /// - `InvalidSender` if `from` is null
    /// - `InvalidReceiver` if `to` is null (for any amount, including zero)
    /// - `InsufficientBalance` if `balance[from] < amount`
    pub(crate) fn plan_transfer(&self, from: Address, to: Address, amount: U256) -> Result<TransferPlan> {
        if from == NULL_ACCOUNT {
            return Err(LedgerError::InvalidSender(from));
        }
        if to == NULL_ACCOUNT {
            return Err(LedgerError::InvalidReceiver(to));
        }

        let from_balance = self.balance_of(from);
        if from_balance < amount {
            return Err(LedgerError::InsufficientBalance {
                account: from,
                balance: from_balance,
                needed: amount,
            });
        }

        let (from_after, to_after) = if from == to {
            (from_balance, from_balance)
        } else {
            let to_after = self
                .balance_of(to)
                .checked_add(amount)
                .ok_or(LedgerError::BalanceOverflow(to))?;
            (from_balance - amount, to_after)
        };

        Ok(TransferPlan {
            from,
            to,
            amount,
            from_after,
            to_after,
        })
    }

    /// Write a planned transfer.
    pub(crate) fn apply_transfer(&mut self, plan: TransferPlan) -> LedgerEvent {
        self.balances.insert(plan.from, plan.from_after);
        self.balances.insert(plan.to, plan.to_after);

        tracing::debug!(
            from = %plan.from,
            to = %plan.to,
            amount = %plan.amount,
            "Transfer applied"
        );
        LedgerEvent::Transfer {
            from: plan.from,
            to: plan.to,
            value: plan.amount,
        }
    }

    /// Move `amount` from `from` to `to`.
    ///
    /// # Errors
    /// - `InvalidSender` if `from` is null
    /// - `InvalidReceiver` if `to` is null (for any amount, including zero)
    /// - `InsufficientBalance` if `balance[from] < amount`
    pub fn transfer(&mut self, from: Address, to: Address, amount: U256) -> Result<LedgerEvent> {
        let plan = self.plan_transfer(from, to, amount)?;
        Ok(self.apply_transfer(plan))
    }

    /// Validate a burn without touching state.
    ///
    /// # Errors
    /// - `InvalidSender` if `from` is null
    /// - `InsufficientBalance` if `balance[from] < amount`
    pub(crate) fn plan_burn(&self, from: Address, amount: U256) -> Result<BurnPlan> {
        if from == NULL_ACCOUNT {
            return Err(LedgerError::InvalidSender(from));
        }
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            return Err(LedgerError::InsufficientBalance {
                account: from,
                balance: from_balance,
                needed: amount,
            });
        }
        // balance[from] <= total_supply, so this cannot underflow.
        let supply_after = self
            .total_supply
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::SupplyInvariantViolation {
                reason: format!(
                    "burn of {amount} exceeds total supply {}",
                    self.total_supply
                ),
            })?;

        Ok(BurnPlan {
            from,
            amount,
            from_after: from_balance - amount,
            supply_after,
        })
    }

    /// Write a planned burn.
    pub(crate) fn apply_burn(&mut self, plan: BurnPlan) -> LedgerEvent {
        self.balances.insert(plan.from, plan.from_after);
        self.total_supply = plan.supply_after;

        tracing::debug!(
            from = %plan.from,
            amount = %plan.amount,
            supply = %plan.supply_after,
            "Burn applied"
        );
        LedgerEvent::Transfer {
            from: plan.from,
            to: NULL_ACCOUNT,
            value: plan.amount,
        }
    }

    /// Destroy `amount` of `from`'s balance, shrinking the total supply.
    ///
    /// # Errors
    /// - `InvalidSender` if `from` is null
    /// - `InsufficientBalance` if `balance[from] < amount`
    pub fn burn(&mut self, from: Address, amount: U256) -> Result<LedgerEvent> {
        let plan = self.plan_burn(from, amount)?;
        Ok(self.apply_burn(plan))
    }

    /// Balance of `account`; zero if never touched.
    #[must_use]
    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn total_supply(&self) -> U256 {
        self.total_supply
    }

    /// Whether the genesis mint has happened.
    #[must_use]
    pub fn is_minted(&self) -> bool {
        self.minted
    }

    /// Recompute `Σ balances`. `None` if the sum overflows 256 bits.
    #[must_use]
    pub fn sum_balances(&self) -> Option<U256> {
        self.balances
            .values()
            .try_fold(U256::ZERO, |acc, b| acc.checked_add(*b))
    }

    /// Number of accounts holding a non-zero balance.
    #[must_use]
    pub fn holders(&self) -> usize {
        self.balances.values().filter(|b| !b.is_zero()).count()
    }
}

#[cfg(test)]
mod tests {
    use hypesui_types::{test_helpers::random_account, tokens};

    use super::*;

    fn funded(amount: U256) -> (Ledger, Address) {
        let mut ledger = Ledger::new();
        let owner = random_account();
        ledger.mint_genesis(owner, amount).unwrap();
        (ledger, owner)
    }

    #[test]
    fn genesis_credits_supply() {
        let (ledger, owner) = funded(tokens(1_000));
        assert_eq!(ledger.balance_of(owner), tokens(1_000));
        assert_eq!(ledger.total_supply(), tokens(1_000));
        assert!(ledger.is_minted());
    }

    #[test]
    fn genesis_emits_mint_event() {
        let mut ledger = Ledger::new();
        let owner = random_account();
        let ev = ledger.mint_genesis(owner, tokens(1)).unwrap();
        assert!(ev.is_mint());
    }

    #[test]
    fn second_genesis_rejected() {
        let (mut ledger, owner) = funded(tokens(10));
        let err = ledger.mint_genesis(owner, tokens(10)).unwrap_err();
        assert_eq!(err, LedgerError::GenesisAlreadyMinted);
        assert_eq!(ledger.total_supply(), tokens(10));
        assert_eq!(ledger.balance_of(owner), tokens(10));
    }

    #[test]
    fn transfer_moves_balance() {
        let (mut ledger, owner) = funded(tokens(100));
        let bob = random_account();
        ledger.transfer(owner, bob, tokens(40)).unwrap();
        assert_eq!(ledger.balance_of(owner), tokens(60));
        assert_eq!(ledger.balance_of(bob), tokens(40));
        assert_eq!(ledger.total_supply(), tokens(100));
    }

    #[test]
    fn transfer_insufficient_fails_unchanged() {
        let (mut ledger, owner) = funded(tokens(5));
        let bob = random_account();
        let err = ledger.transfer(owner, bob, tokens(6)).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::InsufficientBalance { balance, needed, .. }
                if balance == tokens(5) && needed == tokens(6)
        ));
        assert_eq!(ledger.balance_of(owner), tokens(5));
        assert_eq!(ledger.balance_of(bob), U256::ZERO);
    }

    #[test]
    fn transfer_to_null_fails_for_zero_amount() {
        let (mut ledger, owner) = funded(tokens(5));
        let err = ledger.transfer(owner, NULL_ACCOUNT, U256::ZERO).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidReceiver(_)));
    }

    #[test]
    fn transfer_from_null_fails() {
        let (mut ledger, _) = funded(tokens(5));
        let err = ledger
            .transfer(NULL_ACCOUNT, random_account(), U256::ZERO)
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidSender(_)));
    }

    #[test]
    fn zero_transfer_emits_event() {
        let (mut ledger, owner) = funded(tokens(5));
        let bob = random_account();
        let ev = ledger.transfer(owner, bob, U256::ZERO).unwrap();
        assert_eq!(
            ev,
            LedgerEvent::Transfer {
                from: owner,
                to: bob,
                value: U256::ZERO
            }
        );
    }

    #[test]
    fn self_transfer_keeps_balance() {
        let (mut ledger, owner) = funded(tokens(5));
        ledger.transfer(owner, owner, tokens(3)).unwrap();
        assert_eq!(ledger.balance_of(owner), tokens(5));
    }

    #[test]
    fn plan_does_not_mutate() {
        let (ledger, owner) = funded(tokens(5));
        let bob = random_account();
        let plan = ledger.plan_transfer(owner, bob, tokens(2)).unwrap();
        assert_eq!(plan.from_after, tokens(3));
        assert_eq!(plan.to_after, tokens(2));
        assert_eq!(ledger.balance_of(owner), tokens(5));
        assert_eq!(ledger.balance_of(bob), U256::ZERO);
    }

    #[test]
    fn repeated_debits_cannot_overdraw() {
        let (mut ledger, owner) = funded(tokens(100));
        let (b, c) = (random_account(), random_account());
        ledger.transfer(owner, b, tokens(60)).unwrap();
        let err = ledger.transfer(owner, c, tokens(60)).unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientBalance { .. }));
        ledger.transfer(owner, c, tokens(40)).unwrap();
        ledger.burn(owner, U256::ZERO).unwrap();
        assert!(ledger.burn(owner, tokens(1)).is_err());

        assert_eq!(ledger.balance_of(owner), U256::ZERO);
        assert_eq!(ledger.sum_balances(), Some(tokens(100)));
        assert_eq!(ledger.total_supply(), tokens(100));
    }

    #[test]
    fn burn_reduces_balance_and_supply() {
        let (mut ledger, owner) = funded(tokens(10));
        let ev = ledger.burn(owner, tokens(4)).unwrap();
        assert!(ev.is_burn());
        assert_eq!(ledger.balance_of(owner), tokens(6));
        assert_eq!(ledger.total_supply(), tokens(6));
    }

    #[test]
    fn burn_insufficient_fails() {
        let (mut ledger, owner) = funded(tokens(1));
        let err = ledger.burn(owner, tokens(2)).unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientBalance { .. }));
        assert_eq!(ledger.total_supply(), tokens(1));
    }

    #[test]
    fn sum_matches_supply_after_activity() {
        let (mut ledger, owner) = funded(tokens(1_000));
        let a = random_account();
        let b = random_account();
        ledger.transfer(owner, a, tokens(300)).unwrap();
        ledger.transfer(a, b, tokens(100)).unwrap();
        ledger.burn(b, tokens(50)).unwrap();
        assert_eq!(ledger.sum_balances(), Some(ledger.total_supply()));
        assert_eq!(ledger.holders(), 3);
    }

    #[test]
    fn untouched_account_is_zero() {
        let ledger = Ledger::new();
        assert_eq!(ledger.balance_of(random_account()), U256::ZERO);
        assert_eq!(ledger.holders(), 0);
    }
}
