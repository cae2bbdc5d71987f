//! Burn policy over [`Ledger`] and [`AllowanceRegistry`].
//!
//! An account may burn its own balance directly, or a spender may burn an
//! owner's balance against an allowance. `burn_from` honours the unlimited
//! allowance exactly like `transfer_from`.

use alloy_primitives::{Address, U256};
use hypesui_types::{LedgerEvent, Result};

use crate::{allowance::AllowanceRegistry, balances::Ledger};

/// `caller` destroys `amount` of its own balance.
///
/// # Errors
/// `InvalidSender` or `InsufficientBalance`.
pub fn burn(ledger: &mut Ledger, caller: Address, amount: U256) -> Result<LedgerEvent> {
    ledger.burn(caller, amount)
}

/// `spender` destroys `amount` of `owner`'s balance, consuming allowance.
///
/// Aborts without any effect if either the allowance or the balance is short.
///
/// # Errors
/// `InsufficientAllowance` first, then `InvalidSender` or
/// `InsufficientBalance` from the burn.
pub fn burn_from(
    ledger: &mut Ledger,
    allowances: &mut AllowanceRegistry,
    spender: Address,
    owner: Address,
    amount: U256,
) -> Result<LedgerEvent> {
    let debit = allowances.plan_spend(owner, spender, amount)?;
    let plan = ledger.plan_burn(owner, amount)?;

    allowances.apply_spend(debit);
    Ok(ledger.apply_burn(plan))
}
