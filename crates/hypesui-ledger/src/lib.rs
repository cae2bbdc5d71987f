//! # hypesui-ledger
//!
//! **Bookkeeping plane** of the HyperSui token: balances, total supply,
//! allowances and burns. No cryptography lives here.
//!
//! ## Architecture
//!
//! 1. **Ledger**: balances per account and the total supply
//! 2. **AllowanceRegistry**: owner → spender spending limits, `transfer_from`
//! 3. **burn**: self-burn and allowance-authorized burn over the two above
//! 4. **SupplyConservation**: `Σ balances == totalSupply == genesis − Σ burned`
//!
//! ## Atomicity
//!
//! Multi-step operations are split into a read-only *plan* step that runs
//! every check and computes post-state values, and an infallible *apply*
//! step that writes them. A failure in any plan leaves all tables untouched.
//! Plans hold absolute post-state values, so they stay private to this crate
//! and are always applied straight after planning.
//!
//! ```text
//! transfer_from: plan_spend → plan_transfer → apply_spend → apply_transfer
//! burn_from:     plan_spend → plan_burn     → apply_spend → apply_burn
//! ```

pub mod allowance;
pub mod balances;
pub mod burn;
pub mod supply_conservation;

pub use allowance::AllowanceRegistry;
pub use balances::Ledger;
pub use burn::{burn, burn_from};
pub use supply_conservation::SupplyConservation;
