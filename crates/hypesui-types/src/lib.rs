//! # hypesui-types
//!
//! Shared types, errors, and configuration for the **HyperSui** token ledger.
//!
//! This crate is the leaf dependency of the workspace; every other crate
//! depends on it. It defines:
//!
//! - **Primitives**: [`Address`], [`U256`], [`B256`] (re-exported from `alloy-primitives`)
//! - **Events**: [`LedgerEvent`] (`Transfer` / `Approval`)
//! - **Permit model**: [`PermitRequest`], [`PermitSignature`]
//! - **Configuration**: [`LedgerConfig`], [`Eip712Domain`]
//! - **Time**: [`Clock`], [`SystemClock`]
//! - **Units**: [`format_units`], [`parse_units`]
//! - **Errors**: [`LedgerError`] with `HS_ERR_` prefix codes
//! - **Constants**: token metadata and supply parameters

pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod permit;
pub mod signature;
pub mod units;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use alloy_primitives::{Address, B256, U256};

pub use clock::*;
pub use config::*;
pub use error::*;
pub use event::*;
pub use permit::*;
pub use signature::*;
pub use units::*;

// Constants are accessed via `hypesui_types::constants::FOO`
// (not re-exported to avoid name collisions).
