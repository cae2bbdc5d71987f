//! # hypesui-token
//!
//! Public surface of the **HyperSui** (`HYPESUI`) fixed-supply token.
//!
//! [`HyperSui`] owns one instance of each plane and exposes the standard
//! fungible-token operations with explicit callers:
//!
//! | Operation        | Plane                                   |
//! |------------------|-----------------------------------------|
//! | `transfer`       | `hypesui_ledger::Ledger`                |
//! | `approve`        | `hypesui_ledger::AllowanceRegistry`     |
//! | `transfer_from`  | allowance + ledger, planned then applied |
//! | `burn(_from)`    | `hypesui_ledger::burn`                  |
//! | `permit`         | `hypesui_permit::PermitVerifier`        |
//!
//! The whole supply is minted once, at construction, to the configured
//! deployer. There is no other way to create tokens.

pub mod token;

pub use token::HyperSui;

pub use hypesui_types::{
    Address, B256, Eip712Domain, LedgerConfig, LedgerError, LedgerEvent, PermitRequest,
    PermitSignature, Result, U256, constants,
};
