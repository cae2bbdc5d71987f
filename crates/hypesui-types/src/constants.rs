//! System-wide constants for the HyperSui ledger.

use alloy_primitives::{Address, U256, address};

/// Token name returned by `name()`.
pub const TOKEN_NAME: &str = "HyperSui";

/// Token symbol returned by `symbol()`.
pub const TOKEN_SYMBOL: &str = "HYPESUI";

/// Number of fractional decimals: one token = 10^18 base units.
pub const DECIMALS: u8 = 18;

/// EIP-712 domain version string.
pub const DOMAIN_VERSION: &str = "1";

/// Whole tokens minted at genesis.
pub const MAX_SUPPLY_TOKENS: u64 = 7_000_000_000;

/// Default chain identifier bound into the domain separator.
pub const DEFAULT_CHAIN_ID: u64 = 999;

/// Fixed deployer credited with the full supply at genesis.
pub const DEFAULT_DEPLOYER: Address = address!("0x5a9e7c2d1b4f8e63a0d7c5b2e91f4a6c3d8b0e27");

/// Default address of the ledger itself (EIP-712 `verifyingContract`).
pub const DEFAULT_LEDGER_ADDRESS: Address = address!("0x4859505e5355490000000000000000000000d1f1");

/// The null identifier. Transfers from it are mints, transfers to it are burns.
pub const NULL_ACCOUNT: Address = Address::ZERO;

/// Allowance value that is never decremented by use.
pub const UNLIMITED_ALLOWANCE: U256 = U256::MAX;

/// Largest decimals value for which `10^decimals` fits in a `U256`.
pub const MAX_DECIMALS: u8 = 77;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `10^decimals` as a `U256`.
#[must_use]
pub fn unit_scale(decimals: u8) -> U256 {
    U256::from(10u64).pow(U256::from(decimals))
}

/// Genesis supply in base units: `7_000_000_000 × 10^18`.
#[must_use]
pub fn max_supply() -> U256 {
    U256::from(MAX_SUPPLY_TOKENS) * unit_scale(DECIMALS)
}
