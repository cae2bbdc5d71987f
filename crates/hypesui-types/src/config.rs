//! Configuration for a HyperSui ledger instance.

use std::path::Path;

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::{LedgerError, Result, constants};

/// Deployment parameters for a ledger.
///
/// Only where the ledger lives and who receives genesis are configurable.
/// Token metadata, the domain version and the genesis supply are fixed in
/// [`constants`]; a config that names them is rejected at parse time.
/// The domain separator and the genesis mint are derived from this exactly
/// once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LedgerConfig {
    /// Chain identifier bound into the domain separator.
    pub chain_id: u64,
    /// The ledger's own address (EIP-712 `verifyingContract`).
    pub ledger_address: Address,
    /// Account credited with the whole supply at genesis.
    pub deployer: Address,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            chain_id: constants::DEFAULT_CHAIN_ID,
            ledger_address: constants::DEFAULT_LEDGER_ADDRESS,
            deployer: constants::DEFAULT_DEPLOYER,
        }
    }
}

impl LedgerConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Override the chain id.
    #[must_use]
    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// Override the deployer.
    #[must_use]
    pub fn with_deployer(mut self, deployer: Address) -> Self {
        self.deployer = deployer;
        self
    }

    /// Override the ledger address.
    #[must_use]
    pub fn with_ledger_address(mut self, ledger_address: Address) -> Self {
        self.ledger_address = ledger_address;
        self
    }

    /// Reject configurations that cannot produce a sound ledger.
    ///
    /// # Errors
    /// Returns [`LedgerError::Configuration`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        let fail = |msg: &str| Err(LedgerError::Configuration(msg.to_string()));
        if self.chain_id == 0 {
            return fail("chain_id must be non-zero");
        }
        if self.deployer == constants::NULL_ACCOUNT {
            return fail("deployer must not be the null account");
        }
        if self.ledger_address == constants::NULL_ACCOUNT {
            return fail("ledger_address must not be the null account");
        }
        Ok(())
    }
}

/// EIP-5267 description of the signing domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eip712Domain {
    /// Bitmap of the populated fields: name, version, chainId, verifyingContract.
    pub fields: u8,
    pub name: String,
    pub version: String,
    pub chain_id: u64,
    pub verifying_contract: Address,
    pub salt: [u8; 32],
    pub extensions: Vec<U256>,
}

impl Eip712Domain {
    /// `0b01111`: name, version, chainId and verifyingContract are set.
    pub const FIELDS: u8 = 0x0f;

    /// Domain described by a ledger config.
    #[must_use]
    pub fn from_config(config: &LedgerConfig) -> Self {
        Self {
            fields: Self::FIELDS,
            name: constants::TOKEN_NAME.to_string(),
            version: constants::DOMAIN_VERSION.to_string(),
            chain_id: config.chain_id,
            verifying_contract: config.ledger_address,
            salt: [0u8; 32],
            extensions: Vec::new(),
        }
    }
}
