//! Observable ledger events.
//!
//! Events are ordered log entries, not part of mutable state. A `Transfer`
//! whose `from` is the null identifier is the genesis mint; one whose `to`
//! is the null identifier is a burn.

use alloy_primitives::{Address, B256, U256, keccak256};
use serde::{Deserialize, Serialize};

use crate::constants::NULL_ACCOUNT;

/// A single entry in the ledger's event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum LedgerEvent {
    /// Value moved from one account to another (or minted / burned).
    Transfer {
        from: Address,
        to: Address,
        value: U256,
    },
    /// An allowance was set.
    Approval {
        owner: Address,
        spender: Address,
        value: U256,
    },
}

impl LedgerEvent {
    /// Canonical event signature, as used for EVM log topics.
    #[must_use]
    pub fn signature(&self) -> &'static str {
        match self {
            Self::Transfer { .. } => "Transfer(address,address,uint256)",
            Self::Approval { .. } => "Approval(address,address,uint256)",
        }
    }

    /// First log topic: `keccak256(signature)`.
    #[must_use]
    pub fn topic0(&self) -> B256 {
        keccak256(self.signature())
    }

    /// Whether this is the genesis mint.
    #[must_use]
    pub fn is_mint(&self) -> bool {
        matches!(self, Self::Transfer { from, .. } if *from == NULL_ACCOUNT)
    }

    /// Whether this records a burn.
    #[must_use]
    pub fn is_burn(&self) -> bool {
        matches!(self, Self::Transfer { to, .. } if *to == NULL_ACCOUNT)
    }
}

impl std::fmt::Display for LedgerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transfer { from, to, value } => write!(f, "Transfer({from}, {to}, {value})"),
            Self::Approval {
                owner,
                spender,
                value,
            } => write!(f, "Approval({owner}, {spender}, {value})"),
        }
    }
}
