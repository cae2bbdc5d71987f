//! Error types for the HyperSui ledger.
//!
//! All errors use the `HS_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Balance / transfer errors
//! - 2xx: Allowance errors
//! - 3xx: Permit / signature errors
//! - 8xx: Invariant errors
//! - 9xx: General / internal errors
//!
//! Every error aborts the operation that raised it with no state change.

use alloy_primitives::{Address, U256};
use thiserror::Error;

/// Central error enum for all HyperSui ledger operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    // =================================================================
    // Balance / Transfer Errors (1xx)
    // =================================================================
    /// The debited account holds less than the requested amount.
    #[error("HS_ERR_100: Insufficient balance for {account}: need {needed}, have {balance}")]
    InsufficientBalance {
        account: Address,
        balance: U256,
        needed: U256,
    },

    /// Transfer destination is the null identifier.
    #[error("HS_ERR_101: Invalid receiver: {0}")]
    InvalidReceiver(Address),

    /// Transfer or burn source is the null identifier.
    #[error("HS_ERR_102: Invalid sender: {0}")]
    InvalidSender(Address),

    /// A credit would overflow the 256-bit amount range.
    #[error("HS_ERR_103: Balance overflow for {0}")]
    BalanceOverflow(Address),

    /// The one-time genesis mint was attempted again.
    #[error("HS_ERR_104: Genesis mint already performed")]
    GenesisAlreadyMinted,

    // =================================================================
    // Allowance Errors (2xx)
    // =================================================================
    /// The spender's allowance is below the requested amount.
    #[error("HS_ERR_200: Insufficient allowance for {spender}: need {needed}, have {allowance}")]
    InsufficientAllowance {
        spender: Address,
        allowance: U256,
        needed: U256,
    },

    /// Approval owner is the null identifier.
    #[error("HS_ERR_201: Invalid approver: {0}")]
    InvalidApprover(Address),

    /// Approval spender is the null identifier.
    #[error("HS_ERR_202: Invalid spender: {0}")]
    InvalidSpender(Address),

    // =================================================================
    // Permit / Signature Errors (3xx)
    // =================================================================
    /// The permit deadline is in the past.
    #[error("HS_ERR_300: Expired signature: deadline {deadline} < now {now}")]
    ExpiredSignature { deadline: U256, now: u64 },

    /// The signature is malformed or was not produced by the owner.
    #[error("HS_ERR_301: Invalid signature: {reason}")]
    InvalidSignature { reason: String },

    // =================================================================
    // Invariant Errors (8xx)
    // =================================================================
    /// Supply conservation invariant violated — critical safety alert.
    #[error("HS_ERR_800: Supply invariant violation: {reason}")]
    SupplyInvariantViolation { reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("HS_ERR_900: Internal error: {0}")]
    Internal(String),

    /// Serialization / deserialization error.
    #[error("HS_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// Configuration error (invalid config file, missing fields, etc.).
    #[error("HS_ERR_902: Configuration error: {0}")]
    Configuration(String),

    /// I/O error.
    #[error("HS_ERR_903: I/O error: {0}")]
    Io(String),
}

impl LedgerError {
    /// Shorthand for an [`LedgerError::InvalidSignature`] with a reason.
    pub fn invalid_signature(reason: impl Into<String>) -> Self {
        Self::InvalidSignature {
            reason: reason.into(),
        }
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, LedgerError>;

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_balance_display() {
        let err = LedgerError::InsufficientBalance {
            account: Address::repeat_byte(0x11),
            balance: U256::from(50u64),
            needed: U256::from(100u64),
        };
        let msg = format!("{err}");
        assert!(msg.starts_with("HS_ERR_100"), "Got: {msg}");
        assert!(msg.contains("100"));
        assert!(msg.contains("50"));
    }

    #[test]
    fn expired_signature_display() {
        let err = LedgerError::ExpiredSignature {
            deadline: U256::from(10u64),
            now: 11,
        };
        let msg = format!("{err}");
        assert!(msg.contains("HS_ERR_300"));
        assert!(msg.contains("deadline 10"));
    }

    #[test]
    fn all_errors_have_hs_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(LedgerError::InvalidReceiver(Address::ZERO)),
            Box::new(LedgerError::InvalidSpender(Address::ZERO)),
            Box::new(LedgerError::invalid_signature("bad v")),
            Box::new(LedgerError::Internal("test".into())),
            Box::new(LedgerError::GenesisAlreadyMinted),
            Box::new(LedgerError::SupplyInvariantViolation {
                reason: "a".into(),
            }),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("HS_ERR_"),
                "Error missing HS_ERR_ prefix: {msg}"
            );
        }
    }

    #[test]
    fn genesis_error_is_balance_subsystem() {
        let msg = LedgerError::GenesisAlreadyMinted.to_string();
        assert!(msg.starts_with("HS_ERR_104"), "Got: {msg}");
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        let err: LedgerError = io.into();
        assert!(matches!(err, LedgerError::Io(ref m) if m.contains("missing.json")));
    }
}
