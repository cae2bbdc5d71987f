//! EIP-712 typed structured data hashing for permits.
//!
//! ```text
//! domainSeparator = keccak256(DOMAIN_TYPEHASH ‖ keccak256(name) ‖ keccak256(version) ‖ chainId ‖ verifyingContract)
//! structHash      = keccak256(PERMIT_TYPEHASH ‖ owner ‖ spender ‖ value ‖ nonce ‖ deadline)
//! digest          = keccak256(0x19 ‖ 0x01 ‖ domainSeparator ‖ structHash)
//! ```
//!
//! Every field is ABI-encoded as one 32-byte word: addresses left-padded,
//! integers big-endian. The output is bit-for-bit what any EIP-712 signer
//! produces for the same inputs.

use alloy_primitives::{Address, B256, U256, b256, keccak256};
use hypesui_types::{LedgerConfig, constants};

/// `keccak256("EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)")`
pub const DOMAIN_TYPEHASH: B256 =
    b256!("0x8b73c3c69bb8fe3d512ecc4cf759cc79239f7b179b0ffacaa9a75d522b39400f");

/// `keccak256("Permit(address owner,address spender,uint256 value,uint256 nonce,uint256 deadline)")`
pub const PERMIT_TYPEHASH: B256 =
    b256!("0x6e71edae12b1b97f4d1f60370fef10105fa2faae0126114a169c64845d6126c9");

/// Type string hashed into [`DOMAIN_TYPEHASH`].
pub const DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

/// Type string hashed into [`PERMIT_TYPEHASH`].
pub const PERMIT_TYPE: &str =
    "Permit(address owner,address spender,uint256 value,uint256 nonce,uint256 deadline)";

/// Accumulates 32-byte ABI words for hashing.
struct AbiWords(Vec<u8>);

impl AbiWords {
    fn with_capacity(words: usize) -> Self {
        Self(Vec::with_capacity(words * 32))
    }

    fn word(mut self, w: B256) -> Self {
        self.0.extend_from_slice(w.as_slice());
        self
    }

    fn address(self, a: Address) -> Self {
        self.word(a.into_word())
    }

    fn uint(self, v: U256) -> Self {
        self.word(B256::from(v.to_be_bytes::<32>()))
    }

    fn hash(self) -> B256 {
        keccak256(&self.0)
    }
}

/// Domain separator for a ledger instance.
#[must_use]
pub fn domain_separator(
    name: &str,
    version: &str,
    chain_id: u64,
    verifying_contract: Address,
) -> B256 {
    AbiWords::with_capacity(5)
        .word(DOMAIN_TYPEHASH)
        .word(keccak256(name.as_bytes()))
        .word(keccak256(version.as_bytes()))
        .uint(U256::from(chain_id))
        .address(verifying_contract)
        .hash()
}

/// Domain separator of the HyperSui deployment described by `config`.
#[must_use]
pub fn domain_separator_for(config: &LedgerConfig) -> B256 {
    domain_separator(
        constants::TOKEN_NAME,
        constants::DOMAIN_VERSION,
        config.chain_id,
        config.ledger_address,
    )
}

/// Final signing digest: `keccak256(0x1901 ‖ domainSeparator ‖ structHash)`.
#[must_use]
pub fn typed_data_digest(domain_separator: B256, struct_hash: B256) -> B256 {
    let mut buf = [0u8; 66];
    buf[0] = 0x19;
    buf[1] = 0x01;
    buf[2..34].copy_from_slice(domain_separator.as_slice());
    buf[34..66].copy_from_slice(struct_hash.as_slice());
    keccak256(buf)
}

/// The signed permit message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permit {
    pub owner: Address,
    pub spender: Address,
    pub value: U256,
    pub nonce: U256,
    pub deadline: U256,
}

impl Permit {
    /// `hashStruct(Permit)`.
    #[must_use]
    pub fn struct_hash(&self) -> B256 {
        AbiWords::with_capacity(6)
            .word(PERMIT_TYPEHASH)
            .address(self.owner)
            .address(self.spender)
            .uint(self.value)
            .uint(self.nonce)
            .uint(self.deadline)
            .hash()
    }

    /// Digest to sign under `domain_separator`.
    #[must_use]
    pub fn digest(&self, domain_separator: B256) -> B256 {
        typed_data_digest(domain_separator, self.struct_hash())
    }
}
