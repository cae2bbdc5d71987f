//! The HyperSui token: one owned ledger state behind the public surface.
//!
//! Callers are passed explicitly (the environment's `msg.sender`). Every
//! mutating method either applies all of its effects and appends its events,
//! or returns an error leaving balances, allowances, supply, nonces and the
//! event log exactly as they were.

use std::sync::Arc;

use alloy_primitives::{Address, B256, U256};
use hypesui_ledger::{AllowanceRegistry, Ledger, SupplyConservation, burn};
use hypesui_permit::PermitVerifier;
use hypesui_types::{
    Clock, Eip712Domain, LedgerConfig, LedgerEvent, PermitRequest, PermitSignature, Result,
    SystemClock, constants,
};

/// A fixed-supply token ledger with allowances, burns and permits.
pub struct HyperSui {
    config: LedgerConfig,
    ledger: Ledger,
    allowances: AllowanceRegistry,
    permits: PermitVerifier,
    supply: SupplyConservation,
    events: Vec<LedgerEvent>,
    clock: Arc<dyn Clock>,
}

impl HyperSui {
    /// Deploy with `config`, reading time from the host clock.
    ///
    /// # Errors
    /// Returns `Configuration` if `config` is invalid.
    pub fn new(config: LedgerConfig) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Deploy with an explicit time source.
    ///
    /// Performs the one and only mint: the fixed genesis supply to the
    /// configured deployer.
    ///
    /// # Errors
    /// Returns `Configuration` if `config` is invalid.
    pub fn with_clock(config: LedgerConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        config.validate()?;

        let mut ledger = Ledger::new();
        let genesis_supply = constants::max_supply();
        let genesis = ledger.mint_genesis(config.deployer, genesis_supply)?;
        let mut supply = SupplyConservation::new();
        supply.record_genesis(genesis_supply);

        let permits = PermitVerifier::new(&config);
        tracing::info!(
            name = constants::TOKEN_NAME,
            chain_id = config.chain_id,
            ledger = %config.ledger_address,
            domain_separator = %permits.domain_separator(),
            "HyperSui deployed"
        );

        Ok(Self {
            config,
            ledger,
            allowances: AllowanceRegistry::new(),
            permits,
            supply,
            events: vec![genesis],
            clock,
        })
    }

    /// Production deployment with default parameters.
    ///
    /// # Errors
    /// Never fails for the built-in defaults; kept fallible for symmetry.
    pub fn genesis() -> Result<Self> {
        Self::new(LedgerConfig::default())
    }

    // -----------------------------------------------------------------
    // Metadata
    // -----------------------------------------------------------------

    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn name(&self) -> &'static str {
        constants::TOKEN_NAME
    }

    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn symbol(&self) -> &'static str {
        constants::TOKEN_SYMBOL
    }

    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn decimals(&self) -> u8 {
        constants::DECIMALS
    }

    #[must_use]
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    // -----------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------

    #[must_use]
    pub fn total_supply(&self) -> U256 {
        self.ledger.total_supply()
    }

    #[must_use]
    pub fn balance_of(&self, account: Address) -> U256 {
        self.ledger.balance_of(account)
    }

    #[must_use]
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.allowance(owner, spender)
    }

    #[must_use]
    pub fn nonces(&self, owner: Address) -> U256 {
        self.permits.nonces(owner)
    }

    /// `DOMAIN_SEPARATOR()`.
    #[must_use]
    pub fn domain_separator(&self) -> B256 {
        self.permits.domain_separator()
    }

    /// EIP-5267 domain description.
    #[must_use]
    pub fn eip712_domain(&self) -> &Eip712Domain {
        self.permits.eip712_domain()
    }

    /// Digest `owner` must sign for a permit submitted next.
    #[must_use]
    pub fn permit_digest(&self, owner: Address, spender: Address, value: U256, deadline: U256) -> B256 {
        self.permits.digest_for(owner, spender, value, deadline)
    }

    /// Accounts with a non-zero balance.
    #[must_use]
    pub fn holders(&self) -> usize {
        self.ledger.holders()
    }

    /// Total destroyed by burns since genesis.
    #[must_use]
    pub fn total_burned(&self) -> U256 {
        self.supply.total_burned()
    }

    // -----------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------

    /// Move `amount` from `caller` to `to`.
    ///
    /// # Errors
    /// `InvalidReceiver`, `InsufficientBalance`.
    pub fn transfer(&mut self, caller: Address, to: Address, amount: U256) -> Result<bool> {
        let event = self.ledger.transfer(caller, to, amount)?;
        self.events.push(event);
        Ok(true)
    }

    /// Set `spender`'s allowance over `caller`'s balance to `amount`.
    ///
    /// # Errors
    /// `InvalidSpender` for a null spender.
    pub fn approve(&mut self, caller: Address, spender: Address, amount: U256) -> Result<bool> {
        let event = self.allowances.approve(caller, spender, amount)?;
        self.events.push(event);
        Ok(true)
    }

    /// `caller` moves `amount` from `from` to `to` against its allowance.
    ///
    /// # Errors
    /// `InsufficientAllowance`, `InvalidReceiver`, `InsufficientBalance`.
    pub fn transfer_from(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<bool> {
        let event = self
            .allowances
            .transfer_from(&mut self.ledger, caller, from, to, amount)?;
        self.events.push(event);
        Ok(true)
    }

    /// Destroy `amount` of `caller`'s own balance.
    ///
    /// # Errors
    /// `InsufficientBalance`.
    pub fn burn(&mut self, caller: Address, amount: U256) -> Result<()> {
        let event = burn::burn(&mut self.ledger, caller, amount)?;
        self.supply.record_burn(amount);
        self.events.push(event);
        Ok(())
    }

    /// `caller` destroys `amount` of `from`'s balance against its allowance.
    ///
    /// # Errors
    /// `InsufficientAllowance`, `InsufficientBalance`.
    pub fn burn_from(&mut self, caller: Address, from: Address, amount: U256) -> Result<()> {
        let event = burn::burn_from(
            &mut self.ledger,
            &mut self.allowances,
            caller,
            from,
            amount,
        )?;
        self.supply.record_burn(amount);
        self.events.push(event);
        Ok(())
    }

    /// Approve via an owner's signature. Anyone may submit it.
    ///
    /// # Errors
    /// `ExpiredSignature`, `InvalidSignature`, `InvalidSpender`.
    pub fn permit(
        &mut self,
        owner: Address,
        spender: Address,
        value: U256,
        deadline: U256,
        signature: PermitSignature,
    ) -> Result<()> {
        self.submit_permit(&PermitRequest {
            owner,
            spender,
            value,
            deadline,
            signature,
        })
    }

    /// [`HyperSui::permit`] taking a prepared request.
    ///
    /// # Errors
    /// See [`HyperSui::permit`].
    pub fn submit_permit(&mut self, request: &PermitRequest) -> Result<()> {
        let now = self.clock.now_unix();
        let event = self.permits.permit(&mut self.allowances, request, now)?;
        self.events.push(event);
        Ok(())
    }

    // -----------------------------------------------------------------
    // Events & invariants
    // -----------------------------------------------------------------

    /// Every event since genesis that has not been drained, oldest first.
    #[must_use]
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    /// Take the pending events, leaving the log empty.
    pub fn drain_events(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Check `Σ balances == totalSupply == genesis − Σ burned`.
    ///
    /// # Errors
    /// Returns `SupplyInvariantViolation` if any side disagrees.
    pub fn verify_supply(&self) -> Result<()> {
        self.supply.verify(&self.ledger)
    }
}

impl std::fmt::Debug for HyperSui {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperSui")
            .field("chain_id", &self.config.chain_id)
            .field("total_supply", &self.ledger.total_supply())
            .field("holders", &self.ledger.holders())
            .field("events", &self.events.len())
            .finish_non_exhaustive()
    }
}
