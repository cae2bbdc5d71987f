//! Permit attack scenarios against the public token surface.
//!
//! Each test plays an adversary holding a valid or forged signature and
//! checks that neither nonces nor allowances move when the attack fails.

use std::sync::Arc;

use alloy_primitives::uint;
use hypesui_permit::TestSigner;
use hypesui_token::{
    Address, HyperSui, LedgerConfig, LedgerError, PermitRequest, PermitSignature, U256, constants,
};
use hypesui_types::{
    B256,
    test_helpers::{ManualClock, random_account},
    tokens,
};

const NOW: u64 = 1_750_000_000;

const SECP256K1_ORDER: U256 =
    uint!(0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141_U256);

fn deploy_at(now: u64) -> (HyperSui, Arc<ManualClock>) {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    let clock = Arc::new(ManualClock::at(now));
    let token = HyperSui::with_clock(LedgerConfig::default(), clock.clone()).unwrap();
    (token, clock)
}

fn sign(
    token: &HyperSui,
    signer: &TestSigner,
    spender: Address,
    value: U256,
    deadline: U256,
) -> PermitSignature {
    signer.sign_digest(&token.permit_digest(signer.address(), spender, value, deadline))
}

#[test]
fn permit_then_spend() {
    let (mut token, _) = deploy_at(NOW);
    let owner = TestSigner::random();
    let spender = random_account();
    let deadline = U256::from(NOW + 3_600);

    token
        .transfer(constants::DEFAULT_DEPLOYER, owner.address(), tokens(10))
        .unwrap();
    let sig = sign(&token, &owner, spender, tokens(7), deadline);

    // Submitted by a third party.
    token
        .permit(owner.address(), spender, tokens(7), deadline, sig)
        .unwrap();
    assert_eq!(token.allowance(owner.address(), spender), tokens(7));
    assert_eq!(token.nonces(owner.address()), U256::from(1u64));

    token
        .transfer_from(spender, owner.address(), spender, tokens(7))
        .unwrap();
    assert_eq!(token.balance_of(spender), tokens(7));
    assert_eq!(token.allowance(owner.address(), spender), U256::ZERO);
}

#[test]
fn replayed_signature_rejected() {
    let (mut token, _) = deploy_at(NOW);
    let owner = TestSigner::random();
    let spender = random_account();
    let sig = sign(&token, &owner, spender, tokens(1), U256::MAX);

    token
        .permit(owner.address(), spender, tokens(1), U256::MAX, sig)
        .unwrap();
    token.approve(owner.address(), spender, U256::ZERO).unwrap();

    let err = token
        .permit(owner.address(), spender, tokens(1), U256::MAX, sig)
        .unwrap_err();
    assert!(matches!(err, LedgerError::InvalidSignature { .. }));
    assert_eq!(token.allowance(owner.address(), spender), U256::ZERO);
    assert_eq!(token.nonces(owner.address()), U256::from(1u64));
}

#[test]
fn expiry_follows_the_clock() {
    let (mut token, clock) = deploy_at(NOW);
    let owner = TestSigner::random();
    let spender = random_account();
    let deadline = U256::from(NOW + 10);
    let sig = sign(&token, &owner, spender, tokens(1), deadline);

    clock.advance(11);
    let err = token
        .permit(owner.address(), spender, tokens(1), deadline, sig)
        .unwrap_err();
    assert_eq!(
        err,
        LedgerError::ExpiredSignature {
            deadline,
            now: NOW + 11
        }
    );
    assert_eq!(token.nonces(owner.address()), U256::ZERO);

    // The same signature is still good once the clock is back in range.
    clock.set(NOW + 10);
    token
        .permit(owner.address(), spender, tokens(1), deadline, sig)
        .unwrap();
}

#[test]
fn forged_owner_rejected() {
    let (mut token, _) = deploy_at(NOW);
    let victim = constants::DEFAULT_DEPLOYER;
    let attacker = TestSigner::random();
    let deadline = U256::from(NOW + 60);

    let digest = token.permit_digest(victim, attacker.address(), U256::MAX, deadline);
    let sig = attacker.sign_digest(&digest);

    let err = token
        .permit(victim, attacker.address(), U256::MAX, deadline, sig)
        .unwrap_err();
    assert!(matches!(err, LedgerError::InvalidSignature { .. }));
    assert_eq!(token.allowance(victim, attacker.address()), U256::ZERO);
    assert_eq!(token.nonces(victim), U256::ZERO);
}

#[test]
fn signature_bound_to_domain() {
    let (mut token, _) = deploy_at(NOW);
    let clock = Arc::new(ManualClock::at(NOW));
    let fork =
        HyperSui::with_clock(LedgerConfig::default().with_chain_id(1), clock).unwrap();
    assert_ne!(fork.domain_separator(), token.domain_separator());

    let owner = TestSigner::random();
    let spender = random_account();
    let sig = sign(&fork, &owner, spender, tokens(1), U256::MAX);

    assert!(
        token
            .permit(owner.address(), spender, tokens(1), U256::MAX, sig)
            .is_err()
    );
    assert_eq!(token.nonces(owner.address()), U256::ZERO);
}

#[test]
fn malleated_signature_rejected() {
    let (mut token, _) = deploy_at(NOW);
    let owner = TestSigner::random();
    let spender = random_account();
    let sig = sign(&token, &owner, spender, tokens(1), U256::MAX);

    // (r, n - s) with the parity flipped recovers the same key but is not canonical.
    let s = U256::from_be_bytes(sig.s.0);
    let flipped = PermitSignature::new(
        if sig.v == 27 { 28 } else { 27 },
        sig.r,
        B256::from((SECP256K1_ORDER - s).to_be_bytes::<32>()),
    );

    let err = token
        .permit(owner.address(), spender, tokens(1), U256::MAX, flipped)
        .unwrap_err();
    assert!(matches!(err, LedgerError::InvalidSignature { .. }));
    assert_eq!(token.nonces(owner.address()), U256::ZERO);
}

#[test]
fn permit_request_from_wire_signature() {
    let (mut token, _) = deploy_at(NOW);
    let owner = TestSigner::random();
    let spender = random_account();
    let sig = sign(&token, &owner, spender, U256::MAX, U256::MAX);

    let wire = sig.to_string();
    let request = PermitRequest {
        owner: owner.address(),
        spender,
        value: U256::MAX,
        deadline: U256::MAX,
        signature: PermitSignature::from_hex(&wire).unwrap(),
    };
    token.submit_permit(&request).unwrap();
    assert_eq!(token.allowance(owner.address(), spender), U256::MAX);
}

#[test]
fn nonces_are_per_owner() {
    let (mut token, _) = deploy_at(NOW);
    let (a, b) = (TestSigner::random(), TestSigner::random());
    let spender = random_account();

    for _ in 0..2 {
        let sig = sign(&token, &a, spender, tokens(1), U256::MAX);
        token
            .permit(a.address(), spender, tokens(1), U256::MAX, sig)
            .unwrap();
    }
    assert_eq!(token.nonces(a.address()), U256::from(2u64));
    assert_eq!(token.nonces(b.address()), U256::ZERO);
}
