//! Role isolation: owner-only and funder-only entry points reject every
//! other address and leave state untouched.

use super::*;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{token, vec, Address, Env};

struct RbacSetup<'a> {
    env: Env,
    owner: Address,
    funder: Address,
    grantee: Address,
    random: Address,
    token: token::Client<'a>,
    token_admin: token::StellarAssetClient<'a>,
    client: MatchPayoutsContractClient<'a>,
}

impl<'a> RbacSetup<'a> {
    fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        let contract_id = env.register_contract(None, MatchPayoutsContract);
        let client = MatchPayoutsContractClient::new(&env, &contract_id);

        let owner = Address::generate(&env);
        let funder = Address::generate(&env);
        let grantee = Address::generate(&env);
        let random = Address::generate(&env);

        let token_issuer = Address::generate(&env);
        let token_id = env
            .register_stellar_asset_contract_v2(token_issuer)
            .address();
        let token = token::Client::new(&env, &token_id);
        let token_admin = token::StellarAssetClient::new(&env, &token_id);

        client.init(&owner, &funder, &token_id);

        Self {
            env,
            owner,
            funder,
            grantee,
            random,
            token,
            token_admin,
            client,
        }
    }

    fn one_entry(&self, amount: i128) -> Vec<PayoutEntry> {
        vec![
            &self.env,
            PayoutEntry {
                recipient: self.grantee.clone(),
                amount,
            },
        ]
    }
}

// ─────────────────────────────────────────────────────────
// Owner-gated operations
// ─────────────────────────────────────────────────────────

#[test]
fn non_owner_cannot_set_payouts() {
    let s = RbacSetup::new();
    for caller in [&s.random, &s.funder, &s.grantee] {
        let res = s.client.try_set_payouts(caller, &s.one_entry(500), &true);
        assert_eq!(res, Err(Ok(Error::Unauthorized)));
    }
    assert_eq!(s.client.payouts(&s.grantee), 0);
    assert!(!s.client.finalized());
}

#[test]
fn non_owner_cannot_finalize() {
    let s = RbacSetup::new();
    assert_eq!(s.client.try_finalize(&s.random), Err(Ok(Error::Unauthorized)));
    assert_eq!(s.client.try_finalize(&s.funder), Err(Ok(Error::Unauthorized)));
    assert_eq!(s.client.phase(), Phase::Draft);
}

#[test]
fn non_owner_cannot_enable_payouts() {
    let s = RbacSetup::new();
    s.client.finalize(&s.owner);
    s.token_admin.mint(&s.client.address, &1_000);

    assert_eq!(
        s.client.try_enable_payouts(&s.funder),
        Err(Ok(Error::Unauthorized))
    );
    assert!(!s.client.funded());
}

#[test]
fn non_owner_cannot_reset() {
    let s = RbacSetup::new();
    s.client.set_payouts(&s.owner, &s.one_entry(500), &false);

    assert_eq!(s.client.try_reset(&s.random), Err(Ok(Error::Unauthorized)));
    assert_eq!(s.client.round(), 0);
    assert_eq!(s.client.payouts(&s.grantee), 500);
}

#[test]
fn non_owner_cannot_transfer_ownership() {
    let s = RbacSetup::new();
    assert_eq!(
        s.client.try_transfer_ownership(&s.random, &s.random),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(s.client.owner(), Some(s.owner.clone()));
}

#[test]
fn ownership_transfer_moves_owner_rights() {
    let s = RbacSetup::new();
    let new_owner = Address::generate(&s.env);
    s.client.transfer_ownership(&s.owner, &new_owner);

    assert_eq!(s.client.owner(), Some(new_owner.clone()));
    assert_eq!(
        s.client.try_set_payouts(&s.owner, &s.one_entry(1), &false),
        Err(Ok(Error::Unauthorized))
    );
    s.client.set_payouts(&new_owner, &s.one_entry(1), &false);
    assert_eq!(s.client.payouts(&s.grantee), 1);
}

#[test]
fn ownership_transfer_to_contract_is_rejected() {
    let s = RbacSetup::new();
    assert_eq!(
        s.client.try_transfer_ownership(&s.owner, &s.client.address),
        Err(Ok(Error::InvalidOwner))
    );
}

#[test]
fn renounced_contract_has_no_owner() {
    let s = RbacSetup::new();
    s.client.renounce_ownership(&s.owner);

    assert_eq!(s.client.owner(), None);
    assert_eq!(s.client.try_finalize(&s.owner), Err(Ok(Error::Unauthorized)));
    assert_eq!(
        s.client.try_renounce_ownership(&s.owner),
        Err(Ok(Error::Unauthorized))
    );
}

// ─────────────────────────────────────────────────────────
// Funder-gated operations
// ─────────────────────────────────────────────────────────

#[test]
fn owner_cannot_act_as_funder() {
    let s = RbacSetup::new();
    s.client.finalize(&s.owner);
    s.token_admin.mint(&s.client.address, &10_000);

    assert_eq!(
        s.client.try_withdraw_funding(&s.owner),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(
        s.client.try_add_funds(&s.owner, &100),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(s.client.custody_balance(), 10_000);
}

#[test]
fn stranger_cannot_withdraw_funding() {
    let s = RbacSetup::new();
    s.token_admin.mint(&s.client.address, &10_000);

    assert_eq!(
        s.client.try_withdraw_funding(&s.random),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(s.token.balance(&s.random), 0);
    assert_eq!(s.client.custody_balance(), 10_000);
}

#[test]
fn owner_and_funder_may_coincide() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register_contract(None, MatchPayoutsContract);
    let client = MatchPayoutsContractClient::new(&env, &contract_id);
    let admin = Address::generate(&env);
    let grantee = Address::generate(&env);
    let token_id = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let token_admin = token::StellarAssetClient::new(&env, &token_id);
    let token = token::Client::new(&env, &token_id);
    client.init(&admin, &admin, &token_id);

    let entries = vec![
        &env,
        PayoutEntry {
            recipient: grantee.clone(),
            amount: 700,
        },
    ];
    client.set_payouts(&admin, &entries, &true);
    token_admin.mint(&admin, &1_000);
    token.approve(&admin, &contract_id, &1_000, &(env.ledger().sequence() + 100));
    client.add_funds(&admin, &1_000);
    client.enable_payouts(&admin);
    client.claim_match_payout(&grantee);

    assert_eq!(client.withdraw_funding(&admin), 300);
    assert_eq!(token.balance(&grantee), 700);
    assert_eq!(token.balance(&admin), 300);
}

#[test]
fn uninitialized_contract_rejects_operations() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register_contract(None, MatchPayoutsContract);
    let client = MatchPayoutsContractClient::new(&env, &contract_id);
    let caller = Address::generate(&env);

    assert_eq!(client.try_finalize(&caller), Err(Ok(Error::NotInitialized)));
    assert_eq!(
        client.try_claim_match_payout(&caller),
        Err(Ok(Error::NotInitialized))
    );
    assert_eq!(
        client.try_withdraw_funding(&caller),
        Err(Ok(Error::NotInitialized))
    );
    assert_eq!(client.owner(), None);
}

#[test]
fn init_requires_owner_authorisation() {
    let env = Env::default();
    let contract_id = env.register_contract(None, MatchPayoutsContract);
    let client = MatchPayoutsContractClient::new(&env, &contract_id);
    let owner = Address::generate(&env);
    let funder = Address::generate(&env);
    let token_id = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    assert!(client.try_init(&owner, &funder, &token_id).is_err());
    assert_eq!(client.owner(), None);

    env.mock_all_auths();
    client.init(&owner, &funder, &token_id);
    assert_eq!(client.owner(), Some(owner));
}
