#![no_std]
//! Grant matching payouts committed as a Merkle root.
//!
//! The payout set is agreed off-chain as leaves `(index, payee, amount)`;
//! the contract stores only the root and which indices have been paid. Any
//! account may submit a claim with its proof, funds always go to `payee`.
//!
//! The root can be supplied at `init`, which locks it straight away, or
//! committed later with `commit_root` while the round is in Draft.

use payout_core::access::{self, RoundConfig};
use payout_core::lifecycle::{self, Phase};
use payout_core::merkle::{self, MerkleClaim, MerkleRegistry};
use payout_core::{custody, ledger, Error};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env};

#[contract]
pub struct MerklePayoutContract;

#[contractimpl]
impl MerklePayoutContract {
    /// Configure roles, token and optionally the root. Call once.
    pub fn init(
        env: Env,
        owner: Address,
        funder: Address,
        token: Address,
        merkle_root: Option<BytesN<32>>,
    ) -> Result<(), Error> {
        access::init(&env, &owner, &funder, &token)?;
        if let Some(root) = merkle_root {
            merkle::commit_initial_root(&env, &root)?;
        }
        Ok(())
    }

    /// Commit (or replace) the round's root. Owner only, Draft only.
    pub fn commit_root(
        env: Env,
        caller: Address,
        root: BytesN<32>,
        finalize: bool,
    ) -> Result<(), Error> {
        merkle::commit_root(&env, &caller, &root, finalize)
    }

    /// Lock the committed root; claims open immediately.
    pub fn finalize(env: Env, caller: Address) -> Result<(), Error> {
        merkle::finalize(&env, &caller)
    }

    /// Start a new round with no root. Returns the new round number. After
    /// the first paid claim, custody must be drained first.
    pub fn reset(env: Env, caller: Address) -> Result<u32, Error> {
        access::require_owner(&env, &caller)?;
        Ok(ledger::reset::<MerkleRegistry>(&env)?.round)
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        access::transfer_ownership(&env, &caller, &new_owner)
    }

    pub fn renounce_ownership(env: Env, caller: Address) -> Result<(), Error> {
        access::renounce_ownership(&env, &caller)
    }

    pub fn add_funds(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        custody::add_funds(&env, &caller, amount)
    }

    pub fn withdraw_funding(env: Env, caller: Address) -> Result<i128, Error> {
        custody::withdraw_funding(&env, &caller)
    }

    /// Verify `claim` against the root and pay `claim.payee`. A second claim
    /// for the same index fails with `AlreadyClaimed`.
    pub fn claim(env: Env, claim: MerkleClaim) -> Result<i128, Error> {
        ledger::claim::<MerkleRegistry>(&env, &claim)
    }

    pub fn is_claimed(env: Env, index: u32) -> Result<bool, Error> {
        let round = lifecycle::load(&env)?.round;
        Ok(ledger::is_claimed(&env, round, index))
    }

    pub fn merkle_root(env: Env) -> Result<Option<BytesN<32>>, Error> {
        let round = lifecycle::load(&env)?.round;
        Ok(merkle::merkle_root(&env, round))
    }

    pub fn owner(env: Env) -> Option<Address> {
        access::owner(&env)
    }

    pub fn funder(env: Env) -> Result<Address, Error> {
        access::funder(&env)
    }

    pub fn token(env: Env) -> Result<Address, Error> {
        access::token(&env)
    }

    pub fn get_config(env: Env) -> Result<RoundConfig, Error> {
        access::config(&env)
    }

    pub fn round(env: Env) -> Result<u32, Error> {
        Ok(lifecycle::load(&env)?.round)
    }

    pub fn phase(env: Env) -> Result<Phase, Error> {
        Ok(lifecycle::load(&env)?.phase())
    }

    pub fn total_claimed(env: Env) -> Result<i128, Error> {
        let round = lifecycle::load(&env)?.round;
        Ok(ledger::total_claimed(&env, round))
    }

    pub fn custody_balance(env: Env) -> Result<i128, Error> {
        custody::balance(&env)
    }
}
