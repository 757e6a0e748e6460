#![no_std]
//! Grant matching payouts with an explicit recipient -> amount table.
//!
//! 1. Owner writes the table with `set_payouts` while the round is in Draft.
//! 2. Owner locks it with `finalize` (or `set_payouts(.., true)`).
//! 3. Funder approves the contract on the token, then calls `add_funds`.
//! 4. Owner opens claims with `enable_payouts`.
//! 5. Anyone calls `claim_match_payout(recipient)`; the recipient is paid
//!    their amount once, later calls for the same recipient pay nothing.

use payout_core::access::{self, RoundConfig};
use payout_core::lifecycle::{self, Phase};
use payout_core::mapping::{self, MappingRegistry, PayoutEntry};
use payout_core::{custody, ledger, Error};
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

#[contract]
pub struct MatchPayoutsContract;

#[contractimpl]
impl MatchPayoutsContract {
    /// Configure roles and the payout token. Call once.
    pub fn init(env: Env, owner: Address, funder: Address, token: Address) -> Result<(), Error> {
        access::init(&env, &owner, &funder, &token)
    }

    // ========================================================================
    // Owner
    // ========================================================================

    /// Add or overwrite payouts for the current round (owner, Draft only).
    pub fn set_payouts(
        env: Env,
        caller: Address,
        payouts: Vec<PayoutEntry>,
        finalize: bool,
    ) -> Result<(), Error> {
        mapping::set_payouts(&env, &caller, &payouts, finalize)
    }

    /// Lock the payout table.
    pub fn finalize(env: Env, caller: Address) -> Result<(), Error> {
        access::require_owner(&env, &caller)?;
        lifecycle::finalize(&env)?;
        Ok(())
    }

    /// Open claims. Requires a finalized table and a non-empty custody balance.
    pub fn enable_payouts(env: Env, caller: Address) -> Result<(), Error> {
        access::require_owner(&env, &caller)?;
        let balance = custody::balance(&env)?;
        lifecycle::enable_payouts(&env, balance)?;
        Ok(())
    }

    /// Start a new round with an empty table. Returns the new round number.
    /// Refused with `ClaimsInProgress` once some, but not all, payouts have
    /// been claimed.
    pub fn reset(env: Env, caller: Address) -> Result<u32, Error> {
        access::require_owner(&env, &caller)?;
        Ok(ledger::reset::<MappingRegistry>(&env)?.round)
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        access::transfer_ownership(&env, &caller, &new_owner)
    }

    pub fn renounce_ownership(env: Env, caller: Address) -> Result<(), Error> {
        access::renounce_ownership(&env, &caller)
    }

    // ========================================================================
    // Funder
    // ========================================================================

    /// Pull `amount` from the funder (pre-approved) into custody.
    pub fn add_funds(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        custody::add_funds(&env, &caller, amount)
    }

    /// Sweep the whole custody balance back to the funder.
    pub fn withdraw_funding(env: Env, caller: Address) -> Result<i128, Error> {
        custody::withdraw_funding(&env, &caller)
    }

    // ========================================================================
    // Claims
    // ========================================================================

    /// Pay `recipient` what they are owed. Callable by anyone; returns the
    /// amount transferred, zero if nothing is owed.
    pub fn claim_match_payout(env: Env, recipient: Address) -> Result<i128, Error> {
        ledger::claim::<MappingRegistry>(&env, &recipient)
    }

    /// Same as `claim_match_payout`.
    pub fn withdraw(env: Env, recipient: Address) -> Result<i128, Error> {
        ledger::claim::<MappingRegistry>(&env, &recipient)
    }

    // ========================================================================
    // Views
    // ========================================================================

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

    pub fn finalized(env: Env) -> Result<bool, Error> {
        Ok(lifecycle::load(&env)?.finalized)
    }

    pub fn funded(env: Env) -> Result<bool, Error> {
        Ok(lifecycle::load(&env)?.funded)
    }

    /// Amount still owed to `recipient` in the current round.
    pub fn payouts(env: Env, recipient: Address) -> Result<i128, Error> {
        let round = lifecycle::load(&env)?.round;
        Ok(mapping::payout_of(&env, round, &recipient))
    }

    /// Sum of all payouts set for the current round, claimed or not.
    pub fn total_owed(env: Env) -> Result<i128, Error> {
        let round = lifecycle::load(&env)?.round;
        Ok(ledger::total_owed(&env, round))
    }

    pub fn total_claimed(env: Env) -> Result<i128, Error> {
        let round = lifecycle::load(&env)?.round;
        Ok(ledger::total_claimed(&env, round))
    }

    pub fn custody_balance(env: Env) -> Result<i128, Error> {
        custody::balance(&env)
    }
}

#[cfg(test)]
mod test_rbac;
