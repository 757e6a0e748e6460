//! Claim ledger shared by both registry variants.
//!
//! A registry decides whether a claim is admissible and records its
//! consumption; the ledger wraps that in the lifecycle gate, the reentrancy
//! guard, the outbound transfer and the `PayoutClaimed` event. Consumption is
//! always written before the transfer.

use crate::custody;
use crate::errors::Error;
use crate::events::{self, PayoutClaimed, EVENT_VERSION};
use crate::lifecycle::{self, ClaimGate, RoundState};
use crate::reentrancy_guard;
use crate::storage::{DataKey, LEDGERS_PER_DAY};
use soroban_sdk::{log, Address, Env};

const WORD_BITS: u32 = 128;

/// An admitted claim: who gets paid and how much.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Payout {
    pub recipient: Address,
    pub amount: i128,
}

/// Admission strategy for a payout registry.
pub trait Registry {
    /// Claim request as submitted by the (possibly relaying) caller.
    type Ticket;

    const GATE: ClaimGate;

    /// Check the ticket against the registry for `round` and mark it
    /// consumed. `Ok(None)` is a successful claim that pays nothing.
    fn admit(env: &Env, round: u32, ticket: &Self::Ticket) -> Result<Option<Payout>, Error>;

    /// Whether every entitlement of `round` has been paid out.
    fn settled(env: &Env, round: u32) -> Result<bool, Error>;
}

/// Settle one claim through registry `R`. Returns the amount transferred.
///
/// No authorisation is required: value only ever moves to the recipient the
/// registry admitted, never to the invoker.
pub fn claim<R: Registry>(env: &Env, ticket: &R::Ticket) -> Result<i128, Error> {
    reentrancy_guard::acquire(env);

    let state = lifecycle::require_claims_open(env, R::GATE)?;
    let paid = match R::admit(env, state.round, ticket)? {
        None => 0,
        Some(payout) => {
            add_claimed(env, state.round, payout.amount)?;
            custody::pay_out(env, &payout.recipient, payout.amount)?;

            events::emit_payout_claimed(
                env,
                PayoutClaimed {
                    version: EVENT_VERSION,
                    round: state.round,
                    recipient: payout.recipient.clone(),
                    amount: payout.amount,
                },
            );
            log!(env, "payout claimed", payout.recipient, payout.amount);
            payout.amount
        }
    };

    reentrancy_guard::release(env);
    Ok(paid)
}

/// Open the next round. Allowed before the first claim is paid and again
/// once the round is settled; in between, unpaid entitlements would be lost.
/// Caller must already have passed the owner check.
pub fn reset<R: Registry>(env: &Env) -> Result<RoundState, Error> {
    let state = lifecycle::load(env)?;
    if total_claimed(env, state.round) > 0 && !R::settled(env, state.round)? {
        return Err(Error::ClaimsInProgress);
    }
    lifecycle::reset(env)
}

pub fn total_owed(env: &Env, round: u32) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::TotalOwed(round))
        .unwrap_or(0)
}

/// Replace `previous` with `current` in the round's owed total.
pub(crate) fn adjust_owed(env: &Env, round: u32, previous: i128, current: i128) -> Result<(), Error> {
    let total = total_owed(env, round)
        .checked_sub(previous)
        .and_then(|t| t.checked_add(current))
        .ok_or(Error::InvalidAmount)?;
    store_total(env, &DataKey::TotalOwed(round), total);
    Ok(())
}

pub fn total_claimed(env: &Env, round: u32) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::TotalClaimed(round))
        .unwrap_or(0)
}

fn add_claimed(env: &Env, round: u32, amount: i128) -> Result<(), Error> {
    let total = total_claimed(env, round)
        .checked_add(amount)
        .ok_or(Error::InvalidAmount)?;
    store_total(env, &DataKey::TotalClaimed(round), total);
    Ok(())
}

fn store_total(env: &Env, key: &DataKey, total: i128) {
    let store = env.storage().persistent();
    store.set(key, &total);
    store.extend_ttl(key, LEDGERS_PER_DAY, LEDGERS_PER_DAY);
}

fn claimed_word(env: &Env, round: u32, index: u32) -> (DataKey, u128, u128) {
    let key = DataKey::ClaimedWord(round, index / WORD_BITS);
    let word: u128 = env.storage().persistent().get(&key).unwrap_or(0);
    let mask = 1u128 << (index % WORD_BITS);
    (key, word, mask)
}

pub fn is_claimed(env: &Env, round: u32, index: u32) -> bool {
    let (_, word, mask) = claimed_word(env, round, index);
    word & mask != 0
}

/// Set the claimed bit for `index`. Fails if it was already set.
pub(crate) fn mark_claimed(env: &Env, round: u32, index: u32) -> Result<(), Error> {
    let (key, word, mask) = claimed_word(env, round, index);
    if word & mask != 0 {
        return Err(Error::AlreadyClaimed);
    }
    env.storage().persistent().set(&key, &(word | mask));
    env.storage()
        .persistent()
        .extend_ttl(&key, LEDGERS_PER_DAY, LEDGERS_PER_DAY);
    Ok(())
}
