//! Explicit recipient -> amount registry.

use crate::access;
use crate::errors::Error;
use crate::events::{self, PayoutAdded, EVENT_VERSION};
use crate::ledger::{self, Payout, Registry};
use crate::lifecycle::{self, ClaimGate};
use crate::storage::{DataKey, LEDGERS_PER_DAY};
use soroban_sdk::{contracttype, Address, Env, Vec};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PayoutEntry {
    pub recipient: Address,
    pub amount: i128,
}

/// Amount still owed to `recipient` in `round`; zero once claimed.
pub fn payout_of(env: &Env, round: u32, recipient: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Payout(round, recipient.clone()))
        .unwrap_or(0)
}

/// Write `entries` into the current round's table, later entries for the
/// same recipient overwriting earlier ones. With `finalize` the registry is
/// locked in the same invocation.
pub fn set_payouts(
    env: &Env,
    caller: &Address,
    entries: &Vec<PayoutEntry>,
    finalize: bool,
) -> Result<(), Error> {
    access::require_owner(env, caller)?;
    let state = lifecycle::require_draft(env)?;

    for entry in entries.iter() {
        if entry.amount < 0 {
            return Err(Error::InvalidAmount);
        }
        let previous = payout_of(env, state.round, &entry.recipient);
        let key = DataKey::Payout(state.round, entry.recipient.clone());
        env.storage().persistent().set(&key, &entry.amount);
        env.storage()
            .persistent()
            .extend_ttl(&key, LEDGERS_PER_DAY, LEDGERS_PER_DAY);
        ledger::adjust_owed(env, state.round, previous, entry.amount)?;

        events::emit_payout_added(
            env,
            PayoutAdded {
                version: EVENT_VERSION,
                round: state.round,
                recipient: entry.recipient,
                amount: entry.amount,
            },
        );
    }

    if finalize {
        lifecycle::finalize(env)?;
    }
    Ok(())
}

pub struct MappingRegistry;

impl Registry for MappingRegistry {
    type Ticket = Address;

    const GATE: ClaimGate = ClaimGate::Funded;

    fn admit(env: &Env, round: u32, recipient: &Address) -> Result<Option<Payout>, Error> {
        let amount = payout_of(env, round, recipient);
        if amount == 0 {
            return Ok(None);
        }
        env.storage()
            .persistent()
            .remove(&DataKey::Payout(round, recipient.clone()));
        Ok(Some(Payout {
            recipient: recipient.clone(),
            amount,
        }))
    }

    fn settled(env: &Env, round: u32) -> Result<bool, Error> {
        Ok(ledger::total_claimed(env, round) >= ledger::total_owed(env, round))
    }
}
