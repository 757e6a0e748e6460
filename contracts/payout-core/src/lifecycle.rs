//! Round lifecycle: Draft -> Finalized -> Funded, with an owner-gated reset
//! that opens the next round.
//!
//! `finalized` and `funded` are tracked as separate flags so custody and
//! payout authorisation stay independent; `Phase` is the derived view.

use crate::errors::Error;
use crate::events::{self, Finalized, Funded, RoundReset, EVENT_VERSION};
use crate::storage::DataKey;
use soroban_sdk::{contracttype, log, Env};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Draft,
    Finalized,
    Funded,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundState {
    pub round: u32,
    pub finalized: bool,
    pub funded: bool,
}

impl RoundState {
    fn fresh(round: u32) -> Self {
        RoundState {
            round,
            finalized: false,
            funded: false,
        }
    }

    pub fn phase(&self) -> Phase {
        match (self.finalized, self.funded) {
            (true, true) => Phase::Funded,
            (true, false) => Phase::Finalized,
            _ => Phase::Draft,
        }
    }
}

/// What a claim needs before the registry is consulted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClaimGate {
    /// Registry locked and payouts explicitly enabled.
    Funded,
    /// Registry locked; custody is checked by the transfer itself.
    Finalized,
}

pub(crate) fn open_first_round(env: &Env) {
    save(env, &RoundState::fresh(0));
}

pub fn load(env: &Env) -> Result<RoundState, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Lifecycle)
        .ok_or(Error::NotInitialized)
}

fn save(env: &Env, state: &RoundState) {
    env.storage().instance().set(&DataKey::Lifecycle, state);
}

/// Registry edits are only accepted while the round is in Draft.
pub fn require_draft(env: &Env) -> Result<RoundState, Error> {
    let state = load(env)?;
    if state.finalized {
        return Err(Error::AlreadyFinalized);
    }
    Ok(state)
}

/// Custody deposits are accepted once the registry is locked.
pub fn require_finalized(env: &Env) -> Result<RoundState, Error> {
    let state = load(env)?;
    if !state.finalized {
        return Err(Error::PayoutsNotReady);
    }
    Ok(state)
}

pub fn require_claims_open(env: &Env, gate: ClaimGate) -> Result<RoundState, Error> {
    let state = load(env)?;
    match gate {
        ClaimGate::Funded if !(state.finalized && state.funded) => Err(Error::NotYetFunded),
        ClaimGate::Finalized if !state.finalized => Err(Error::PayoutsNotReady),
        _ => Ok(state),
    }
}

/// Lock the registry. Caller must already have passed the owner check.
pub fn finalize(env: &Env) -> Result<RoundState, Error> {
    let mut state = require_draft(env)?;
    state.finalized = true;
    save(env, &state);

    events::emit_finalized(
        env,
        Finalized {
            version: EVENT_VERSION,
            round: state.round,
            timestamp: env.ledger().timestamp(),
        },
    );
    log!(env, "round finalized", state.round);
    Ok(state)
}

/// Authorise claim-time transfers. `balance` is the current custody balance;
/// payouts cannot be enabled on an empty contract.
pub fn enable_payouts(env: &Env, balance: i128) -> Result<RoundState, Error> {
    let mut state = load(env)?;
    if !state.finalized {
        return Err(Error::NotFinalized);
    }
    if state.funded {
        return Err(Error::AlreadyFunded);
    }
    if balance <= 0 {
        return Err(Error::NotYetFunded);
    }
    state.funded = true;
    save(env, &state);

    events::emit_funded(
        env,
        Funded {
            version: EVENT_VERSION,
            round: state.round,
            balance,
            timestamp: env.ledger().timestamp(),
        },
    );
    Ok(state)
}

/// Start the next round in Draft. Registry and claim records of earlier
/// rounds stay where they are but are no longer addressable. Settlement is
/// checked by `ledger::reset`.
pub fn reset(env: &Env) -> Result<RoundState, Error> {
    let previous = load(env)?;
    let state = RoundState::fresh(previous.round + 1);
    save(env, &state);

    events::emit_round_reset(
        env,
        RoundReset {
            version: EVENT_VERSION,
            previous_round: previous.round,
            round: state.round,
        },
    );
    log!(env, "round reset", previous.round, state.round);
    Ok(state)
}
