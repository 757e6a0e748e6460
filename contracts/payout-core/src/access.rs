//! Owner and funder roles.
//!
//! Guarded entry points receive the acting address explicitly, require its
//! authorisation, then compare it with the stored role. Owner and funder are
//! configured independently at `init`; a deployment may set them to the same
//! address.

use crate::errors::Error;
use crate::events::{self, OwnershipTransferred, EVENT_VERSION};
use crate::lifecycle;
use crate::storage::DataKey;
use soroban_sdk::{contracttype, log, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundConfig {
    pub owner: Option<Address>,
    pub funder: Address,
    pub token: Address,
    pub round: u32,
}

/// Store roles and token, and open round 0 in Draft. Callable once, and
/// only with the owner's authorisation.
pub fn init(env: &Env, owner: &Address, funder: &Address, token: &Address) -> Result<(), Error> {
    if is_initialized(env) {
        return Err(Error::AlreadyInitialized);
    }
    owner.require_auth();
    let store = env.storage().instance();
    store.set(&DataKey::Owner, owner);
    store.set(&DataKey::Funder, funder);
    store.set(&DataKey::Token, token);
    lifecycle::open_first_round(env);
    log!(env, "payout round initialized", owner.clone(), funder.clone(), token.clone());
    Ok(())
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Token)
}

/// `None` once ownership has been renounced.
pub fn owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub fn funder(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Funder)
        .ok_or(Error::NotInitialized)
}

pub fn token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotInitialized)
}

pub fn config(env: &Env) -> Result<RoundConfig, Error> {
    Ok(RoundConfig {
        owner: owner(env),
        funder: funder(env)?,
        token: token(env)?,
        round: lifecycle::load(env)?.round,
    })
}

pub fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    if !is_initialized(env) {
        return Err(Error::NotInitialized);
    }
    caller.require_auth();
    match owner(env) {
        Some(owner) if owner == *caller => Ok(()),
        _ => Err(Error::Unauthorized),
    }
}

pub fn require_funder(env: &Env, caller: &Address) -> Result<(), Error> {
    let funder = funder(env)?;
    caller.require_auth();
    if funder != *caller {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

/// Hand the owner role to `new_owner` in a single invocation.
///
/// `new_owner` must co-authorise the call, which rules out handing control
/// to an identity nobody can sign for. The contract's own address is
/// rejected outright.
pub fn transfer_ownership(env: &Env, caller: &Address, new_owner: &Address) -> Result<(), Error> {
    require_owner(env, caller)?;
    if *new_owner == env.current_contract_address() {
        return Err(Error::InvalidOwner);
    }
    new_owner.require_auth();
    env.storage().instance().set(&DataKey::Owner, new_owner);

    events::emit_ownership_transferred(
        env,
        OwnershipTransferred {
            version: EVENT_VERSION,
            previous_owner: caller.clone(),
            new_owner: Some(new_owner.clone()),
        },
    );
    Ok(())
}

/// Give up the owner role permanently. Owner-gated operations fail with
/// `Unauthorized` afterwards; funder operations keep working.
pub fn renounce_ownership(env: &Env, caller: &Address) -> Result<(), Error> {
    require_owner(env, caller)?;
    env.storage().instance().remove(&DataKey::Owner);

    events::emit_ownership_transferred(
        env,
        OwnershipTransferred {
            version: EVENT_VERSION,
            previous_owner: caller.clone(),
            new_owner: None,
        },
    );
    Ok(())
}
