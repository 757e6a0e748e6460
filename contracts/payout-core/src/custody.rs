//! Pooled token custody: funder deposits and sweeps, and the outbound
//! payout transfer used by the claim ledger.
//!
//! Token movements are pre-checked against balance and allowance so a
//! shortfall surfaces as `TransferFailed` instead of a host trap. Either way
//! the invocation is rolled back as a unit.

use crate::access;
use crate::errors::Error;
use crate::events::{self, FundingWithdrawn, FundsAdded, EVENT_VERSION};
use crate::lifecycle;
use crate::reentrancy_guard;
use soroban_sdk::{log, token, Address, Env};

pub fn token_client(env: &Env) -> Result<token::Client<'_>, Error> {
    let token = access::token(env)?;
    Ok(token::Client::new(env, &token))
}

/// Token balance currently held by the contract.
pub fn balance(env: &Env) -> Result<i128, Error> {
    let client = token_client(env)?;
    Ok(client.balance(&env.current_contract_address()))
}

/// Pull `amount` from the funder into custody. The funder must have approved
/// the contract as spender beforehand.
pub fn add_funds(env: &Env, caller: &Address, amount: i128) -> Result<(), Error> {
    access::require_funder(env, caller)?;
    lifecycle::require_finalized(env)?;
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    reentrancy_guard::acquire(env);

    let client = token_client(env)?;
    let contract = env.current_contract_address();
    if client.allowance(caller, &contract) < amount || client.balance(caller) < amount {
        return Err(Error::TransferFailed);
    }
    client.transfer_from(&contract, caller, &contract, &amount);

    events::emit_funds_added(
        env,
        FundsAdded {
            version: EVENT_VERSION,
            funder: caller.clone(),
            amount,
        },
    );

    reentrancy_guard::release(env);
    Ok(())
}

/// Sweep the whole custody balance back to the funder. Available in every
/// phase as the escape hatch for over-funding or a cancelled round.
pub fn withdraw_funding(env: &Env, caller: &Address) -> Result<i128, Error> {
    access::require_funder(env, caller)?;

    reentrancy_guard::acquire(env);

    let client = token_client(env)?;
    let contract = env.current_contract_address();
    let amount = client.balance(&contract);
    if amount > 0 {
        client.transfer(&contract, caller, &amount);
    }

    events::emit_funding_withdrawn(
        env,
        FundingWithdrawn {
            version: EVENT_VERSION,
            funder: caller.clone(),
            amount,
        },
    );
    log!(env, "funding withdrawn", amount);

    reentrancy_guard::release(env);
    Ok(amount)
}

/// Outbound transfer of a settled payout. Callers hold the reentrancy guard
/// and have already recorded the claim.
pub(crate) fn pay_out(env: &Env, recipient: &Address, amount: i128) -> Result<(), Error> {
    let client = token_client(env)?;
    let contract = env.current_contract_address();
    if client.balance(&contract) < amount {
        return Err(Error::TransferFailed);
    }
    client.transfer(&contract, recipient, &amount);
    Ok(())
}
