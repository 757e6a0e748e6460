//! Non-reentrant lock for every entry point that moves custodial value.
//!
//! Claim bookkeeping is already written before the outbound transfer, so a
//! reentrant claim would only hit the no-op or `AlreadyClaimed` path. The lock
//! additionally blocks cross-function re-entry (claim -> withdraw_funding).
//!
//! The flag lives in instance storage. A panic or an `Err` return rolls the
//! invocation back, so the lock cannot stay held after a failure.

use crate::storage::DataKey;
use soroban_sdk::Env;

/// Acquire the guard.
///
/// # Panics
/// Panics with `"Reentrancy detected"` if the guard is already held.
pub fn acquire(env: &Env) {
    if env.storage().instance().has(&DataKey::ReentrancyGuard) {
        panic!("Reentrancy detected");
    }
    env.storage()
        .instance()
        .set(&DataKey::ReentrancyGuard, &true);
}

/// Release the guard. Call on the success path before returning.
pub fn release(env: &Env) {
    env.storage().instance().remove(&DataKey::ReentrancyGuard);
}

#[cfg(test)]
pub(crate) fn is_active(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::ReentrancyGuard)
}
