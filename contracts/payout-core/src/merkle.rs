//! Merkle-committed registry.
//!
//! The owner commits a single 32-byte root over `(index, payee, amount)`
//! leaves; each claim carries its own membership proof. Only the root and a
//! per-index claimed bitmap are ever stored.
//!
//! Leaf: `sha256(index_be32 || xdr(payee) || amount_be128)`.
//! Node: `sha256(min(a, b) || max(a, b))`, so proofs carry no left/right flags.
//! When a level has an odd node count the last node is paired with itself,
//! which makes every valid proof at least one element long.

use crate::access;
use crate::errors::Error;
use crate::events::{self, RootCommitted, EVENT_VERSION};
use crate::ledger::{self, Payout, Registry};
use crate::lifecycle::{self, ClaimGate};
use crate::custody;
use crate::storage::{DataKey, LEDGERS_PER_DAY};
use soroban_sdk::{contracttype, xdr::ToXdr, Address, Bytes, BytesN, Env, Vec};

/// Enough levels for 2^32 leaves, the full `u32` index space.
pub const MAX_PROOF_LEN: u32 = 32;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MerkleClaim {
    pub index: u32,
    pub payee: Address,
    pub amount: i128,
    pub merkle_proof: Vec<BytesN<32>>,
}

pub fn leaf_hash(env: &Env, index: u32, payee: &Address, amount: i128) -> BytesN<32> {
    let mut data = Bytes::from_array(env, &index.to_be_bytes());
    data.append(&payee.clone().to_xdr(env));
    data.extend_from_array(&amount.to_be_bytes());
    env.crypto().sha256(&data).into()
}

pub fn hash_pair(env: &Env, a: &BytesN<32>, b: &BytesN<32>) -> BytesN<32> {
    let (a, b) = (a.to_array(), b.to_array());
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut data = Bytes::from_array(env, &lo);
    data.extend_from_array(&hi);
    env.crypto().sha256(&data).into()
}

/// Fold `proof` upwards from `leaf` and return the implied root.
pub fn process_proof(env: &Env, leaf: &BytesN<32>, proof: &Vec<BytesN<32>>) -> BytesN<32> {
    let mut computed = leaf.clone();
    for sibling in proof.iter() {
        computed = hash_pair(env, &computed, &sibling);
    }
    computed
}

pub fn verify(env: &Env, root: &BytesN<32>, leaf: &BytesN<32>, proof: &Vec<BytesN<32>>) -> bool {
    if proof.is_empty() || proof.len() > MAX_PROOF_LEN {
        return false;
    }
    process_proof(env, leaf, proof) == *root
}

fn next_level(env: &Env, level: &Vec<BytesN<32>>) -> Vec<BytesN<32>> {
    let mut next = Vec::new(env);
    let mut i = 0;
    while i < level.len() {
        let left = level.get_unchecked(i);
        let right = if i + 1 < level.len() {
            level.get_unchecked(i + 1)
        } else {
            left.clone()
        };
        next.push_back(hash_pair(env, &left, &right));
        i += 2;
    }
    next
}

/// Root over `leaves` in the order given. `None` for an empty set.
pub fn build_root(env: &Env, leaves: &Vec<BytesN<32>>) -> Option<BytesN<32>> {
    if leaves.is_empty() {
        return None;
    }
    let mut level = leaves.clone();
    loop {
        level = next_level(env, &level);
        if level.len() == 1 {
            return level.first();
        }
    }
}

/// Sibling path for the leaf at `position`, bottom-up.
pub fn build_proof(env: &Env, leaves: &Vec<BytesN<32>>, position: u32) -> Option<Vec<BytesN<32>>> {
    if position >= leaves.len() {
        return None;
    }
    let mut proof = Vec::new(env);
    let mut level = leaves.clone();
    let mut pos = position;
    loop {
        let sibling = pos ^ 1;
        let node = if sibling < level.len() {
            level.get_unchecked(sibling)
        } else {
            level.get_unchecked(pos)
        };
        proof.push_back(node);
        level = next_level(env, &level);
        pos /= 2;
        if level.len() == 1 {
            return Some(proof);
        }
    }
}

pub fn merkle_root(env: &Env, round: u32) -> Option<BytesN<32>> {
    env.storage().persistent().get(&DataKey::MerkleRoot(round))
}

fn store_root(env: &Env, round: u32, root: &BytesN<32>) {
    let key = DataKey::MerkleRoot(round);
    env.storage().persistent().set(&key, root);
    env.storage()
        .persistent()
        .extend_ttl(&key, LEDGERS_PER_DAY, LEDGERS_PER_DAY);
    events::emit_root_committed(
        env,
        RootCommitted {
            version: EVENT_VERSION,
            round,
            root: root.clone(),
        },
    );
}

/// Commit and lock a root supplied at deployment. Only valid straight after
/// `access::init`, while round 0 is still in Draft.
pub fn commit_initial_root(env: &Env, root: &BytesN<32>) -> Result<(), Error> {
    let state = lifecycle::require_draft(env)?;
    store_root(env, state.round, root);
    lifecycle::finalize(env)?;
    Ok(())
}

/// Owner-only, Draft-only. A later commit in the same round replaces the
/// earlier root.
pub fn commit_root(
    env: &Env,
    caller: &Address,
    root: &BytesN<32>,
    finalize: bool,
) -> Result<(), Error> {
    access::require_owner(env, caller)?;
    let state = lifecycle::require_draft(env)?;
    store_root(env, state.round, root);
    if finalize {
        lifecycle::finalize(env)?;
    }
    Ok(())
}

/// Lock the committed root; refuses when nothing has been committed.
pub fn finalize(env: &Env, caller: &Address) -> Result<(), Error> {
    access::require_owner(env, caller)?;
    let state = lifecycle::require_draft(env)?;
    if merkle_root(env, state.round).is_none() {
        return Err(Error::NoRootCommitted);
    }
    lifecycle::finalize(env)?;
    Ok(())
}

pub struct MerkleRegistry;

impl Registry for MerkleRegistry {
    type Ticket = MerkleClaim;

    const GATE: ClaimGate = ClaimGate::Finalized;

    fn admit(env: &Env, round: u32, claim: &MerkleClaim) -> Result<Option<Payout>, Error> {
        if claim.amount < 0 {
            return Err(Error::InvalidAmount);
        }
        let root = merkle_root(env, round).ok_or(Error::InvalidProof)?;
        let leaf = leaf_hash(env, claim.index, &claim.payee, claim.amount);
        if !verify(env, &root, &leaf, &claim.merkle_proof) {
            return Err(Error::InvalidProof);
        }
        ledger::mark_claimed(env, round, claim.index)?;
        Ok(Some(Payout {
            recipient: claim.payee.clone(),
            amount: claim.amount,
        }))
    }

    /// Leaf amounts are not known on chain, so a round counts as settled
    /// once custody has been drained.
    fn settled(env: &Env, _round: u32) -> Result<bool, Error> {
        Ok(custody::balance(env)? <= 0)
    }
}
